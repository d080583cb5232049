//! # Room Narrative
//!
//! Turns a room's stored descriptions into the text a player reads. This
//! crate reads room data from `room_rules` and never mutates it.
//!
//! ## Core Components
//!
//! - **describer**: picks one description by room state, pinned season,
//!   current season or default, and runs it through the markup filters
//! - **markup**: inline `<morning>...</morning>` time-of-day spans and
//!   `$state(name, text)` room-state conditionals
//!
//! ## Look Pipeline
//!
//! 1. **Clock**: read hour and month from the absolute game time
//! 2. **Classify**: map them onto a time of day and a season
//! 3. **Select**: choose the description by the fixed priority order
//! 4. **Filter**: resolve time-of-day spans, then `$state()` calls

pub mod describer;
pub mod error;
pub mod markup;

pub use describer::*;
pub use error::*;
pub use markup::*;
