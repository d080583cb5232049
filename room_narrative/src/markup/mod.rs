//! Inline markup understood in description and detail text.
//!
//! - **legacy**: `<night>...</night>` spans kept only at that time of day
//! - **state**: `$state(name, text)` calls kept only while `name` applies

mod legacy;
mod state;

pub use legacy::*;
pub use state::*;
