//! # Room Rules
//!
//! The data side of stateful rooms: room identity, the room-state set, the
//! description and detail stores, and the game calendar that turns an
//! absolute game time into a time of day and a season.
//! This crate holds state only; choosing and rendering a description lives in
//! `room_narrative`.

pub mod calendar;
pub mod cycles;
pub mod entities;
pub mod error;

pub use calendar::*;
pub use cycles::*;
pub use entities::*;
pub use error::*;
