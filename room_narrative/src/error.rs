//! Error types for the look pipeline.

use room_rules::RoomError;
use thiserror::Error;

/// Errors raised while setting up a describer.
///
/// Describing a room never fails once the describer exists.
#[derive(Debug, Error)]
pub enum NarrativeError {
    /// A markup pattern failed to compile.
    #[error("invalid markup pattern: {0}")]
    Markup(#[from] regex_lite::Error),

    /// The room configuration was rejected.
    #[error(transparent)]
    Rules(#[from] RoomError),
}
