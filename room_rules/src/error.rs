//! Error types for the room data model.

use thiserror::Error;

/// Errors raised while building or mutating room data.
#[derive(Debug, Error)]
pub enum RoomError {
    /// The default description slot can be replaced but never removed.
    #[error("the default description cannot be removed")]
    DefaultDescriptionProtected,

    /// A cycle table does not partition the cycle.
    #[error("invalid {table} table: {reason}")]
    InvalidTable { table: &'static str, reason: String },

    /// The TOML configuration could not be parsed.
    #[error("failed to parse room configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl RoomError {
    /// Create an invalid table error.
    pub fn invalid_table(table: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidTable {
            table,
            reason: reason.into(),
        }
    }
}
