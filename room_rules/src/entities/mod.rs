//! Room entities and the per-room stores that back them.

mod components;
mod room;

pub use components::*;
pub use room::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a room, stable across saves and loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub Uuid);

impl RoomId {
    /// Identity for a newly built room.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Identity of a room the host already knows by UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The all-zero identity, a placeholder until the host assigns a real one.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for RoomId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
