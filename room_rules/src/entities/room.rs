//! Room definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{DescriptionStore, DetailStore, RoomId, RoomStateSet};
use crate::error::RoomError;

/// A room with state-dependent descriptions.
///
/// The host object model owns the room's lifetime and persists it however
/// it likes; everything here is plain serializable data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub key: String,

    /// Active room states, e.g. "on_fire" or a pinned season.
    #[serde(default)]
    pub states: RoomStateSet,

    #[serde(default)]
    pub descriptions: DescriptionStore,

    #[serde(default)]
    pub details: DetailStore,
}

impl Room {
    /// Create a new room with the given key and no descriptions.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            id: RoomId::new(),
            key: key.into(),
            states: RoomStateSet::new(),
            descriptions: DescriptionStore::new(),
            details: DetailStore::new(),
        }
    }

    /// Set the default description.
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.descriptions.set(None, text);
        self
    }

    /// Set the description for a room state or season.
    pub fn with_state_description(mut self, state: &str, text: impl Into<String>) -> Self {
        self.descriptions.set(Some(state), text);
        self
    }

    /// Add active room states.
    pub fn with_states<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.states.add(names);
        self
    }

    /// Add a lookable detail.
    pub fn with_detail(mut self, key: &str, text: impl Into<String>) -> Self {
        self.details.add(key, text);
        self
    }

    pub fn add_room_state<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.states.add(names);
    }

    pub fn remove_room_state<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.states.remove(names);
    }

    /// Drop every room state, including pinned seasons.
    pub fn clear_room_states(&mut self) {
        self.states.clear();
    }

    /// Active room states in sorted order.
    pub fn room_states(&self) -> Vec<&str> {
        self.states.list()
    }

    /// Store a description; `None` sets the default description.
    pub fn add_description(&mut self, text: impl Into<String>, state: Option<&str>) {
        self.descriptions.set(state, text);
    }

    /// Remove the description for `state`. The default cannot be removed.
    pub fn remove_description(&mut self, state: &str) -> Result<Option<String>, RoomError> {
        self.descriptions.remove(state)
    }

    pub fn all_descriptions(&self) -> BTreeMap<Option<&str>, &str> {
        self.descriptions.all()
    }

    pub fn add_detail(&mut self, key: &str, text: impl Into<String>) {
        self.details.add(key, text);
    }

    pub fn remove_detail(&mut self, key: &str) -> Option<String> {
        self.details.remove(key)
    }

    /// Raw detail text, before any markup is processed.
    pub fn get_detail(&self, key: &str) -> Option<&str> {
        self.details.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_room() {
        let room = Room::new("Town Square");
        assert_eq!(room.key, "Town Square");
        assert!(room.room_states().is_empty());
        assert_eq!(room.descriptions.get(None), None);
        assert!(room.details.is_empty());
    }

    #[test]
    fn test_room_builder() {
        let room = Room::new("Forge")
            .with_description("A hot forge.")
            .with_state_description("cold", "The forge is cold.")
            .with_states(["Cold"])
            .with_detail("anvil", "A battered anvil.");

        assert_eq!(room.room_states(), vec!["cold"]);
        assert_eq!(room.descriptions.get(Some("cold")), Some("The forge is cold."));
        assert_eq!(room.get_detail("anv"), Some("A battered anvil."));
    }

    #[test]
    fn test_room_state_operations() {
        let mut room = Room::new("Cellar");
        room.add_room_state(["flooded", "dark"]);
        assert_eq!(room.room_states(), vec!["dark", "flooded"]);

        room.remove_room_state(["dark"]);
        assert_eq!(room.room_states(), vec!["flooded"]);

        room.clear_room_states();
        assert!(room.room_states().is_empty());
    }

    #[test]
    fn test_room_description_operations() {
        let mut room = Room::new("Cellar");
        room.add_description("A damp cellar.", None);
        room.add_description("Water to the knees.", Some("flooded"));

        assert_eq!(room.all_descriptions().len(), 2);
        assert!(room.remove_description("desc").is_err());
        assert_eq!(
            room.remove_description("flooded").unwrap(),
            Some("Water to the knees.".to_string())
        );
        assert_eq!(room.all_descriptions().len(), 1);
    }

    #[test]
    fn test_room_serde_shape() {
        let room = Room::new("Garden")
            .with_description("A garden.")
            .with_state_description("spring", "A blooming garden.")
            .with_states(["overgrown"])
            .with_detail("rose", "A red rose.");

        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["states"], serde_json::json!(["overgrown"]));
        assert_eq!(json["details"]["rose"], "A red rose.");

        let restored: Room = serde_json::from_value(json).unwrap();
        assert_eq!(restored.id, room.id);
        assert_eq!(restored.states, room.states);
        assert_eq!(restored.descriptions, room.descriptions);
    }

    #[test]
    fn test_room_deserializes_without_stores() {
        let json = serde_json::json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "key": "Void",
        });
        let room: Room = serde_json::from_value(json).unwrap();
        assert_eq!(room.id, RoomId::nil());
        assert!(room.states.is_empty());
    }
}
