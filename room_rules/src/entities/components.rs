//! Per-room stores: active room states, descriptions and details.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::RoomError;

/// Attribute key that addresses the default description.
pub const DEFAULT_DESCRIPTION_KEY: &str = "desc";

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// The set of room-state tags currently active on a room.
///
/// Tags are stored lower-cased and iterate in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct RoomStateSet {
    tags: BTreeSet<String>,
}

impl RoomStateSet {
    /// Create a new empty state set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one or more states. Blank names are ignored.
    pub fn add<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let tag = normalize(name.as_ref());
            if !tag.is_empty() {
                self.tags.insert(tag);
            }
        }
    }

    /// Remove one or more states; names that are not set are skipped.
    pub fn remove<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.tags.remove(&normalize(name.as_ref()));
        }
    }

    /// Remove every state, season pins included.
    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains(&normalize(name))
    }

    /// All states in sorted order.
    pub fn list(&self) -> Vec<&str> {
        self.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Descriptions of a room: one default plus any number keyed by state or
/// season name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DescriptionStore {
    #[serde(default)]
    default: Option<String>,
    #[serde(default)]
    by_state: BTreeMap<String, String>,
}

impl DescriptionStore {
    /// Create a new empty description store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a key addresses the default slot.
    pub fn is_default_key(key: Option<&str>) -> bool {
        matches!(key, None | Some(DEFAULT_DESCRIPTION_KEY))
    }

    /// Store `text` under `key`, replacing any previous text.
    /// `None` and `"desc"` address the default description.
    pub fn set(&mut self, key: Option<&str>, text: impl Into<String>) {
        match key {
            Some(state) if !Self::is_default_key(key) => {
                self.by_state.insert(state.to_string(), text.into());
            }
            _ => self.default = Some(text.into()),
        }
    }

    pub fn get(&self, key: Option<&str>) -> Option<&str> {
        match key {
            Some(state) if !Self::is_default_key(key) => {
                self.by_state.get(state).map(String::as_str)
            }
            _ => self.default.as_deref(),
        }
    }

    /// Remove the description stored under a state key and return it.
    ///
    /// The default slot cannot be removed.
    pub fn remove(&mut self, key: &str) -> Result<Option<String>, RoomError> {
        if Self::is_default_key(Some(key)) {
            return Err(RoomError::DefaultDescriptionProtected);
        }
        Ok(self.by_state.remove(key))
    }

    /// Every description, keyed by state name with `None` for the default.
    ///
    /// The default entry is always present; it is empty if never set.
    pub fn all(&self) -> BTreeMap<Option<&str>, &str> {
        let mut all: BTreeMap<Option<&str>, &str> = self
            .by_state
            .iter()
            .map(|(key, text)| (Some(key.as_str()), text.as_str()))
            .collect();
        all.insert(None, self.default.as_deref().unwrap_or(""));
        all
    }

    /// Keys of the non-default descriptions, sorted.
    pub fn state_keys(&self) -> impl Iterator<Item = &str> {
        self.by_state.keys().map(String::as_str)
    }
}

/// Named details a player can look at inside a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct DetailStore {
    details: BTreeMap<String, String>,
}

impl DetailStore {
    /// Create a new empty detail store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a detail. The key is lower-cased.
    pub fn add(&mut self, key: &str, text: impl Into<String>) {
        let key = normalize(key);
        if !key.is_empty() {
            self.details.insert(key, text.into());
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.details.remove(&normalize(key))
    }

    /// Look a detail up by name.
    ///
    /// An exact match wins. Otherwise the detail whose key starts with the
    /// query and is closest to it in length is returned, ties going to the
    /// alphabetically first key.
    pub fn get(&self, key: &str) -> Option<&str> {
        let key = normalize(key);
        if key.is_empty() {
            return None;
        }
        if let Some(text) = self.details.get(&key) {
            return Some(text.as_str());
        }
        self.details
            .iter()
            .filter(|(candidate, _)| candidate.starts_with(&key))
            .min_by_key(|(candidate, _)| candidate.len().abs_diff(key.len()))
            .map(|(_, text)| text.as_str())
    }

    /// All details in key order.
    pub fn all(&self) -> &BTreeMap<String, String> {
        &self.details
    }

    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_add_remove_round_trip() {
        let mut states = RoomStateSet::new();

        states.add(["flooded"]);
        assert!(states.contains("flooded"));

        states.remove(["flooded"]);
        assert!(!states.contains("flooded"));
    }

    #[test]
    fn test_states_are_lowercase_and_unique() {
        let mut states = RoomStateSet::new();
        states.add(["On_Fire", "on_fire", "  FLOODED "]);

        assert_eq!(states.len(), 2);
        assert!(states.contains("ON_FIRE"));
        assert_eq!(states.list(), vec!["flooded", "on_fire"]);
    }

    #[test]
    fn test_state_remove_missing_is_noop() {
        let mut states = RoomStateSet::new();
        states.add(["dark"]);
        states.remove(["missing", "DARK"]);
        assert!(states.is_empty());
    }

    #[test]
    fn test_state_clear_removes_seasons_too() {
        let mut states = RoomStateSet::new();
        states.add(["winter", "on_fire"]);
        states.clear();
        assert!(states.is_empty());
    }

    #[test]
    fn test_blank_states_ignored() {
        let mut states = RoomStateSet::new();
        states.add(["", "   "]);
        assert!(states.is_empty());
    }

    #[test]
    fn test_description_default_slot() {
        let mut store = DescriptionStore::new();
        assert_eq!(store.get(None), None);

        store.set(None, "Plain room.");
        assert_eq!(store.get(None), Some("Plain room."));
        assert_eq!(store.get(Some("desc")), Some("Plain room."));

        store.set(Some("desc"), "Plainer room.");
        assert_eq!(store.get(None), Some("Plainer room."));
    }

    #[test]
    fn test_description_state_keys_exact() {
        let mut store = DescriptionStore::new();
        store.set(Some("spring"), "Blooming room.");

        assert_eq!(store.get(Some("spring")), Some("Blooming room."));
        assert_eq!(store.get(Some("Spring")), None);
        assert_eq!(store.state_keys().collect::<Vec<_>>(), vec!["spring"]);
    }

    #[test]
    fn test_description_remove() {
        let mut store = DescriptionStore::new();
        store.set(None, "Plain room.");
        store.set(Some("on_fire"), "Burning room.");

        assert_eq!(store.remove("on_fire").unwrap(), Some("Burning room.".to_string()));
        assert_eq!(store.remove("on_fire").unwrap(), None);
        assert!(matches!(
            store.remove("desc"),
            Err(RoomError::DefaultDescriptionProtected)
        ));
        assert_eq!(store.get(None), Some("Plain room."));
    }

    #[test]
    fn test_description_all_includes_default() {
        let mut store = DescriptionStore::new();
        store.set(Some("winter"), "Snowy room.");

        let all = store.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[&None], "");
        assert_eq!(all[&Some("winter")], "Snowy room.");
        assert_eq!(all.keys().next(), Some(&None));
    }

    #[test]
    fn test_detail_exact_and_prefix() {
        let mut details = DetailStore::new();
        details.add("Window", "A grimy window.");
        details.add("windowsill", "Dust on the sill.");
        details.add("wall", "Bare stone.");

        assert_eq!(details.get("WINDOW"), Some("A grimy window."));
        assert_eq!(details.get("win"), Some("A grimy window."));
        assert_eq!(details.get("windows"), Some("Dust on the sill."));
        assert_eq!(details.get("door"), None);
        assert_eq!(details.get(""), None);
    }

    #[test]
    fn test_detail_prefix_tie_is_alphabetical() {
        let mut details = DetailStore::new();
        details.add("bench", "A bench.");
        details.add("bells", "Some bells.");

        assert_eq!(details.get("be"), Some("Some bells."));
    }

    #[test]
    fn test_detail_remove() {
        let mut details = DetailStore::new();
        details.add("rug", "A threadbare rug.");
        assert_eq!(details.remove("RUG"), Some("A threadbare rug.".to_string()));
        assert!(details.is_empty());
    }
}
