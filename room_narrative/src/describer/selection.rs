//! Description selection: which stored description a room shows right now.

use room_rules::{CycleTable, DescriptionStore, RoomStateSet};
use serde::{Deserialize, Serialize};

/// Where a selected description came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DescriptionSource {
    /// An active room state that is not a season name.
    RoomState(String),

    /// A season name set as a room state.
    PinnedSeason(String),

    /// The season computed from the game time.
    Season(String),

    /// The room's default description.
    Default,

    /// Nothing was set; the configured fallback text.
    Placeholder,
}

/// A chosen description and its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    pub source: DescriptionSource,
    pub text: &'a str,
}

impl<'a> Selection<'a> {
    fn new(source: DescriptionSource, text: &'a str) -> Self {
        Self { source, text }
    }
}

/// A state description, treating empty text as unset.
fn state_description<'a>(store: &'a DescriptionStore, key: &str) -> Option<&'a str> {
    if DescriptionStore::is_default_key(Some(key)) {
        return None;
    }
    store.get(Some(key)).filter(|text| !text.is_empty())
}

/// Select the description to show.
///
/// # Priority
///
/// 1. Active states that are not seasons, alphabetically
/// 2. Active states that are seasons, in season table order
/// 3. With no season table configured, skip to the default
/// 4. The computed `season`
/// 5. The default description, else `placeholder`
///
/// Each tier only takes a description with non-empty text; states without a
/// description are skipped.
pub fn select<'a>(
    states: &RoomStateSet,
    store: &'a DescriptionStore,
    seasons: &CycleTable,
    season: Option<&str>,
    placeholder: &'a str,
) -> Selection<'a> {
    for state in states.iter().filter(|state| !seasons.contains(state)) {
        if let Some(text) = state_description(store, state) {
            return Selection::new(DescriptionSource::RoomState(state.to_string()), text);
        }
    }

    for name in seasons.names().filter(|name| states.contains(name)) {
        if let Some(text) = state_description(store, name) {
            return Selection::new(DescriptionSource::PinnedSeason(name.to_string()), text);
        }
    }

    if !seasons.is_empty() {
        if let Some(season) = season {
            if let Some(text) = state_description(store, season) {
                return Selection::new(DescriptionSource::Season(season.to_string()), text);
            }
        }
    }

    match store.get(None).filter(|text| !text.is_empty()) {
        Some(text) => Selection::new(DescriptionSource::Default, text),
        None => Selection::new(DescriptionSource::Placeholder, placeholder),
    }
}

/// Text-only form of [`select`].
pub fn resolve<'a>(
    states: &RoomStateSet,
    store: &'a DescriptionStore,
    seasons: &CycleTable,
    season: Option<&str>,
    placeholder: &'a str,
) -> &'a str {
    select(states, store, seasons, season, placeholder).text
}
