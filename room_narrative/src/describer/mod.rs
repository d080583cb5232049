//! Room Describer - the look pipeline for stateful rooms.
//!
//! Looking at a room works as follows:
//! 1. **Clock**: read the hour and month once from the absolute game time
//! 2. **Classify**: derive the time of day and the season
//! 3. **Select**: pick a description (see [`select`])
//! 4. **Filter**: resolve legacy time-of-day spans, then `$state()` calls

mod selection;

pub use selection::*;

use room_rules::{Calendar, ClockReading, Room, RoomConfig};

use crate::error::NarrativeError;
use crate::markup::{filter_state_markup, LegacyTimeMarkup, StateContext};

/// Renders room and detail descriptions for a given game time.
#[derive(Debug, Clone)]
pub struct RoomDescriber {
    calendar: Calendar,
    fallback_description: String,
    legacy_markup: LegacyTimeMarkup,
}

impl RoomDescriber {
    /// Create a describer from a configuration.
    pub fn new(config: &RoomConfig) -> Result<Self, NarrativeError> {
        let calendar = config.calendar()?;
        let legacy_markup = LegacyTimeMarkup::new(calendar.time_of_day_names())?;

        Ok(Self {
            calendar,
            fallback_description: config.fallback_description.clone(),
            legacy_markup,
        })
    }

    /// Create a describer with the built-in calendar and fallback text.
    pub fn with_defaults() -> Result<Self, NarrativeError> {
        Self::new(&RoomConfig::default())
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn get_time_of_day(&self, abs_time: f64) -> &str {
        self.calendar.time_of_day(abs_time)
    }

    /// Current season, or `None` when seasons are switched off.
    pub fn get_season(&self, abs_time: f64) -> Option<&str> {
        self.calendar.season(abs_time)
    }

    /// Select a room's description without processing its markup.
    pub fn select<'a>(&'a self, room: &'a Room, abs_time: f64) -> Selection<'a> {
        self.select_at(room, self.calendar.clock(abs_time))
    }

    /// The description a player sees when looking at `room` at `abs_time`.
    pub fn get_stateful_description(&self, room: &Room, abs_time: f64) -> String {
        let reading = self.calendar.clock(abs_time);
        let selection = self.select_at(room, reading);
        self.render(selection.text, room, self.calendar.time_of_day_at(reading))
    }

    /// A named detail of `room` with its markup processed.
    pub fn get_detail(&self, room: &Room, key: &str, abs_time: f64) -> Option<String> {
        let text = room.get_detail(key)?;
        let time_of_day = self.calendar.time_of_day(abs_time);
        Some(self.render(text, room, time_of_day))
    }

    /// A one-line report of the game time, e.g. "It's a spring day, in the
    /// morning."
    pub fn describe_time(&self, abs_time: f64) -> String {
        let reading = self.calendar.clock(abs_time);
        let time_of_day = self.calendar.time_of_day_at(reading);

        match self.calendar.season_at(reading) {
            Some(season) => {
                let article = if season.starts_with(['a', 'e', 'i', 'o', 'u']) {
                    "an"
                } else {
                    "a"
                };
                format!("It's {article} {season} day, in the {time_of_day}.")
            }
            None => format!("It's the {time_of_day}."),
        }
    }

    fn select_at<'a>(&'a self, room: &'a Room, reading: ClockReading) -> Selection<'a> {
        let season = self.calendar.season_at(reading);
        let selection = select(
            &room.states,
            &room.descriptions,
            self.calendar.seasons(),
            season,
            &self.fallback_description,
        );

        tracing::debug!(
            room = %room.id,
            time_of_day = self.calendar.time_of_day_at(reading),
            season = season.unwrap_or("none"),
            source = ?selection.source,
            "selected room description"
        );

        selection
    }

    fn render(&self, text: &str, room: &Room, time_of_day: &str) -> String {
        let text = self.legacy_markup.filter(text, time_of_day);
        filter_state_markup(&text, &StateContext::new(&room.states, time_of_day))
    }
}
