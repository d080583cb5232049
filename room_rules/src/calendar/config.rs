//! Room configuration, loadable from TOML.

use serde::{Deserialize, Serialize};

use super::Calendar;
use crate::cycles::{CycleKind, CycleTable, Segment};
use crate::error::RoomError;

/// Text shown when a room has no usable description at all.
pub const DEFAULT_FALLBACK_DESCRIPTION: &str = "You see nothing special.";

/// Settings for description selection and the game calendar.
///
/// Every field is optional in TOML; missing fields take the built-in values.
/// An explicit `seasons = []` switches seasonal descriptions off.
///
/// ```toml
/// fallback_description = "Nothing to see."
///
/// [[times_of_day]]
/// name = "night"
/// start = 0.0
/// end = 0.25
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    pub fallback_description: String,
    pub times_of_day: Vec<Segment>,
    pub seasons: Vec<Segment>,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            fallback_description: DEFAULT_FALLBACK_DESCRIPTION.to_string(),
            times_of_day: CycleTable::default_times_of_day().segments().to_vec(),
            seasons: CycleTable::default_seasons().segments().to_vec(),
        }
    }
}

impl RoomConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, RoomError> {
        Ok(toml::from_str(text)?)
    }

    /// Build and validate the calendar described by this configuration.
    pub fn calendar(&self) -> Result<Calendar, RoomError> {
        let times_of_day = CycleTable::new(CycleKind::TimeOfDay, self.times_of_day.clone())?;
        let seasons = CycleTable::new(CycleKind::Season, self.seasons.clone())?;
        Calendar::new(times_of_day, seasons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RoomConfig::default();
        assert_eq!(config.fallback_description, "You see nothing special.");
        assert_eq!(config.calendar().unwrap(), Calendar::default());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = RoomConfig::from_toml_str("").unwrap();
        assert_eq!(config, RoomConfig::default());
    }

    #[test]
    fn test_toml_without_seasons() {
        let config = RoomConfig::from_toml_str(
            r#"
            fallback_description = "Nothing to see."
            seasons = []
            "#,
        )
        .unwrap();

        assert_eq!(config.fallback_description, "Nothing to see.");
        let calendar = config.calendar().unwrap();
        assert!(!calendar.seasons_enabled());
        assert_eq!(calendar.time_of_day_names().count(), 4);
    }

    #[test]
    fn test_toml_custom_times() {
        let config = RoomConfig::from_toml_str(
            r#"
            [[times_of_day]]
            name = "Dark"
            start = 0.0
            end = 0.2

            [[times_of_day]]
            name = "dawn"
            start = 0.2
            end = 0.3

            [[times_of_day]]
            name = "day"
            start = 0.3
            end = 0.8

            [[times_of_day]]
            name = "dusk"
            start = 0.8
            end = 0.0
            "#,
        )
        .unwrap();

        let calendar = config.calendar().unwrap();
        assert_eq!(
            calendar.time_of_day_names().collect::<Vec<_>>(),
            vec!["dark", "dawn", "day", "dusk"]
        );
    }

    #[test]
    fn test_invalid_table_in_toml() {
        let config = RoomConfig::from_toml_str(
            r#"
            [[seasons]]
            name = "wet"
            start = 0.0
            end = 0.5
            "#,
        )
        .unwrap();

        assert!(matches!(
            config.calendar(),
            Err(RoomError::InvalidTable { table: "season", .. })
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let result = RoomConfig::from_toml_str("fallback_description = 3");
        assert!(matches!(result, Err(RoomError::Config(_))));
    }

    #[test]
    fn test_clock_length_keys_ignored() {
        let config = RoomConfig::from_toml_str("hours_per_day = 12\nmonths_per_year = 48").unwrap();
        let calendar = config.calendar().unwrap();

        assert_eq!(calendar, Calendar::default());
        assert_eq!(calendar.time_of_day(13.0 * 3600.0), "afternoon");
        assert_eq!(calendar.time_of_day(20.0 * 3600.0), "evening");
    }
}
