//! Game calendar: derives the time of day and the season from an absolute
//! game time.

mod config;

pub use config::*;

use chrono::{DateTime, Datelike, Timelike};
use serde::{Deserialize, Serialize};

use crate::cycles::{CycleKind, CycleTable};
use crate::error::RoomError;

/// Hours on the game clock's day.
pub const HOURS_PER_DAY: u32 = 24;

/// Months on the game clock's year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Hour and month read off the game clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockReading {
    /// Hour of the day, 0-23.
    pub hour: u32,
    /// Month of the year, 1-12.
    pub month: u32,
}

impl ClockReading {
    /// The reading at the Unix epoch.
    pub fn epoch() -> Self {
        Self { hour: 0, month: 1 }
    }
}

/// Time of day and season tables read against a UTC clock.
///
/// A clock reading becomes a cycle fraction as `hour / 24` and `month / 12`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calendar {
    times_of_day: CycleTable,
    seasons: CycleTable,
}

impl Calendar {
    /// Create a calendar from already validated tables.
    pub fn new(times_of_day: CycleTable, seasons: CycleTable) -> Result<Self, RoomError> {
        if times_of_day.kind() != CycleKind::TimeOfDay || times_of_day.is_empty() {
            return Err(RoomError::invalid_table(
                CycleKind::TimeOfDay.label(),
                "a non-empty time of day table is required",
            ));
        }
        if seasons.kind() != CycleKind::Season {
            return Err(RoomError::invalid_table(
                CycleKind::Season.label(),
                "expected a season table",
            ));
        }

        Ok(Self {
            times_of_day,
            seasons,
        })
    }

    /// Read the clock at `abs_time`, in seconds since the Unix epoch (UTC).
    ///
    /// Times that cannot be represented read as the epoch.
    pub fn clock(&self, abs_time: f64) -> ClockReading {
        if !abs_time.is_finite() {
            tracing::warn!(abs_time, "non-finite game time, reading clock at epoch");
            return ClockReading::epoch();
        }

        let secs = abs_time.floor() as i64;
        match DateTime::from_timestamp(secs, 0) {
            Some(datetime) => ClockReading {
                hour: datetime.hour(),
                month: datetime.month(),
            },
            None => {
                tracing::warn!(abs_time, "game time out of range, reading clock at epoch");
                ClockReading::epoch()
            }
        }
    }

    /// Time of day for a clock reading.
    pub fn time_of_day_at(&self, reading: ClockReading) -> &str {
        let fraction = reading.hour as f64 / HOURS_PER_DAY as f64;
        // The time of day table is never empty.
        self.times_of_day.classify(fraction).unwrap_or_default()
    }

    /// Season for a clock reading; `None` when seasons are disabled.
    ///
    /// Months count from 1, so the last month lands on the cycle boundary.
    pub fn season_at(&self, reading: ClockReading) -> Option<&str> {
        let fraction = reading.month as f64 / MONTHS_PER_YEAR as f64;
        self.seasons.classify(fraction)
    }

    pub fn time_of_day(&self, abs_time: f64) -> &str {
        self.time_of_day_at(self.clock(abs_time))
    }

    pub fn season(&self, abs_time: f64) -> Option<&str> {
        self.season_at(self.clock(abs_time))
    }

    pub fn seasons_enabled(&self) -> bool {
        !self.seasons.is_empty()
    }

    pub fn is_season(&self, name: &str) -> bool {
        self.seasons.contains(name)
    }

    /// Season names in table order.
    pub fn season_names(&self) -> impl Iterator<Item = &str> {
        self.seasons.names()
    }

    /// Time of day names in table order.
    pub fn time_of_day_names(&self) -> impl Iterator<Item = &str> {
        self.times_of_day.names()
    }

    pub fn seasons(&self) -> &CycleTable {
        &self.seasons
    }

    pub fn times_of_day(&self) -> &CycleTable {
        &self.times_of_day
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self {
            times_of_day: CycleTable::default_times_of_day(),
            seasons: CycleTable::default_seasons(),
        }
    }
}
