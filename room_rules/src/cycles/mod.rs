//! Cycle tables: named segments of a day or a year, and the classifier that
//! maps a fraction of the cycle onto a segment name.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::RoomError;

/// Number of segments a non-empty table must have.
pub const SEGMENTS_PER_CYCLE: usize = 4;

const EPSILON: f64 = 1e-9;

/// Which cycle a table describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CycleKind {
    TimeOfDay,
    Season,
}

impl CycleKind {
    /// Label used in error messages and logs.
    pub fn label(&self) -> &'static str {
        match self {
            CycleKind::TimeOfDay => "time of day",
            CycleKind::Season => "season",
        }
    }

    /// Whether a table of this kind may be left empty.
    pub fn allows_empty(&self) -> bool {
        matches!(self, CycleKind::Season)
    }
}

/// One named slice of a cycle, as fractions of the cycle.
///
/// `1.0` and `0.0` denote the same point. A segment whose start is not below
/// its end wraps around the cycle boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,
    pub start: f64,
    pub end: f64,
}

impl Segment {
    /// Create a new segment. The name is lower-cased.
    pub fn new(name: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            name: name.into().trim().to_lowercase(),
            start,
            end,
        }
    }

    /// Check if this segment wraps past the end of the cycle.
    pub fn wraps(&self) -> bool {
        self.start >= self.end
    }

    /// Length of the segment as a fraction of the cycle.
    pub fn span(&self) -> f64 {
        (self.end - self.start).rem_euclid(1.0)
    }
}

fn same_point(a: f64, b: f64) -> bool {
    let d = (a - b).rem_euclid(1.0);
    d < EPSILON || d > 1.0 - EPSILON
}

/// An ordered, validated table of segments covering a whole cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleTable {
    kind: CycleKind,
    segments: Vec<Segment>,
}

impl CycleTable {
    /// Build a table, checking that the segments partition the cycle.
    pub fn new(kind: CycleKind, segments: Vec<Segment>) -> Result<Self, RoomError> {
        let segments = segments
            .into_iter()
            .map(|s| Segment::new(s.name, s.start, s.end))
            .collect();
        let table = Self { kind, segments };
        table.validate()?;
        Ok(table)
    }

    /// The built-in time of day table: night, morning, afternoon, evening.
    pub fn default_times_of_day() -> Self {
        let h = |hour: f64| hour / 24.0;
        Self {
            kind: CycleKind::TimeOfDay,
            segments: vec![
                Segment::new("night", h(0.0), h(6.0)),
                Segment::new("morning", h(6.0), h(12.0)),
                Segment::new("afternoon", h(12.0), h(18.0)),
                Segment::new("evening", h(18.0), h(0.0)),
            ],
        }
    }

    /// The built-in season table: spring, summer, autumn, winter.
    pub fn default_seasons() -> Self {
        let m = |month: f64| month / 12.0;
        Self {
            kind: CycleKind::Season,
            segments: vec![
                Segment::new("spring", m(3.0), m(6.0)),
                Segment::new("summer", m(6.0), m(9.0)),
                Segment::new("autumn", m(9.0), m(12.0)),
                Segment::new("winter", m(12.0), m(3.0)),
            ],
        }
    }

    /// An empty season table, which switches seasonal behaviour off.
    pub fn no_seasons() -> Self {
        Self {
            kind: CycleKind::Season,
            segments: Vec::new(),
        }
    }

    pub fn kind(&self) -> CycleKind {
        self.kind
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segment names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| s.name.as_str())
    }

    /// Check if `name` is one of this table's segment names.
    pub fn contains(&self, name: &str) -> bool {
        self.segments.iter().any(|s| s.name == name)
    }

    /// Classify a fraction of the cycle.
    ///
    /// Only segments with `start < end` are tested. When none of them
    /// matches, the last entry is returned, which is how the wrap-around
    /// segment is reached. Returns `None` only for an empty table.
    pub fn classify(&self, fraction: f64) -> Option<&str> {
        for segment in &self.segments {
            if segment.start < segment.end && segment.start <= fraction && fraction < segment.end {
                return Some(segment.name.as_str());
            }
        }
        self.segments.last().map(|s| s.name.as_str())
    }

    fn validate(&self) -> Result<(), RoomError> {
        let table = self.kind.label();

        if self.segments.is_empty() {
            if self.kind.allows_empty() {
                return Ok(());
            }
            return Err(RoomError::invalid_table(table, "table must not be empty"));
        }

        if self.segments.len() != SEGMENTS_PER_CYCLE {
            return Err(RoomError::invalid_table(
                table,
                format!(
                    "expected {} segments, found {}",
                    SEGMENTS_PER_CYCLE,
                    self.segments.len()
                ),
            ));
        }

        let mut seen = HashSet::new();
        for segment in &self.segments {
            if segment.name.is_empty() {
                return Err(RoomError::invalid_table(table, "segment name is blank"));
            }
            if !seen.insert(segment.name.as_str()) {
                return Err(RoomError::invalid_table(
                    table,
                    format!("duplicate segment '{}'", segment.name),
                ));
            }
            for bound in [segment.start, segment.end] {
                if !bound.is_finite() || !(0.0..=1.0).contains(&bound) {
                    return Err(RoomError::invalid_table(
                        table,
                        format!("segment '{}' has bound {} outside [0, 1]", segment.name, bound),
                    ));
                }
            }
            if segment.span() < EPSILON {
                return Err(RoomError::invalid_table(
                    table,
                    format!("segment '{}' is empty", segment.name),
                ));
            }
        }

        for (current, next) in self
            .segments
            .iter()
            .zip(self.segments.iter().cycle().skip(1))
        {
            if !same_point(current.end, next.start) {
                return Err(RoomError::invalid_table(
                    table,
                    format!(
                        "segment '{}' ends at {} but '{}' starts at {}",
                        current.name, current.end, next.name, next.start
                    ),
                ));
            }
        }

        let total: f64 = self.segments.iter().map(Segment::span).sum();
        if (total - 1.0).abs() > EPSILON {
            return Err(RoomError::invalid_table(
                table,
                format!("segments cover {} of the cycle", total),
            ));
        }

        let wrapping: Vec<usize> = self
            .segments
            .iter()
            .enumerate()
            .filter(|(_, s)| s.wraps())
            .map(|(i, _)| i)
            .collect();
        if wrapping.len() > 1 {
            return Err(RoomError::invalid_table(
                table,
                "more than one segment wraps around the cycle",
            ));
        }
        if let Some(&index) = wrapping.first() {
            if index != self.segments.len() - 1 {
                tracing::warn!(
                    table,
                    segment = %self.segments[index].name,
                    "wrap-around segment is not last; its interval will classify as '{}'",
                    self.segments[self.segments.len() - 1].name
                );
            }
        }

        Ok(())
    }
}
