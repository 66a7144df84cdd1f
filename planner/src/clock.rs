//! Time-of-day values and the 30-minute slot grid.
//!
//! DESIGN
//! ======
//! Times travel through the form as `HH:MM` strings (the value of an
//! `<input type="time">`). `ClockTime` stores minutes since midnight so that
//! ordering is chronological and slot arithmetic is integer-only. Parsing
//! goes through `chrono::NaiveTime`.

use std::fmt;
use std::str::FromStr;

use chrono::format::ParseErrorKind;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Width of one timetable slot.
pub const SLOT_MINUTES: u16 = 30;

const MINUTES_PER_DAY: u16 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    #[error("invalid time '{0}' (expected HH:MM)")]
    Malformed(String),
    #[error("time '{0}' is out of range")]
    OutOfRange(String),
}

/// A minute-resolution time of day in `00:00..=23:59`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    /// Build from hour and minute.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::OutOfRange`] when `hour > 23` or `minute > 59`.
    pub fn new(hour: u16, minute: u16) -> Result<Self, ClockError> {
        if hour > 23 || minute > 59 {
            return Err(ClockError::OutOfRange(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { minutes: hour * 60 + minute })
    }

    /// Build from literal hour and minute known to be in range.
    pub(crate) const fn from_hm(hour: u16, minute: u16) -> Self {
        debug_assert!(hour < 24 && minute < 60);
        Self { minutes: hour * 60 + minute }
    }

    /// Build from minutes since midnight.
    #[must_use]
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self { minutes })
    }

    #[must_use]
    pub fn minutes(self) -> u16 {
        self.minutes
    }

    #[must_use]
    pub fn hour(self) -> u16 {
        self.minutes / 60
    }

    #[must_use]
    pub fn minute(self) -> u16 {
        self.minutes % 60
    }
}

impl FromStr for ClockTime {
    type Err = ClockError;

    /// Accepts `H:MM`/`HH:MM`, and `HH:MM:SS` when the seconds are zero
    /// (browsers may submit them).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let time = match NaiveTime::parse_from_str(trimmed, "%H:%M") {
            Ok(time) => time,
            Err(short) => NaiveTime::parse_from_str(trimmed, "%H:%M:%S").map_err(|long| {
                if short.kind() == ParseErrorKind::OutOfRange || long.kind() == ParseErrorKind::OutOfRange {
                    ClockError::OutOfRange(raw.to_owned())
                } else {
                    ClockError::Malformed(raw.to_owned())
                }
            })?,
        };
        if time.second() != 0 || time.nanosecond() != 0 {
            return Err(ClockError::Malformed(raw.to_owned()));
        }
        let hour = u16::try_from(time.hour()).map_err(|_| ClockError::OutOfRange(raw.to_owned()))?;
        let minute = u16::try_from(time.minute()).map_err(|_| ClockError::OutOfRange(raw.to_owned()))?;
        Self::new(hour, minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// SLOT GRID
// =============================================================================

/// The half-hour slots between a window start and end.
///
/// A window that does not end on a slot boundary loses its trailing partial
/// slot. An empty or inverted window has no slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotGrid {
    start: ClockTime,
    len: usize,
}

impl SlotGrid {
    #[must_use]
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        let span = end.minutes().saturating_sub(start.minutes());
        Self { start, len: usize::from(span / SLOT_MINUTES) }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Start time of slot `index`.
    #[must_use]
    pub fn label(&self, index: usize) -> Option<ClockTime> {
        if index >= self.len {
            return None;
        }
        let offset = u16::try_from(index).ok()? * SLOT_MINUTES;
        ClockTime::from_minutes(self.start.minutes() + offset)
    }

    /// All slot start times, in order.
    #[must_use]
    pub fn labels(&self) -> Vec<ClockTime> {
        (0..self.len).filter_map(|i| self.label(i)).collect()
    }

    /// Slot index whose start is exactly `time`.
    #[must_use]
    pub fn index_of(&self, time: ClockTime) -> Option<usize> {
        let offset = time.minutes().checked_sub(self.start.minutes())?;
        if offset % SLOT_MINUTES != 0 {
            return None;
        }
        let index = usize::from(offset / SLOT_MINUTES);
        (index < self.len).then_some(index)
    }

    /// Slot boundary index for `time`, where the window end maps to `len()`.
    ///
    /// Used for exclusive range ends.
    #[must_use]
    pub fn boundary_of(&self, time: ClockTime) -> Option<usize> {
        let offset = time.minutes().checked_sub(self.start.minutes())?;
        if offset % SLOT_MINUTES != 0 {
            return None;
        }
        let index = usize::from(offset / SLOT_MINUTES);
        (index <= self.len).then_some(index)
    }
}

#[cfg(test)]
#[path = "clock_test.rs"]
mod tests;
