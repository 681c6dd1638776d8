//! Wall-clock arithmetic for study blocks.
//!
//! # Responsibility
//! - Map elapsed study time within a day to `HH:MM` clock values.
//! - Pick the day's base hour from the user's preferred times.
//!
//! # Invariants
//! - Clock values always lie in `00:00..=23:59`; arithmetic wraps at 24h.
//! - Fractional hours are converted to whole minutes by rounding.

use crate::model::availability::PreferredTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const MINUTES_PER_HOUR: u32 = 60;
const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

pub const MORNING_BASE_HOUR: u32 = 8;
pub const AFTERNOON_BASE_HOUR: u32 = 14;
pub const EVENING_BASE_HOUR: u32 = 18;

/// Time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    minute_of_day: u32,
}

impl ClockTime {
    /// Builds a clock time, returning `None` for out-of-range components.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour >= 24 || minute >= MINUTES_PER_HOUR {
            return None;
        }
        Some(Self {
            minute_of_day: hour * MINUTES_PER_HOUR + minute,
        })
    }

    /// Builds a clock time from any minute count, wrapping at midnight.
    pub fn from_minutes(minutes: u32) -> Self {
        Self {
            minute_of_day: minutes % MINUTES_PER_DAY,
        }
    }

    pub fn hour(self) -> u32 {
        self.minute_of_day / MINUTES_PER_HOUR
    }

    pub fn minute(self) -> u32 {
        self.minute_of_day % MINUTES_PER_HOUR
    }

    pub fn minute_of_day(self) -> u32 {
        self.minute_of_day
    }

    #[must_use]
    pub fn plus_minutes(self, minutes: u32) -> Self {
        Self::from_minutes(self.minute_of_day + minutes % MINUTES_PER_DAY)
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Error returned when a string is not a valid `HH:MM` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockParseError(pub String);

impl Display for ClockParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid clock time `{}`; expected HH:MM", self.0)
    }
}

impl Error for ClockParseError {}

impl FromStr for ClockTime {
    type Err = ClockParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ClockParseError(value.to_string());
        let (hour, minute) = value.trim().split_once(':').ok_or_else(invalid)?;
        if hour.len() != 2 || minute.len() != 2 {
            return Err(invalid());
        }
        let hour = hour.parse::<u32>().map_err(|_| invalid())?;
        let minute = minute.parse::<u32>().map_err(|_| invalid())?;
        Self::from_hm(hour, minute).ok_or_else(invalid)
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

/// Converts fractional hours to whole minutes.
///
/// Negative and non-finite inputs map to zero.
pub fn hours_to_minutes(hours: f64) -> u32 {
    if !hours.is_finite() || hours <= 0.0 {
        return 0;
    }
    (hours * MINUTES_PER_HOUR as f64).round() as u32
}

/// First hour of the study day for the given preferences.
///
/// Morning wins over afternoon; anything else starts in the evening.
pub fn base_hour(preferred_times: &[PreferredTime]) -> u32 {
    if preferred_times.contains(&PreferredTime::Morning) {
        MORNING_BASE_HOUR
    } else if preferred_times.contains(&PreferredTime::Afternoon) {
        AFTERNOON_BASE_HOUR
    } else {
        EVENING_BASE_HOUR
    }
}

/// Clock time after `hours_used` hours of study from the day's base hour.
pub fn calculate_start_time(hours_used: f64, preferred_times: &[PreferredTime]) -> ClockTime {
    ClockTime::from_minutes(base_hour(preferred_times) * MINUTES_PER_HOUR)
        .plus_minutes(hours_to_minutes(hours_used))
}

/// Clock time `hours` after `start`.
pub fn calculate_end_time(start: ClockTime, hours: f64) -> ClockTime {
    start.plus_minutes(hours_to_minutes(hours))
}
