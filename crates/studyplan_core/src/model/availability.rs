//! Weekly availability declaration.
//!
//! # Invariants
//! - Study days are always iterated Monday..Sunday, regardless of the order
//!   the user selected them in.
//! - Duplicate days collapse to one.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Weekday a user can study on. Declaration order is the canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl StudyDay {
    pub const ALL: [StudyDay; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

impl Display for StudyDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Part of the day the user prefers to study in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferredTime {
    Morning,
    Afternoon,
    Evening,
}

/// Preferred session length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyPreference {
    /// 90 minute blocks.
    Long,
    /// 30 minute blocks, no breaks inserted.
    Short,
    /// 60 minute blocks.
    #[default]
    Mixed,
}

impl StudyPreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Short => "short",
            Self::Mixed => "mixed",
        }
    }
}

/// Weekly study capacity and time-of-day preference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityProfile {
    /// Hours available on each study day. Must be > 0 for generation.
    pub daily_hours: f64,
    pub weekly_days: Vec<StudyDay>,
    /// Only selects the clock base hour; never limits capacity.
    #[serde(default)]
    pub preferred_times: Vec<PreferredTime>,
    #[serde(default)]
    pub study_preference: StudyPreference,
}

impl Default for AvailabilityProfile {
    /// Two evening hours on weekdays, mixed blocks.
    fn default() -> Self {
        Self {
            daily_hours: 2.0,
            weekly_days: vec![
                StudyDay::Monday,
                StudyDay::Tuesday,
                StudyDay::Wednesday,
                StudyDay::Thursday,
                StudyDay::Friday,
            ],
            preferred_times: vec![PreferredTime::Evening],
            study_preference: StudyPreference::Mixed,
        }
    }
}

impl AvailabilityProfile {
    /// Returns selected days deduplicated, in Monday..Sunday order.
    pub fn canonical_days(&self) -> Vec<StudyDay> {
        let mut days = self.weekly_days.clone();
        days.sort();
        days.dedup();
        days
    }

    /// Number of distinct study days.
    pub fn day_count(&self) -> usize {
        self.canonical_days().len()
    }

    /// Weekly capacity: `daily_hours * day_count`.
    pub fn total_weekly_hours(&self) -> f64 {
        self.daily_hours * self.day_count() as f64
    }
}
