//! Tunable planner constants.
//!
//! `PlannerSettings::default()` reproduces the product behavior; overrides
//! exist for callers that load a settings file.

use crate::model::availability::StudyPreference;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Constants used by the allocator, scheduler and analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSettings {
    pub long_block_minutes: u32,
    pub short_block_minutes: u32,
    pub mixed_block_minutes: u32,
    /// Blocks at or below this length are dropped.
    pub min_block_minutes: u32,
    pub break_minutes: u32,
    /// A break is added once a day's study time exceeds this.
    pub break_threshold_hours: f64,
    pub low_weekly_hours_threshold: f64,
    /// More hard units than this triggers an advisory.
    pub max_hard_units: usize,
    pub exam_horizon_days: i64,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            long_block_minutes: 90,
            short_block_minutes: 30,
            mixed_block_minutes: 60,
            min_block_minutes: 15,
            break_minutes: 15,
            break_threshold_hours: 2.0,
            low_weekly_hours_threshold: 10.0,
            max_hard_units: 3,
            exam_horizon_days: 14,
        }
    }
}

impl PlannerSettings {
    /// Nominal block length for a study preference.
    pub fn nominal_block_minutes(&self, preference: StudyPreference) -> u32 {
        match preference {
            StudyPreference::Long => self.long_block_minutes,
            StudyPreference::Short => self.short_block_minutes,
            StudyPreference::Mixed => self.mixed_block_minutes,
        }
    }

    pub fn nominal_block_hours(&self, preference: StudyPreference) -> f64 {
        f64::from(self.nominal_block_minutes(preference)) / 60.0
    }

    pub fn min_block_hours(&self) -> f64 {
        f64::from(self.min_block_minutes) / 60.0
    }

    /// Rejects values that would make generation meaningless.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (field, value) in [
            ("long_block_minutes", self.long_block_minutes),
            ("short_block_minutes", self.short_block_minutes),
            ("mixed_block_minutes", self.mixed_block_minutes),
            ("min_block_minutes", self.min_block_minutes),
            ("break_minutes", self.break_minutes),
        ] {
            if value == 0 {
                return Err(SettingsError::NonPositive(field));
            }
        }
        for (field, value) in [
            ("break_threshold_hours", self.break_threshold_hours),
            ("low_weekly_hours_threshold", self.low_weekly_hours_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::InvalidHours { field, value });
            }
        }
        for (field, nominal) in [
            ("long_block_minutes", self.long_block_minutes),
            ("short_block_minutes", self.short_block_minutes),
            ("mixed_block_minutes", self.mixed_block_minutes),
        ] {
            if self.min_block_minutes >= nominal {
                return Err(SettingsError::MinBlockTooLarge {
                    field,
                    min: self.min_block_minutes,
                    nominal,
                });
            }
        }
        if self.exam_horizon_days <= 0 {
            return Err(SettingsError::NonPositive("exam_horizon_days"));
        }
        Ok(())
    }
}

/// Invalid planner setting.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    NonPositive(&'static str),
    InvalidHours { field: &'static str, value: f64 },
    /// `min_block_minutes` would filter out every block of this length.
    MinBlockTooLarge {
        field: &'static str,
        min: u32,
        nominal: u32,
    },
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositive(field) => write!(f, "setting `{field}` must be > 0"),
            Self::InvalidHours { field, value } => {
                write!(f, "setting `{field}` must be finite and >= 0, got {value}")
            }
            Self::MinBlockTooLarge {
                field,
                min,
                nominal,
            } => write!(
                f,
                "setting `min_block_minutes` ({min}) must be below `{field}` ({nominal})"
            ),
        }
    }
}

impl Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::{PlannerSettings, SettingsError};
    use crate::model::availability::StudyPreference;

    #[test]
    fn defaults_are_valid() {
        let settings = PlannerSettings::default();
        settings.validate().expect("defaults should validate");
        assert_eq!(settings.nominal_block_hours(StudyPreference::Long), 1.5);
        assert_eq!(settings.nominal_block_hours(StudyPreference::Short), 0.5);
        assert_eq!(settings.nominal_block_hours(StudyPreference::Mixed), 1.0);
        assert_eq!(settings.min_block_hours(), 0.25);
    }

    #[test]
    fn validate_rejects_zero_block() {
        let settings = PlannerSettings {
            short_block_minutes: 0,
            ..PlannerSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::NonPositive("short_block_minutes"))
        );
    }

    #[test]
    fn validate_rejects_negative_threshold() {
        let settings = PlannerSettings {
            break_threshold_hours: -1.0,
            ..PlannerSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidHours { field: "break_threshold_hours", .. })
        ));
    }

    #[test]
    fn validate_rejects_min_block_not_below_nominal() {
        let settings = PlannerSettings {
            min_block_minutes: 30,
            ..PlannerSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::MinBlockTooLarge {
                field: "short_block_minutes",
                min: 30,
                nominal: 30,
            })
        );

        let settings = PlannerSettings {
            min_block_minutes: 29,
            ..PlannerSettings::default()
        };
        assert!(settings.validate().is_ok());
    }
}
