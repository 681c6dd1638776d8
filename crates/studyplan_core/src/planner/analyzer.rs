//! Plan analyzer: aggregate metrics and advisory warnings.
//!
//! # Invariants
//! - `stress_index` is clamped to `[0, 100]`, including when no blocks exist.
//! - Warnings are evaluated independently and appended in a fixed order:
//!   low weekly hours, many hard units, upcoming exams.

use crate::model::availability::AvailabilityProfile;
use crate::model::block::StudyBlock;
use crate::model::unit::Unit;
use crate::planner::settings::PlannerSettings;
use chrono::{DateTime, NaiveTime, TimeDelta, Utc};

pub const LOW_HOURS_WARNING: &str =
    "Low total study hours - consider increasing daily availability";
pub const MANY_HARD_UNITS_WARNING: &str =
    "Many difficult units - ensure adequate preparation time";

/// Block length that scores half of the stress index on its own.
const STRESS_REFERENCE_BLOCK_MINUTES: f64 = 90.0;
const MAX_STRESS_INDEX: f64 = 100.0;

/// Advisory for exams falling inside the look-ahead window.
pub fn upcoming_exams_warning(count: usize) -> String {
    format!("{count} exams in next 2 weeks - increased focus recommended")
}

/// Metrics and warnings derived from a scheduled plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanAnalysis {
    pub total_hours: f64,
    pub average_daily_hours: f64,
    pub stress_index: f64,
    pub warnings: Vec<String>,
}

/// Analyzes blocks with default planner settings.
pub fn analyze(
    units: &[Unit],
    availability: &AvailabilityProfile,
    blocks: &[StudyBlock],
    now: DateTime<Utc>,
) -> PlanAnalysis {
    analyze_with(&PlannerSettings::default(), units, availability, blocks, now)
}

pub fn analyze_with(
    settings: &PlannerSettings,
    units: &[Unit],
    availability: &AvailabilityProfile,
    blocks: &[StudyBlock],
    now: DateTime<Utc>,
) -> PlanAnalysis {
    let study_minutes: u32 = blocks
        .iter()
        .filter(|block| !block.is_break())
        .map(|block| block.duration_minutes)
        .sum();

    let day_count = availability.day_count();
    let average_daily_hours = if day_count == 0 {
        0.0
    } else {
        availability.total_weekly_hours() / day_count as f64
    };

    PlanAnalysis {
        total_hours: f64::from(study_minutes) / 60.0,
        average_daily_hours,
        stress_index: stress_index(units, blocks),
        warnings: collect_warnings(settings, units, availability, now),
    }
}

/// `min(100, avg_block / 90 * 50 + hard_ratio * 50)`, breaks included in the
/// average.
pub fn stress_index(units: &[Unit], blocks: &[StudyBlock]) -> f64 {
    let average_block_minutes = if blocks.is_empty() {
        0.0
    } else {
        let total: u32 = blocks.iter().map(|block| block.duration_minutes).sum();
        f64::from(total) / blocks.len() as f64
    };
    let hard_ratio = if units.is_empty() {
        0.0
    } else {
        count_hard(units) as f64 / units.len() as f64
    };

    let raw = average_block_minutes / STRESS_REFERENCE_BLOCK_MINUTES * 50.0 + hard_ratio * 50.0;
    raw.clamp(0.0, MAX_STRESS_INDEX)
}

fn collect_warnings(
    settings: &PlannerSettings,
    units: &[Unit],
    availability: &AvailabilityProfile,
    now: DateTime<Utc>,
) -> Vec<String> {
    let mut warnings = Vec::new();

    if availability.total_weekly_hours() < settings.low_weekly_hours_threshold {
        warnings.push(LOW_HOURS_WARNING.to_string());
    }

    if count_hard(units) > settings.max_hard_units {
        warnings.push(MANY_HARD_UNITS_WARNING.to_string());
    }

    let upcoming = count_upcoming_exams(units, now, settings.exam_horizon_days);
    if upcoming > 0 {
        warnings.push(upcoming_exams_warning(upcoming));
    }

    warnings
}

fn count_hard(units: &[Unit]) -> usize {
    units.iter().filter(|unit| unit.is_hard()).count()
}

/// Exams dated today or later whose date (midnight UTC) is less than
/// `horizon_days` after `now`.
pub fn count_upcoming_exams(units: &[Unit], now: DateTime<Utc>, horizon_days: i64) -> usize {
    let horizon = TimeDelta::days(horizon_days);
    let today = now.date_naive();

    units
        .iter()
        .filter(|unit| unit.is_exam())
        .filter_map(|unit| unit.assessment_date)
        .filter(|date| *date >= today)
        .filter(|date| date.and_time(NaiveTime::MIN).and_utc() - now < horizon)
        .count()
}

#[cfg(test)]
mod tests {
    use super::{count_upcoming_exams, stress_index};
    use crate::model::unit::{Difficulty, Unit, UnitType};
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn stress_is_zero_without_blocks_or_hard_units() {
        let units = vec![Unit::new("a", "A", Difficulty::Easy, UnitType::Exam)];
        assert_eq!(stress_index(&units, &[]), 0.0);
    }

    #[test]
    fn stress_counts_hard_ratio_without_blocks() {
        let units = vec![
            Unit::new("a", "A", Difficulty::Hard, UnitType::Exam),
            Unit::new("b", "B", Difficulty::Easy, UnitType::Exam),
        ];
        assert_eq!(stress_index(&units, &[]), 25.0);
    }

    #[test]
    fn upcoming_exams_skip_past_and_far_dates() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let date = |day| NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
        let units = vec![
            Unit::new("past", "Past", Difficulty::Easy, UnitType::Exam).with_assessment_date(date(9)),
            Unit::new("today", "Today", Difficulty::Easy, UnitType::Exam).with_assessment_date(date(10)),
            Unit::new("soon", "Soon", Difficulty::Easy, UnitType::Exam).with_assessment_date(date(24)),
            Unit::new("far", "Far", Difficulty::Easy, UnitType::Exam).with_assessment_date(date(25)),
            Unit::new("proj", "Proj", Difficulty::Easy, UnitType::Project).with_assessment_date(date(12)),
            Unit::new("none", "None", Difficulty::Easy, UnitType::Exam),
        ];
        assert_eq!(count_upcoming_exams(&units, now, 14), 2);
    }
}
