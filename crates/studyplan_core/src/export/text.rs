//! Plain-text plan export.
//!
//! # Invariants
//! - Days appear in Monday..Sunday order; blocks within a day are sorted by
//!   start time, ties keep plan order.
//! - Output only depends on the plan and the supplied date.

use crate::model::plan::GeneratedPlan;
use chrono::NaiveDate;
use std::fmt::Write as _;

/// Stress banding used by plan viewers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StressLevel {
    Low,
    Medium,
    High,
}

impl StressLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// `< 30` low, `< 60` medium, otherwise high.
pub fn stress_level(stress_index: f64) -> StressLevel {
    if stress_index < 30.0 {
        StressLevel::Low
    } else if stress_index < 60.0 {
        StressLevel::Medium
    } else {
        StressLevel::High
    }
}

/// Download file name for a plan exported on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("study-plan-{}.txt", date.format("%Y-%m-%d"))
}

/// Renders the plan as a human-readable text document.
pub fn render_plan_text(plan: &GeneratedPlan, generated_on: NaiveDate) -> String {
    let mut text = String::new();
    text.push_str("STUDY PLAN\n");
    text.push_str("============\n\n");
    // Writing into a String cannot fail.
    let _ = writeln!(text, "Generated: {}", generated_on.format("%Y-%m-%d"));
    let _ = writeln!(text, "Total Hours: {:.1}h", plan.total_hours);
    let _ = writeln!(text, "Average Daily: {:.1}h", plan.average_daily_hours);
    let _ = writeln!(text, "Stress Index: {:.0}%\n", plan.stress_index);

    if !plan.warnings.is_empty() {
        text.push_str("WARNINGS:\n");
        for warning in &plan.warnings {
            let _ = writeln!(text, "- {warning}");
        }
        text.push('\n');
    }

    for day in plan.scheduled_days() {
        let label = day.as_str();
        let _ = writeln!(text, "{}\n{}", label.to_uppercase(), "-".repeat(label.len()));
        let mut blocks: Vec<_> = plan.blocks_for_day(day).collect();
        blocks.sort_by_key(|block| block.start_time);
        for block in blocks {
            let _ = writeln!(
                text,
                "{} - {}: {} ({})",
                block.start_time, block.end_time, block.unit_name, block.kind
            );
        }
        text.push('\n');
    }

    text
}

#[cfg(test)]
mod tests {
    use super::{export_file_name, stress_level, StressLevel};
    use chrono::NaiveDate;

    #[test]
    fn stress_bands_split_at_30_and_60() {
        assert_eq!(stress_level(0.0), StressLevel::Low);
        assert_eq!(stress_level(29.9), StressLevel::Low);
        assert_eq!(stress_level(30.0), StressLevel::Medium);
        assert_eq!(stress_level(59.9), StressLevel::Medium);
        assert_eq!(stress_level(60.0), StressLevel::High);
    }

    #[test]
    fn file_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 7).expect("valid date");
        assert_eq!(export_file_name(date), "study-plan-2025-01-07.txt");
    }
}
