//! Core domain logic for StudyPlan.
//! This crate is the single source of truth for plan-generation rules.

pub mod clock;
pub mod export;
pub mod logging;
pub mod model;
pub mod planner;
pub mod service;

pub use clock::{calculate_end_time, calculate_start_time, ClockTime};
pub use export::text::{export_file_name, render_plan_text, stress_level, StressLevel};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::availability::{AvailabilityProfile, PreferredTime, StudyDay, StudyPreference};
pub use model::block::{BlockKind, StudyBlock, BREAK_UNIT_NAME};
pub use model::plan::{GeneratedPlan, PlanId};
pub use model::unit::{
    compute_weight_score, Difficulty, Unit, UnitId, UnitType, UnitValidationError,
};
pub use planner::allocator::{allocate, Allocations};
pub use planner::analyzer::{
    analyze, upcoming_exams_warning, PlanAnalysis, LOW_HOURS_WARNING, MANY_HARD_UNITS_WARNING,
};
pub use planner::scheduler::schedule;
pub use planner::settings::{PlannerSettings, SettingsError};
pub use service::plan_service::{
    generate_plan, plan_summary, validate_inputs, InvalidInput, PlanError, PlanRequest,
    PlanResult, PlanService,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
