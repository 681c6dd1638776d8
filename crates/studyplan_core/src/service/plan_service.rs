//! Plan generation use-case service.
//!
//! # Responsibility
//! - Check generation preconditions and report them as recoverable errors.
//! - Run allocator, scheduler and analyzer and assemble one `GeneratedPlan`.
//! - Emit metadata-only diagnostic events.
//!
//! # Invariants
//! - Generation either returns a complete plan or an error; never a partial
//!   plan.
//! - `now` is always injected; the service never reads the system clock.
//! - Logs carry counts and ids only, never unit names.

use crate::model::availability::AvailabilityProfile;
use crate::model::plan::GeneratedPlan;
use crate::model::unit::{Unit, UnitValidationError};
use crate::planner::allocator::allocate;
use crate::planner::analyzer::analyze_with;
use crate::planner::scheduler::schedule_with;
use crate::planner::settings::{PlannerSettings, SettingsError};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type PlanResult<T> = Result<T, PlanError>;

/// Inputs a plan cannot be generated from.
///
/// These are expected states in the UI ("nothing configured yet"), so each
/// carries a user-facing title and description.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInput {
    NoUnits,
    NoStudyDays,
    InvalidDailyHours(f64),
    InvalidUnit {
        index: usize,
        source: UnitValidationError,
    },
    DuplicateUnitId(String),
}

impl InvalidInput {
    /// Stable machine-readable reason, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoUnits => "no_units",
            Self::NoStudyDays => "no_study_days",
            Self::InvalidDailyHours(_) => "invalid_daily_hours",
            Self::InvalidUnit { .. } => "invalid_unit",
            Self::DuplicateUnitId(_) => "duplicate_unit_id",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::NoUnits => "No units configured",
            Self::NoStudyDays => "No study days selected",
            Self::InvalidDailyHours(_) => "Invalid daily availability",
            Self::InvalidUnit { .. } | Self::DuplicateUnitId(_) => "Invalid study unit",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Self::NoUnits => {
                "Please add at least one study unit before generating a plan".to_string()
            }
            Self::NoStudyDays => "Please select at least one study day".to_string(),
            Self::InvalidDailyHours(hours) => {
                format!("Daily study hours must be greater than zero, got {hours}")
            }
            Self::InvalidUnit { index, source } => format!("Unit #{}: {source}", index + 1),
            Self::DuplicateUnitId(id) => format!("Unit id `{id}` is used more than once"),
        }
    }
}

impl Display for InvalidInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title(), self.description())
    }
}

impl Error for InvalidInput {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidUnit { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Service error for plan generation.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Caller-side precondition failure; no plan was produced.
    InvalidInput(InvalidInput),
    /// Planner settings are unusable.
    Settings(SettingsError),
}

impl Display for PlanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(err) => write!(f, "cannot generate plan: {err}"),
            Self::Settings(err) => write!(f, "invalid planner settings: {err}"),
        }
    }
}

impl Error for PlanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(err) => Some(err),
            Self::Settings(err) => Some(err),
        }
    }
}

impl From<InvalidInput> for PlanError {
    fn from(value: InvalidInput) -> Self {
        Self::InvalidInput(value)
    }
}

impl From<SettingsError> for PlanError {
    fn from(value: SettingsError) -> Self {
        Self::Settings(value)
    }
}

/// Units and availability as handed over by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub units: Vec<Unit>,
    pub availability: AvailabilityProfile,
}

/// Use-case service wrapper for plan generation.
#[derive(Debug, Clone, Default)]
pub struct PlanService {
    settings: PlannerSettings,
}

impl PlanService {
    /// Creates a service with validated settings.
    pub fn new(settings: PlannerSettings) -> PlanResult<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    /// Generates a plan for `units` and `availability` as of `now`.
    ///
    /// # Errors
    /// - `PlanError::InvalidInput` when there are no units, no study days,
    ///   non-positive daily hours, or an invalid/duplicate unit.
    pub fn generate(
        &self,
        units: &[Unit],
        availability: &AvailabilityProfile,
        now: DateTime<Utc>,
    ) -> PlanResult<GeneratedPlan> {
        if let Err(err) = validate_inputs(units, availability) {
            warn!(
                "event=plan_generate module=planner status=rejected reason={}",
                err.code()
            );
            return Err(err.into());
        }

        let total_weekly_hours = availability.total_weekly_hours();
        let allocations = allocate(units, total_weekly_hours);
        debug!(
            "event=plan_allocate module=planner units={} days={} total_weekly_hours={:.2}",
            units.len(),
            availability.day_count(),
            total_weekly_hours
        );

        let blocks = schedule_with(&self.settings, units, &allocations, availability);
        let analysis = analyze_with(&self.settings, units, availability, &blocks, now);

        let plan = GeneratedPlan {
            id: Uuid::new_v4(),
            generated_at: now,
            blocks,
            total_hours: analysis.total_hours,
            average_daily_hours: analysis.average_daily_hours,
            stress_index: analysis.stress_index,
            warnings: analysis.warnings,
        };

        info!(
            "event=plan_generate module=planner status=ok plan_id={} blocks={} days={} warnings={} stress_index={:.1}",
            plan.id,
            plan.blocks.len(),
            availability.day_count(),
            plan.warnings.len(),
            plan.stress_index
        );
        Ok(plan)
    }

    /// Convenience wrapper over [`PlanService::generate`].
    pub fn generate_request(
        &self,
        request: &PlanRequest,
        now: DateTime<Utc>,
    ) -> PlanResult<GeneratedPlan> {
        self.generate(&request.units, &request.availability, now)
    }
}

/// Generates a plan with default planner settings.
pub fn generate_plan(
    units: &[Unit],
    availability: &AvailabilityProfile,
    now: DateTime<Utc>,
) -> PlanResult<GeneratedPlan> {
    PlanService::default().generate(units, availability, now)
}

/// Checks generation preconditions without running the planner.
pub fn validate_inputs(
    units: &[Unit],
    availability: &AvailabilityProfile,
) -> Result<(), InvalidInput> {
    if units.is_empty() {
        return Err(InvalidInput::NoUnits);
    }
    if availability.weekly_days.is_empty() {
        return Err(InvalidInput::NoStudyDays);
    }
    if !availability.daily_hours.is_finite() || availability.daily_hours <= 0.0 {
        return Err(InvalidInput::InvalidDailyHours(availability.daily_hours));
    }

    let mut seen = BTreeSet::new();
    for (index, unit) in units.iter().enumerate() {
        unit.validate()
            .map_err(|source| InvalidInput::InvalidUnit { index, source })?;
        if !seen.insert(unit.id.as_str()) {
            return Err(InvalidInput::DuplicateUnitId(unit.id.clone()));
        }
    }
    Ok(())
}

/// Short success message for UI toasts.
pub fn plan_summary(plan: &GeneratedPlan, availability: &AvailabilityProfile) -> String {
    format!(
        "Created {} study blocks across {} days",
        plan.blocks.len(),
        availability.day_count()
    )
}
