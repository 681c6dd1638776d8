//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose plan generation and export to Dart via FRB.
//! - Translate core errors into simple response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Plans cross the boundary as JSON using the core wire shape.

use chrono::{DateTime, Utc};
use log::warn;
use studyplan_core::{
    core_version as core_version_inner, export_file_name, init_logging as init_logging_inner,
    ping as ping_inner, plan_summary, render_plan_text, stress_level, GeneratedPlan, PlanError,
    PlanRequest, PlanService,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Response envelope for plan generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanResponse {
    /// Whether a plan was produced.
    pub ok: bool,
    /// Generated plan as JSON (camelCase wire shape) when `ok`.
    pub plan_json: Option<String>,
    /// Short user-facing headline, e.g. `No units configured`.
    pub title: String,
    /// Human-readable detail for toasts/diagnostics.
    pub message: String,
    /// `low|medium|high` stress banding when `ok`.
    pub stress_level: Option<String>,
}

impl PlanResponse {
    fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            plan_json: None,
            title: title.into(),
            message: message.into(),
            stress_level: None,
        }
    }
}

/// Response envelope for the text export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResponse {
    pub ok: bool,
    /// Suggested download name, `study-plan-YYYY-MM-DD.txt`.
    pub file_name: String,
    pub text: String,
    pub message: String,
}

/// Generates a study plan from a `{ "units": [...], "availability": {...} }`
/// request.
///
/// `now_rfc3339` pins the reference time; `None` uses the current UTC time.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Never panics.
/// - Missing units/days come back as `ok=false` with a user-facing title.
#[flutter_rust_bridge::frb(sync)]
pub fn generate_plan(request_json: String, now_rfc3339: Option<String>) -> PlanResponse {
    let request: PlanRequest = match serde_json::from_str(&request_json) {
        Ok(request) => request,
        Err(err) => {
            warn!("event=ffi_generate_plan module=ffi status=error reason=bad_request");
            return PlanResponse::failure("Invalid request", format!("generate_plan failed: {err}"));
        }
    };
    let now = match resolve_now(now_rfc3339.as_deref()) {
        Ok(now) => now,
        Err(message) => return PlanResponse::failure("Invalid request", message),
    };

    match PlanService::default().generate_request(&request, now) {
        Ok(plan) => match serde_json::to_string(&plan) {
            Ok(plan_json) => PlanResponse {
                ok: true,
                plan_json: Some(plan_json),
                title: "Study plan generated!".to_string(),
                message: plan_summary(&plan, &request.availability),
                stress_level: Some(stress_level(plan.stress_index).as_str().to_string()),
            },
            Err(err) => {
                PlanResponse::failure("Internal error", format!("plan encoding failed: {err}"))
            }
        },
        Err(PlanError::InvalidInput(reason)) => {
            PlanResponse::failure(reason.title(), reason.description())
        }
        Err(err) => PlanResponse::failure("Internal error", err.to_string()),
    }
}

/// Renders a previously generated plan as downloadable text.
///
/// # FFI contract
/// - Sync call, pure computation.
/// - Never panics; malformed plan JSON returns `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn export_plan_text(plan_json: String) -> ExportResponse {
    match serde_json::from_str::<GeneratedPlan>(&plan_json) {
        Ok(plan) => {
            let today = Utc::now().date_naive();
            ExportResponse {
                ok: true,
                file_name: export_file_name(today),
                text: render_plan_text(&plan, today),
                message: "Study plan has been exported as a text file".to_string(),
            }
        }
        Err(err) => ExportResponse {
            ok: false,
            file_name: String::new(),
            text: String::new(),
            message: format!("export_plan_text failed: {err}"),
        },
    }
}

fn resolve_now(raw: Option<&str>) -> Result<DateTime<Utc>, String> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|err| format!("invalid now timestamp `{value}`: {err}")),
        None => Ok(Utc::now()),
    }
}
