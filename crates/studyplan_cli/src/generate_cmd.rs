//! `studyplan generate`: build a plan from a JSON request file.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use studyplan_core::{
    export_file_name, plan_summary, render_plan_text, GeneratedPlan, PlanError, PlanRequest,
    PlanService,
};

use crate::config;

/// Output rendering for a generated plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Outcome of a generate run that did not fail with an I/O or parse error.
#[derive(Debug)]
pub enum GenerateOutcome {
    Generated { plan: GeneratedPlan, rendered: String, summary: String },
    /// Inputs cannot produce a plan; message is user-facing.
    Rejected(String),
}

pub struct GenerateArgs<'a> {
    pub input: &'a Path,
    pub now: Option<&'a str>,
    pub format: OutputFormat,
    pub settings: Option<&'a Path>,
}

pub fn run(args: &GenerateArgs<'_>) -> Result<GenerateOutcome> {
    let raw = std::fs::read_to_string(args.input)
        .with_context(|| format!("failed to read input file {}", args.input.display()))?;
    let request: PlanRequest = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse plan request {}", args.input.display()))?;

    let now = parse_now(args.now)?;
    let settings = config::load_settings(args.settings)?;
    let service = PlanService::new(settings)?;

    match service.generate_request(&request, now) {
        Ok(plan) => {
            let rendered = render(&plan, args.format, now)?;
            let summary = plan_summary(&plan, &request.availability);
            Ok(GenerateOutcome::Generated {
                plan,
                rendered,
                summary,
            })
        }
        Err(PlanError::InvalidInput(reason)) => Ok(GenerateOutcome::Rejected(reason.to_string())),
        Err(err) => Err(err.into()),
    }
}

/// Suggested file name when writing a text export next to the input.
pub fn default_output_name(format: OutputFormat, now: DateTime<Utc>) -> Option<String> {
    match format {
        OutputFormat::Text => Some(export_file_name(now.date_naive())),
        OutputFormat::Json => None,
    }
}

fn render(plan: &GeneratedPlan, format: OutputFormat, now: DateTime<Utc>) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(plan).context("failed to encode plan as JSON")
        }
        OutputFormat::Text => Ok(render_plan_text(plan, now.date_naive())),
    }
}

pub fn parse_now(raw: Option<&str>) -> Result<DateTime<Utc>> {
    match raw {
        Some(value) => DateTime::parse_from_rfc3339(value.trim())
            .map(|parsed| parsed.with_timezone(&Utc))
            .with_context(|| format!("invalid --now timestamp `{value}`; expected RFC 3339")),
        None => Ok(Utc::now()),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_now, run, GenerateArgs, GenerateOutcome, OutputFormat};

    const REQUEST: &str = r#"{
        "units": [
            {"id": "u1", "name": "Organic Chemistry", "difficulty": "hard", "type": "exam"},
            {"id": "u2", "name": "Design Project", "difficulty": "easy", "type": "project"}
        ],
        "availability": {
            "dailyHours": 2,
            "weeklyDays": ["tuesday", "monday"],
            "preferredTimes": ["afternoon"],
            "studyPreference": "long"
        }
    }"#;

    fn write_request(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("request.json");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn generates_text_export() {
        let dir = tempfile::tempdir().unwrap();
        let settings = dir.path().join("settings.toml");
        std::fs::write(&settings, "").unwrap();
        let input = write_request(&dir, REQUEST);

        let outcome = run(&GenerateArgs {
            input: &input,
            now: Some("2025-03-03T09:00:00Z"),
            format: OutputFormat::Text,
            settings: Some(&settings),
        })
        .unwrap();

        let GenerateOutcome::Generated { rendered, summary, plan } = outcome else {
            panic!("expected a plan");
        };
        assert!(rendered.starts_with("STUDY PLAN\n"));
        assert!(rendered.contains("MONDAY\n------\n14:00 - 15:30: Organic Chemistry (deep_focus)\n"));
        assert_eq!(summary, format!("Created {} study blocks across 2 days", plan.blocks.len()));
    }

    #[test]
    fn empty_units_are_rejected_not_failed() {
        let dir = tempfile::tempdir().unwrap();
        let settings = dir.path().join("settings.toml");
        std::fs::write(&settings, "").unwrap();
        let input = write_request(
            &dir,
            r#"{"units": [], "availability": {"dailyHours": 2, "weeklyDays": ["monday"]}}"#,
        );

        let outcome = run(&GenerateArgs {
            input: &input,
            now: Some("2025-03-03T09:00:00Z"),
            format: OutputFormat::Json,
            settings: Some(&settings),
        })
        .unwrap();

        let GenerateOutcome::Rejected(message) = outcome else {
            panic!("expected rejection");
        };
        assert!(message.starts_with("No units configured"));
    }

    #[test]
    fn parse_now_rejects_garbage() {
        assert!(parse_now(Some("next tuesday")).is_err());
        assert!(parse_now(Some("2025-03-03T09:00:00+02:00")).is_ok());
    }
}
