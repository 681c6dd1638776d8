//! Generated plan artifact.
//!
//! # Invariants
//! - `blocks` are ordered by day (Monday..Sunday), then by start time.
//! - `stress_index` lies in `[0, 100]`.
//! - A plan is produced whole by one generation call; there is no partial
//!   plan.

use crate::model::availability::StudyDay;
use crate::model::block::StudyBlock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of one generation run.
pub type PlanId = Uuid;

/// Output of the plan generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    /// Fresh for every generation, even with identical inputs.
    pub id: PlanId,
    /// Reference time the plan was generated against.
    pub generated_at: DateTime<Utc>,
    pub blocks: Vec<StudyBlock>,
    /// Sum of non-break block durations, in hours.
    pub total_hours: f64,
    /// Weekly capacity divided by the number of study days.
    pub average_daily_hours: f64,
    pub stress_index: f64,
    pub warnings: Vec<String>,
}

impl GeneratedPlan {
    /// Blocks scheduled on `day`, in plan order.
    pub fn blocks_for_day(&self, day: StudyDay) -> impl Iterator<Item = &StudyBlock> {
        self.blocks.iter().filter(move |block| block.day == day)
    }

    /// Distinct days that carry at least one block, in canonical order.
    pub fn scheduled_days(&self) -> Vec<StudyDay> {
        let mut days: Vec<StudyDay> = self.blocks.iter().map(|block| block.day).collect();
        days.sort();
        days.dedup();
        days
    }
}
