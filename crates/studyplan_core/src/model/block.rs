//! Scheduled study and break blocks.

use crate::clock::ClockTime;
use crate::model::availability::StudyDay;
use crate::model::unit::Difficulty;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Literal unit name used for rest blocks.
pub const BREAK_UNIT_NAME: &str = "Break";

/// Flavour of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Exam preparation.
    DeepFocus,
    /// Practical work.
    Sprint,
    /// Project work.
    Revision,
    Break,
}

impl BlockKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DeepFocus => "deep_focus",
            Self::Sprint => "sprint",
            Self::Revision => "revision",
            Self::Break => "break",
        }
    }
}

impl Display for BlockKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One time-bounded chunk of study or rest on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyBlock {
    /// Unique within one generation run.
    pub id: String,
    /// Unit name, or [`BREAK_UNIT_NAME`] for rest blocks.
    pub unit_name: String,
    pub day: StudyDay,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    /// Always >= the planner's minimum block length.
    pub duration_minutes: u32,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Copied from the unit; `easy` for breaks.
    pub difficulty: Difficulty,
}

impl StudyBlock {
    pub fn is_break(&self) -> bool {
        self.kind == BlockKind::Break
    }
}
