//! Study unit domain model.
//!
//! # Responsibility
//! - Define the course/assessment record a plan is generated from.
//! - Own the difficulty and assessment-type weight tables.
//!
//! # Invariants
//! - `name` is non-empty after trimming.
//! - `weight_score` is finite and non-negative.
//! - `weight_score` is computed by `Unit::new` and never recomputed by the
//!   planner.

use crate::model::block::BlockKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque unit identifier supplied by the persistence collaborator.
pub type UnitId = String;

/// How demanding a unit is for the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Moderate,
    Hard,
}

impl Difficulty {
    /// Base score used by the weight formula.
    pub fn score(self) -> f64 {
        match self {
            Self::Easy => 1.0,
            Self::Moderate => 2.0,
            Self::Hard => 3.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Hard => "hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of assessment a unit ends with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    #[default]
    Exam,
    Practical,
    Project,
}

impl UnitType {
    /// Multiplier applied on top of the difficulty score.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Exam => 1.5,
            Self::Practical => 1.2,
            Self::Project => 1.0,
        }
    }

    /// Block flavour used when this unit is scheduled.
    pub fn block_kind(self) -> BlockKind {
        match self {
            Self::Exam => BlockKind::DeepFocus,
            Self::Practical => BlockKind::Sprint,
            Self::Project => BlockKind::Revision,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exam => "exam",
            Self::Practical => "practical",
            Self::Project => "project",
        }
    }
}

impl Display for UnitType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computes the priority weight for one difficulty/type pair.
///
/// The smallest possible value is `1.0` (easy project), the largest `4.5`
/// (hard exam).
pub fn compute_weight_score(difficulty: Difficulty, kind: UnitType) -> f64 {
    difficulty.score() * kind.multiplier()
}

/// Validation failures for unit records.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitValidationError {
    EmptyId,
    EmptyName,
    InvalidWeightScore(f64),
}

impl Display for UnitValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "unit id cannot be empty"),
            Self::EmptyName => write!(f, "unit name is required"),
            Self::InvalidWeightScore(value) => {
                write!(f, "weight score must be finite and >= 0, got {value}")
            }
        }
    }
}

impl Error for UnitValidationError {}

/// A course, practical or project the user is studying for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "UnitRecord")]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    pub difficulty: Difficulty,
    /// Serialized as `type` to match the external schema.
    #[serde(rename = "type")]
    pub kind: UnitType,
    /// Absent means no deadline pressure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment_date: Option<NaiveDate>,
    pub weight_score: f64,
}

impl Unit {
    /// Creates a unit and derives its weight score.
    pub fn new(
        id: impl Into<UnitId>,
        name: impl Into<String>,
        difficulty: Difficulty,
        kind: UnitType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            difficulty,
            kind,
            assessment_date: None,
            weight_score: compute_weight_score(difficulty, kind),
        }
    }

    pub fn with_assessment_date(mut self, date: NaiveDate) -> Self {
        self.assessment_date = Some(date);
        self
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), UnitValidationError> {
        if self.id.trim().is_empty() {
            return Err(UnitValidationError::EmptyId);
        }
        if self.name.trim().is_empty() {
            return Err(UnitValidationError::EmptyName);
        }
        if !self.weight_score.is_finite() || self.weight_score < 0.0 {
            return Err(UnitValidationError::InvalidWeightScore(self.weight_score));
        }
        Ok(())
    }

    pub fn is_hard(&self) -> bool {
        self.difficulty == Difficulty::Hard
    }

    pub fn is_exam(&self) -> bool {
        self.kind == UnitType::Exam
    }
}

/// Wire form accepted on deserialization.
///
/// Older stored records may lack `weightScore`; it is derived on read in that
/// case.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnitRecord {
    id: UnitId,
    name: String,
    #[serde(default)]
    difficulty: Difficulty,
    #[serde(rename = "type", default)]
    kind: UnitType,
    #[serde(default)]
    assessment_date: Option<NaiveDate>,
    #[serde(default)]
    weight_score: Option<f64>,
}

impl TryFrom<UnitRecord> for Unit {
    type Error = UnitValidationError;

    fn try_from(record: UnitRecord) -> Result<Self, Self::Error> {
        let unit = Self {
            weight_score: record
                .weight_score
                .unwrap_or_else(|| compute_weight_score(record.difficulty, record.kind)),
            id: record.id,
            name: record.name,
            difficulty: record.difficulty,
            kind: record.kind,
            assessment_date: record.assessment_date,
        };
        unit.validate()?;
        Ok(unit)
    }
}
