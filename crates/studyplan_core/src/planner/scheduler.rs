//! Block scheduler: carves per-unit hour budgets into daily study blocks.
//!
//! # Responsibility
//! - Walk the selected days in canonical order and greedily emit blocks.
//! - Insert one break per long study day.
//!
//! # Invariants
//! - Each day starts from zero used hours; nothing carries across days.
//! - A unit's remaining hours on a day are `allocation - day_hours_used / days`.
//!   This is a per-day decay heuristic, not a running balance, and is
//!   recomputed for every (unit, day) pair.
//! - Blocks never exceed the nominal block length and are strictly longer
//!   than the minimum block length.
//! - Within a day, blocks are ordered by start offset.

use crate::clock::{self, hours_to_minutes, ClockTime};
use crate::model::availability::{AvailabilityProfile, StudyDay, StudyPreference};
use crate::model::block::{BlockKind, StudyBlock, BREAK_UNIT_NAME};
use crate::model::unit::{Difficulty, Unit};
use crate::planner::allocator::Allocations;
use crate::planner::settings::PlannerSettings;

/// Schedules blocks with default planner settings.
pub fn schedule(
    units: &[Unit],
    allocations: &Allocations,
    availability: &AvailabilityProfile,
) -> Vec<StudyBlock> {
    schedule_with(&PlannerSettings::default(), units, allocations, availability)
}

/// Schedules blocks for every selected day, day-major.
pub fn schedule_with(
    settings: &PlannerSettings,
    units: &[Unit],
    allocations: &Allocations,
    availability: &AvailabilityProfile,
) -> Vec<StudyBlock> {
    let days = availability.canonical_days();
    if days.is_empty() {
        return Vec::new();
    }

    let ordered = units_by_weight(units);
    let day_share = 1.0 / days.len() as f64;
    let mut blocks = Vec::new();

    for (day_index, day) in days.into_iter().enumerate() {
        let (mut day_blocks, day_hours_used) =
            schedule_day(settings, &ordered, allocations, availability, day, day_share);

        if availability.study_preference != StudyPreference::Short
            && day_hours_used > settings.break_threshold_hours
        {
            insert_break(settings, &mut day_blocks, availability, day, day_index, day_hours_used);
        }

        blocks.extend(day_blocks.into_iter().map(|placed| placed.block));
    }

    blocks
}

/// A block plus its start offset from the day's base hour.
struct PlacedBlock {
    offset_minutes: u32,
    block: StudyBlock,
}

/// Units by descending weight; equal weights keep input order.
fn units_by_weight(units: &[Unit]) -> Vec<&Unit> {
    let mut ordered: Vec<&Unit> = units.iter().collect();
    ordered.sort_by(|left, right| right.weight_score.total_cmp(&left.weight_score));
    ordered
}

fn schedule_day(
    settings: &PlannerSettings,
    ordered: &[&Unit],
    allocations: &Allocations,
    availability: &AvailabilityProfile,
    day: StudyDay,
    day_share: f64,
) -> (Vec<PlacedBlock>, f64) {
    let nominal_hours = settings.nominal_block_hours(availability.study_preference);
    let min_hours = settings.min_block_hours();
    let mut day_blocks: Vec<PlacedBlock> = Vec::new();
    let mut day_hours_used = 0.0_f64;

    for unit in ordered {
        let allocation = allocations.get(&unit.id).copied().unwrap_or(0.0);
        let remaining_hours = allocation - day_hours_used * day_share;
        let block_hours = nominal_hours
            .min(remaining_hours)
            .min(availability.daily_hours - day_hours_used);
        if block_hours <= min_hours {
            continue;
        }

        // Offsets are rounded independently so consecutive blocks tile
        // without gaps.
        let start_offset = hours_to_minutes(day_hours_used);
        let end_offset = hours_to_minutes(day_hours_used + block_hours);
        let start_time = clock::calculate_start_time(day_hours_used, &availability.preferred_times);
        let sequence = day_blocks.len();

        day_hours_used += block_hours;
        day_blocks.push(PlacedBlock {
            offset_minutes: start_offset,
            block: StudyBlock {
                id: format!("{}-{}-{}", unit.id, day, sequence),
                unit_name: unit.name.clone(),
                day,
                start_time,
                end_time: start_time.plus_minutes(end_offset - start_offset),
                duration_minutes: end_offset - start_offset,
                kind: unit.kind.block_kind(),
                difficulty: unit.difficulty,
            },
        });
    }

    (day_blocks, day_hours_used)
}

/// Adds the day's break at `floor(hours_used / 2)` hours into the day.
fn insert_break(
    settings: &PlannerSettings,
    day_blocks: &mut Vec<PlacedBlock>,
    availability: &AvailabilityProfile,
    day: StudyDay,
    day_index: usize,
    day_hours_used: f64,
) {
    let break_hours = (day_hours_used / 2.0).floor();
    let offset_minutes = hours_to_minutes(break_hours);
    let start_time: ClockTime =
        clock::calculate_start_time(break_hours, &availability.preferred_times);

    let position = day_blocks
        .iter()
        .position(|placed| placed.offset_minutes > offset_minutes)
        .unwrap_or(day_blocks.len());

    day_blocks.insert(
        position,
        PlacedBlock {
            offset_minutes,
            block: StudyBlock {
                id: format!("break-{day}-{day_index}"),
                unit_name: BREAK_UNIT_NAME.to_string(),
                day,
                start_time,
                end_time: start_time.plus_minutes(settings.break_minutes),
                duration_minutes: settings.break_minutes,
                kind: BlockKind::Break,
                difficulty: Difficulty::Easy,
            },
        },
    );
}
