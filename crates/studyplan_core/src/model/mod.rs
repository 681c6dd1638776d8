//! Domain model for study planning.
//!
//! # Responsibility
//! - Define the value objects exchanged with persistence and presentation.
//! - Keep the JSON wire shape (camelCase field names) in one place.
//!
//! # Invariants
//! - Model values are owned by callers; core never caches them across calls.
//! - A unit's `weight_score` is derived once at creation and then treated as
//!   input data.

pub mod availability;
pub mod block;
pub mod plan;
pub mod unit;
