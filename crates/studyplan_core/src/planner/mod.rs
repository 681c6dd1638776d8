//! Study-plan generator stages.
//!
//! # Responsibility
//! - Allocate weekly hours across units by weight.
//! - Turn per-unit hour budgets into ordered daily blocks.
//! - Derive metrics and advisory warnings from the result.
//!
//! # Invariants
//! - Every stage is a pure function of its inputs; no stage reads the system
//!   clock or keeps state across calls.
//! - Data flows one way: allocator -> scheduler -> analyzer.

pub mod allocator;
pub mod analyzer;
pub mod scheduler;
pub mod settings;
