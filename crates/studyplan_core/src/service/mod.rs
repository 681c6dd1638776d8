//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate planner stages into use-case level APIs.
//! - Keep FFI/CLI layers decoupled from planner internals.

pub mod plan_service;
