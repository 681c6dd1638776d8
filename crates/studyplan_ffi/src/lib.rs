//! Flutter-facing bindings for `studyplan_core`.

pub mod api;
