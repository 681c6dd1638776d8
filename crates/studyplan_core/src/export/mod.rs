//! Plan export formats consumed by the presentation layer.

pub mod text;
