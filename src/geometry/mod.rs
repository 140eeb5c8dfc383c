//! Geometry module orchestrator; implementation details live in the
//! private `core` module.

mod core;

pub use self::core::{Point, Rect};
