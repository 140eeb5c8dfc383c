//! Zone and layout data model.
//!
//! Downstream code imports layout types from here while the
//! implementation details live in the private `core` module. The
//! built-in presets ship in `presets`.

mod core;
pub mod presets;

pub use self::core::{MIN_ZONE_EXTENT, Zone, ZoneLayout};
