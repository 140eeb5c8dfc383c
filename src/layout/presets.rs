//! Built-in layouts. External defaults-merging relies on these exact
//! rects and names, so treat any change here as a format change.

use uuid::Uuid;

use super::{Zone, ZoneLayout};
use crate::geometry::Rect;

fn zone(seed: u128, x: f64, y: f64, width: f64, height: f64) -> Zone {
    // Fixed ids: two constructions of the same preset compare equal.
    Zone::with_id(Uuid::from_u128(seed), Rect::new(x, y, width, height))
}

/// Left 25% | Center 50% | Right 25%.
pub fn priority_grid() -> ZoneLayout {
    ZoneLayout::new(
        "Priority Grid",
        16.0,
        vec![
            zone(0x10, 0.0, 0.0, 0.25, 1.0),
            zone(0x11, 0.25, 0.0, 0.50, 1.0),
            zone(0x12, 0.75, 0.0, 0.25, 1.0),
        ],
    )
}

/// Three near-equal columns.
pub fn three_column() -> ZoneLayout {
    ZoneLayout::new(
        "3-Column",
        16.0,
        vec![
            zone(0x20, 0.0, 0.0, 0.333, 1.0),
            zone(0x21, 0.333, 0.0, 0.334, 1.0),
            zone(0x22, 0.667, 0.0, 0.333, 1.0),
        ],
    )
}

/// Four quadrants.
pub fn two_by_two() -> ZoneLayout {
    ZoneLayout::new(
        "2x2 Grid",
        16.0,
        vec![
            zone(0x30, 0.0, 0.0, 0.5, 0.5),
            zone(0x31, 0.5, 0.0, 0.5, 0.5),
            zone(0x32, 0.0, 0.5, 0.5, 0.5),
            zone(0x33, 0.5, 0.5, 0.5, 0.5),
        ],
    )
}

/// Left 30% | Center 40% | Right 30%, no gaps.
pub fn wide_center() -> ZoneLayout {
    ZoneLayout::new(
        "Wide Center",
        0.0,
        vec![
            zone(0x40, 0.0, 0.0, 0.30, 1.0),
            zone(0x41, 0.3, 0.0, 0.40, 1.0),
            zone(0x42, 0.7, 0.0, 0.30, 1.0),
        ],
    )
}

/// All built-ins in merge order: saved user layouts are appended after
/// these.
pub fn builtin_layouts() -> Vec<ZoneLayout> {
    vec![wide_center(), priority_grid(), three_column(), two_by_two()]
}
