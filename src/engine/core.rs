use crate::geometry::{Point, Rect};
use crate::layout::ZoneLayout;

/// Pure coordinate math and hit-testing for zone snapping.
///
/// Three coordinate conventions meet here:
/// - pointer input: bottom-left origin, Y up (the host's native mouse
///   space);
/// - normalized layout space: top-left origin, Y down, `[0, 1]` per
///   axis;
/// - window placement: top-left origin in absolute points.
///
/// Every operation is a pure function of its inputs; the engine holds
/// no state and may be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneEngine;

impl ZoneEngine {
    pub const fn new() -> Self {
        Self
    }

    /// Converts a pointer position (bottom-left origin, Y up) into a
    /// normalized layout point (top-left origin, Y down) relative to
    /// `display_frame`.
    ///
    /// The result is not clamped: a pointer outside the display maps
    /// outside `[0, 1]`. A degenerate display frame yields the origin
    /// rather than a non-finite value.
    pub fn normalized_layout_point(&self, pointer: Point, display_frame: Rect) -> Point {
        if display_frame.is_degenerate() {
            return Point::ZERO;
        }
        let nx = (pointer.x - display_frame.x) / display_frame.width;
        // Pointer Y increases upward; layout Y increases downward.
        let ny = 1.0 - (pointer.y - display_frame.y) / display_frame.height;
        Point::new(nx, ny)
    }

    /// Index of the first zone in declaration order whose rect contains
    /// `point`, or `None` when the point lies outside every zone.
    ///
    /// Containment is closed on the min edge, so a point exactly on a
    /// shared boundary resolves to the zone that starts there, which is
    /// the earlier-declared zone in any layout whose zones tile the
    /// space.
    pub fn active_zone_index(&self, point: Point, layout: &ZoneLayout) -> Option<usize> {
        layout.zones.iter().position(|zone| zone.rect.contains(point))
    }

    /// Converts a normalized zone rect into the absolute frame a
    /// window-placement collaborator should apply (top-left origin,
    /// points).
    ///
    /// `visible_frame` is the display's usable area (menu bar excluded)
    /// and `display_frame` its full bounds, both bottom-left origin.
    pub fn target_frame(
        &self,
        zone_rect: Rect,
        visible_frame: Rect,
        display_frame: Rect,
        spacing: f64,
    ) -> Rect {
        // Scale the normalized rect into the visible area. Zone Y is
        // top-left based while the visible frame is bottom-left based:
        // zone y=0 lands at the top of the visible area, which is the
        // highest pointer-space Y.
        let width = zone_rect.width * visible_frame.width;
        let height = zone_rect.height * visible_frame.height;
        let x = visible_frame.x + zone_rect.x * visible_frame.width;
        let y = visible_frame.y
            + (1.0 - zone_rect.y - zone_rect.height) * visible_frame.height;

        let inset = Rect::new(x, y, width, height).inset_by(spacing / 2.0, spacing / 2.0);

        // Flip into the placement convention using the full display
        // height; the visible/full difference is what surfaces the
        // menu-bar offset in the final origin.
        let flipped_y = display_frame.height - (inset.y + inset.height);
        Rect::new(inset.x, flipped_y, inset.width, inset.height)
    }
}
