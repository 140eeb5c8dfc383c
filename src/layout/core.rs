use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::Rect;

/// Smallest normalized width or height an edit will produce. Zones
/// below this are structurally valid but useless as drop targets, so
/// resize operations floor at it.
pub const MIN_ZONE_EXTENT: f64 = 0.05;

/// A single drop target: a rect in normalized layout space (top-left
/// origin, both axes in `[0, 1]`) with a stable identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: Uuid,
    pub rect: Rect,
}

impl Zone {
    pub fn new(rect: Rect) -> Self {
        Self {
            id: Uuid::new_v4(),
            rect,
        }
    }

    pub const fn with_id(id: Uuid, rect: Rect) -> Self {
        Self { id, rect }
    }

    /// Same zone repositioned, clamped so the rect stays inside the
    /// unit square.
    pub fn moved_to(&self, x: f64, y: f64) -> Zone {
        let x = x.clamp(0.0, (1.0 - self.rect.width).max(0.0));
        let y = y.clamp(0.0, (1.0 - self.rect.height).max(0.0));
        Zone {
            id: self.id,
            rect: Rect::new(x, y, self.rect.width, self.rect.height),
        }
    }

    /// Same zone resized, floored at [`MIN_ZONE_EXTENT`] per axis.
    pub fn resized(&self, width: f64, height: f64) -> Zone {
        Zone {
            id: self.id,
            rect: Rect::new(
                self.rect.x,
                self.rect.y,
                width.max(MIN_ZONE_EXTENT),
                height.max(MIN_ZONE_EXTENT),
            ),
        }
    }
}

/// Named, ordered set of zones sharing one spacing value. Declaration
/// order is the hit-test priority. Edits never mutate in place; every
/// operation returns a new layout for the caller to swap in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneLayout {
    pub name: String,
    /// Gap in points between zones, applied as an inset on each side
    /// when a target frame is computed.
    pub spacing: f64,
    pub zones: Vec<Zone>,
}

impl ZoneLayout {
    pub fn new(name: impl Into<String>, spacing: f64, zones: Vec<Zone>) -> Self {
        Self {
            name: name.into(),
            spacing: spacing.max(0.0),
            zones,
        }
    }

    /// Starting point for the editor's "new layout" action.
    pub fn draft(ordinal: usize) -> Self {
        Self::new(
            format!("New Layout {ordinal}"),
            16.0,
            vec![Zone::new(Rect::new(0.25, 0.25, 0.5, 0.5))],
        )
    }

    /// Default rect for a zone added through the editor.
    pub fn draft_zone() -> Zone {
        Zone::new(Rect::new(0.4, 0.4, 0.2, 0.2))
    }

    pub fn renamed(&self, name: impl Into<String>) -> ZoneLayout {
        ZoneLayout {
            name: name.into(),
            spacing: self.spacing,
            zones: self.zones.clone(),
        }
    }

    pub fn with_spacing(&self, spacing: f64) -> ZoneLayout {
        ZoneLayout {
            name: self.name.clone(),
            spacing: spacing.max(0.0),
            zones: self.zones.clone(),
        }
    }

    pub fn with_zone(&self, zone: Zone) -> ZoneLayout {
        let mut zones = self.zones.clone();
        zones.push(zone);
        ZoneLayout {
            name: self.name.clone(),
            spacing: self.spacing,
            zones,
        }
    }

    /// Copy without the zone at `index`; an out-of-range index returns
    /// the layout unchanged.
    pub fn without_zone(&self, index: usize) -> ZoneLayout {
        let mut zones = self.zones.clone();
        if index < zones.len() {
            zones.remove(index);
        }
        ZoneLayout {
            name: self.name.clone(),
            spacing: self.spacing,
            zones,
        }
    }

    /// Copy with the zone at `index` swapped out; an out-of-range index
    /// returns the layout unchanged.
    pub fn replacing_zone(&self, index: usize, zone: Zone) -> ZoneLayout {
        let mut zones = self.zones.clone();
        if let Some(slot) = zones.get_mut(index) {
            *slot = zone;
        }
        ZoneLayout {
            name: self.name.clone(),
            spacing: self.spacing,
            zones,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ZoneLayout {
        ZoneLayout::new(
            "Test Layout",
            10.0,
            vec![Zone::new(Rect::new(0.0, 0.0, 0.5, 1.0))],
        )
    }

    #[test]
    fn zone_roundtrips_through_json() {
        let original = Zone::new(Rect::new(0.1, 0.2, 0.3, 0.4));
        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: Zone = serde_json::from_str(&encoded).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn layout_roundtrips_through_json() {
        let original = sample();
        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: ZoneLayout = serde_json::from_str(&encoded).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn empty_layout_roundtrips_through_json() {
        let original = ZoneLayout::new("Empty", 0.0, Vec::new());
        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: ZoneLayout = serde_json::from_str(&encoded).unwrap();
        assert_eq!(original, decoded);
        assert!(decoded.zones.is_empty());
    }

    #[test]
    fn layout_list_roundtrips_through_json() {
        let list = vec![
            ZoneLayout::new("L1", 5.0, Vec::new()),
            ZoneLayout::new("L2", 10.0, Vec::new()),
        ];
        let encoded = serde_json::to_string_pretty(&list).unwrap();
        let decoded: Vec<ZoneLayout> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(list, decoded);
        assert_eq!(decoded[0].name, "L1");
        assert_eq!(decoded[1].name, "L2");
    }

    #[test]
    fn spacing_never_goes_negative() {
        let layout = sample().with_spacing(-4.0);
        assert_eq!(layout.spacing, 0.0);
        assert_eq!(ZoneLayout::new("N", -1.0, Vec::new()).spacing, 0.0);
    }

    #[test]
    fn edits_produce_new_values() {
        let layout = sample();
        let renamed = layout.renamed("Other");
        assert_eq!(layout.name, "Test Layout");
        assert_eq!(renamed.name, "Other");
        assert_eq!(renamed.zones, layout.zones);

        let grown = layout.with_zone(ZoneLayout::draft_zone());
        assert_eq!(layout.zones.len(), 1);
        assert_eq!(grown.zones.len(), 2);

        let shrunk = grown.without_zone(0);
        assert_eq!(shrunk.zones.len(), 1);
        assert_eq!(shrunk.zones[0], grown.zones[1]);
    }

    #[test]
    fn out_of_range_edits_are_no_ops() {
        let layout = sample();
        assert_eq!(layout.without_zone(5), layout);
        assert_eq!(layout.replacing_zone(5, ZoneLayout::draft_zone()), layout);
    }

    #[test]
    fn draft_layout_starts_with_one_centered_zone() {
        let draft = ZoneLayout::draft(3);
        assert_eq!(draft.name, "New Layout 3");
        assert_eq!(draft.spacing, 16.0);
        assert_eq!(draft.zones.len(), 1);
        assert_eq!(draft.zones[0].rect, Rect::new(0.25, 0.25, 0.5, 0.5));
    }

    #[test]
    fn moved_zone_stays_in_unit_square() {
        let zone = Zone::new(Rect::new(0.0, 0.0, 0.4, 0.3));
        let moved = zone.moved_to(0.9, -0.5);
        assert_eq!(moved.id, zone.id);
        assert_eq!(moved.rect, Rect::new(0.6, 0.0, 0.4, 0.3));
    }

    #[test]
    fn resized_zone_respects_minimum_extent() {
        let zone = Zone::new(Rect::new(0.1, 0.1, 0.4, 0.4));
        let resized = zone.resized(0.01, 0.2);
        assert_eq!(resized.rect.width, MIN_ZONE_EXTENT);
        assert_eq!(resized.rect.height, 0.2);
    }
}
