use crate::error::{Result, SnapError};
use crate::layout::{ZoneLayout, presets};

/// Ordered collection of layouts with one current selection.
///
/// Names are the identity key: selection, cycling and replacement all
/// address layouts by name, and a duplicate name resolves to its first
/// occurrence. The collection is never empty; constructing or reloading
/// with no layouts falls back to the Wide Center preset.
#[derive(Debug, Clone)]
pub struct LayoutRegistry {
    layouts: Vec<ZoneLayout>,
    current: String,
}

impl LayoutRegistry {
    pub fn new(layouts: Vec<ZoneLayout>) -> Self {
        let layouts = Self::or_fallback(layouts);
        let current = layouts[0].name.clone();
        Self { layouts, current }
    }

    /// Registry seeded with the built-in presets in merge order.
    pub fn with_builtins() -> Self {
        Self::new(presets::builtin_layouts())
    }

    fn or_fallback(layouts: Vec<ZoneLayout>) -> Vec<ZoneLayout> {
        if layouts.is_empty() {
            vec![presets::wide_center()]
        } else {
            layouts
        }
    }

    pub fn layouts(&self) -> &[ZoneLayout] {
        &self.layouts
    }

    pub fn current_name(&self) -> &str {
        &self.current
    }

    pub fn current_layout(&self) -> &ZoneLayout {
        self.layouts
            .iter()
            .find(|layout| layout.name == self.current)
            .unwrap_or(&self.layouts[0])
    }

    pub fn select(&mut self, name: &str) -> Result<()> {
        if self.layouts.iter().any(|layout| layout.name == name) {
            self.current = name.to_string();
            Ok(())
        } else {
            Err(SnapError::LayoutNotFound(name.to_string()))
        }
    }

    /// Advance to the next layout in order, wrapping at the end. A
    /// current name that no longer resolves resets to the first entry.
    pub fn cycle(&mut self) -> &ZoneLayout {
        let next = match self
            .layouts
            .iter()
            .position(|layout| layout.name == self.current)
        {
            Some(index) => (index + 1) % self.layouts.len(),
            None => 0,
        };
        self.current = self.layouts[next].name.clone();
        self.current_layout()
    }

    /// Swap in a freshly loaded collection, keeping the current
    /// selection when a layout with the same name is still present.
    pub fn reload(&mut self, layouts: Vec<ZoneLayout>) {
        self.layouts = Self::or_fallback(layouts);
        if !self
            .layouts
            .iter()
            .any(|layout| layout.name == self.current)
        {
            self.current = self.layouts[0].name.clone();
        }
    }

    /// Replace the layout named `name` with an edited value. A rename
    /// of the current layout moves the selection with it.
    pub fn replace(&mut self, name: &str, layout: ZoneLayout) -> Result<()> {
        let Some(slot) = self
            .layouts
            .iter_mut()
            .find(|existing| existing.name == name)
        else {
            return Err(SnapError::LayoutNotFound(name.to_string()));
        };
        if self.current == name {
            self.current = layout.name.clone();
        }
        *slot = layout;
        Ok(())
    }
}

impl Default for LayoutRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
