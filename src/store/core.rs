use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::layout::{ZoneLayout, presets};

/// Loads and saves the user's layout list as pretty-printed JSON.
///
/// Loading is total: a missing file, unreadable bytes or a decode
/// failure all yield the empty list so the caller can merge in the
/// built-in presets instead of aborting.
pub struct LayoutStore {
    path: PathBuf,
}

impl LayoutStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<platform data dir>/zonesnap/layouts.json`. `None`
    /// only on hosts with no resolvable data directory.
    pub fn at_default_location() -> Option<Self> {
        dirs::data_dir().map(|dir| Self::new(dir.join("zonesnap").join("layouts.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved user layouts, or the empty list when nothing valid is on
    /// disk.
    pub fn load(&self) -> Vec<ZoneLayout> {
        let Ok(bytes) = fs::read(&self.path) else {
            return Vec::new();
        };
        serde_json::from_slice(&bytes).unwrap_or_default()
    }

    /// Persist the layout list. Returns `Ok(false)` without touching
    /// the file when the encoded bytes already match what is on disk.
    pub fn save(&self, layouts: &[ZoneLayout]) -> Result<bool> {
        let encoded = serde_json::to_string_pretty(layouts)?;

        if let Ok(existing) = fs::read(&self.path) {
            if blake3::hash(&existing) == blake3::hash(encoded.as_bytes()) {
                return Ok(false);
            }
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, encoded)?;
        Ok(true)
    }

    /// Built-in presets followed by whatever the user has saved.
    pub fn all_layouts(&self) -> Vec<ZoneLayout> {
        let mut layouts = presets::builtin_layouts();
        layouts.extend(self.load());
        layouts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::layout::Zone;
    use std::sync::atomic::{AtomicU32, Ordering};

    static NEXT_ID: AtomicU32 = AtomicU32::new(0);

    struct TempStore {
        store: LayoutStore,
        dir: PathBuf,
    }

    impl TempStore {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!(
                "zonesnap-store-{}-{}",
                std::process::id(),
                NEXT_ID.fetch_add(1, Ordering::Relaxed)
            ));
            let store = LayoutStore::new(dir.join("layouts.json"));
            Self { store, dir }
        }
    }

    impl Drop for TempStore {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.dir);
        }
    }

    fn sample_layouts() -> Vec<ZoneLayout> {
        vec![ZoneLayout::new(
            "Saved",
            8.0,
            vec![Zone::new(Rect::new(0.0, 0.0, 1.0, 1.0))],
        )]
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let temp = TempStore::new();
        assert!(temp.store.load().is_empty());
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let temp = TempStore::new();
        fs::create_dir_all(&temp.dir).unwrap();
        fs::write(temp.store.path(), b"{not json").unwrap();
        assert!(temp.store.load().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = TempStore::new();
        let layouts = sample_layouts();
        assert!(temp.store.save(&layouts).unwrap());
        assert_eq!(temp.store.load(), layouts);
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp = TempStore::new();
        assert!(!temp.dir.exists());
        temp.store.save(&sample_layouts()).unwrap();
        assert!(temp.store.path().exists());
    }

    #[test]
    fn unchanged_save_is_skipped() {
        let temp = TempStore::new();
        let layouts = sample_layouts();
        assert!(temp.store.save(&layouts).unwrap());
        assert!(!temp.store.save(&layouts).unwrap());

        let renamed = vec![layouts[0].renamed("Saved 2")];
        assert!(temp.store.save(&renamed).unwrap());
    }

    #[test]
    fn all_layouts_puts_builtins_first() {
        let temp = TempStore::new();
        temp.store.save(&sample_layouts()).unwrap();

        let all = temp.store.all_layouts();
        let builtins = presets::builtin_layouts();
        assert_eq!(all.len(), builtins.len() + 1);
        assert_eq!(all[0].name, "Wide Center");
        assert_eq!(all.last().unwrap().name, "Saved");
    }

    #[test]
    fn empty_store_yields_only_builtins() {
        let temp = TempStore::new();
        assert_eq!(temp.store.all_layouts(), presets::builtin_layouts());
    }
}
