//! Testing utilities for gridpick
//!
//! Helpers for building catalogs and store files in tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{ItemCatalog, LocationRecord, LocationStore};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// `count` planar records named `{prefix} 1..={count}`
#[must_use]
pub fn numbered_records(prefix: &str, count: usize) -> Vec<LocationRecord> {
    (1..=count)
        .map(|n| LocationRecord::new(format!("{prefix} {n}"), vec![n as f64, 0.0]))
        .collect()
}

/// Shared catalog of `count` numbered tables
///
/// # Panics
/// Panics if `prefix` is blank.
#[must_use]
pub fn numbered_catalog(prefix: &str, count: usize) -> Arc<ItemCatalog> {
    Arc::new(
        ItemCatalog::from_records("test", &numbered_records(prefix, count))
            .expect("numbered records have names"),
    )
}

/// Store file written into a temporary directory that is removed on drop
pub struct TestStore {
    dir: TempDir,
    path: PathBuf,
}

impl TestStore {
    /// Write `store` as JSON to a fresh temporary file
    ///
    /// # Panics
    /// Panics if the directory or file cannot be created.
    #[must_use]
    pub fn new(store: &LocationStore) -> Self {
        Self::from_text(&store.to_json().expect("store serializes"))
    }

    /// Write raw text, for malformed-store tests
    ///
    /// # Panics
    /// Panics if the directory or file cannot be created.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("locations.json");
        fs::write(&path, text).expect("Failed to write store file");
        Self { dir, path }
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    #[must_use]
    pub fn dir(&self) -> &std::path::Path {
        self.dir.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogSource, DELIVERY_LOCATIONS};
    use crate::delivery::DeliveryScreen;
    use crate::picker::PickerConfig;

    #[test]
    fn test_numbered_catalog() {
        let catalog = numbered_catalog("Table", 3);
        assert_eq!(catalog.items()[2].name(), "Table 3");
    }

    #[test]
    fn test_store_file_round_trip() {
        let mut store = LocationStore::default();
        store.insert_group(DELIVERY_LOCATIONS, numbered_records("Booth", 20));
        let file = TestStore::new(&store);

        let catalog = ItemCatalog::load(&CatalogSource::File {
            path: file.path().to_path_buf(),
            group: DELIVERY_LOCATIONS.to_string(),
        })
        .unwrap();
        assert_eq!(catalog.len(), 20);
        assert!(file.path().starts_with(file.dir()));
    }

    #[test]
    fn test_malformed_store_screen_uses_builtin() {
        let file = TestStore::from_text("{ broken");
        let screen = DeliveryScreen::open(file.path(), PickerConfig::default(), PickerConfig::default());
        assert_eq!(screen.render().visible_names()[0], "Table 1");
    }
}
