//! Location record store
//!
//! The store is a JSON object keyed by logical group. Each group is an ordered
//! list of [`LocationRecord`]s:
//!
//! ```json
//! {
//!   "Delivery_Location": [{"name": "Table 1", "cordinates": [0.0, 0.0]}],
//!   "Base_Locations":    [{"name": "Base 1", "cordinates": [0, 0, 0, 0, 0, 1]}],
//!   "Default_Base_Loc":  [{"name": "Base 1", "cordinates": [0, 0, 0, 0, 0, 1]}]
//! }
//! ```
//!
//! The store is read-only from the picker's point of view.

use super::error::{LoadError, Result};
use super::types::LocationRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Group holding the main delivery destinations
pub const DELIVERY_LOCATIONS: &str = "Delivery_Location";

/// Group holding the robot's base/return locations
pub const BASE_LOCATIONS: &str = "Base_Locations";

/// Group whose first entry is the default return location
pub const DEFAULT_BASE_LOCATION: &str = "Default_Base_Loc";

/// In-memory view of a location store file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationStore {
    groups: BTreeMap<String, Vec<LocationRecord>>,
}

impl LocationStore {
    /// Read and parse a store file
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Unreadable` if the file cannot be read and
    /// `LoadError::Malformed` if it is not a group mapping.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parse a store from JSON text
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Malformed` if the text is not a group mapping.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Insert or replace a whole group
    pub fn insert_group(&mut self, group: impl Into<String>, records: Vec<LocationRecord>) {
        self.groups.insert(group.into(), records);
    }

    /// Names of all groups, sorted
    #[must_use]
    pub fn groups(&self) -> Vec<&str> {
        self.groups.keys().map(String::as_str).collect()
    }

    /// Records of one group
    ///
    /// # Errors
    ///
    /// Returns `LoadError::MissingGroup` if the store has no such group.
    pub fn group(&self, group: &str) -> Result<&[LocationRecord]> {
        self.groups
            .get(group)
            .map(Vec::as_slice)
            .ok_or_else(|| LoadError::MissingGroup(group.to_string()))
    }

    /// Serialize the store back to pretty JSON
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Malformed` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestStore;

    const SAMPLE: &str = r#"{
        "Delivery_Location": [
            {"name": "Table 1", "cordinates": [0.0, 0.0]},
            {"name": "Table 2", "cordinates": [1.0, 0.0]}
        ],
        "Base_Locations": [
            {"name": "Dock", "coordinates": [0, 0, 0, 0, 0, 1]}
        ]
    }"#;

    #[test]
    fn test_from_json_groups() {
        let store = LocationStore::from_json(SAMPLE).unwrap();
        assert_eq!(store.groups(), vec![BASE_LOCATIONS, DELIVERY_LOCATIONS]);
        assert_eq!(store.group(DELIVERY_LOCATIONS).unwrap().len(), 2);
        assert_eq!(store.group(BASE_LOCATIONS).unwrap()[0].name, "Dock");
    }

    #[test]
    fn test_missing_group() {
        let store = LocationStore::from_json(SAMPLE).unwrap();
        let err = store.group(DEFAULT_BASE_LOCATION).unwrap_err();
        assert!(matches!(err, LoadError::MissingGroup(ref g) if g == DEFAULT_BASE_LOCATION));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            LocationStore::from_json("[1, 2, 3]"),
            Err(LoadError::Malformed(_))
        ));
    }

    #[test]
    fn test_open_missing_file() {
        let file = TestStore::from_text(SAMPLE);
        let err = LocationStore::open(file.dir().join("absent.json")).unwrap_err();
        assert!(matches!(err, LoadError::Unreadable { .. }));
    }

    #[test]
    fn test_open_reads_file() {
        let file = TestStore::from_text(SAMPLE);
        let store = LocationStore::open(file.path()).unwrap();
        assert_eq!(store.group(DELIVERY_LOCATIONS).unwrap()[1].name, "Table 2");
    }

    #[test]
    fn test_to_json_writes_legacy_key() {
        let mut store = LocationStore::default();
        store.insert_group("G", vec![LocationRecord::new("A", vec![1.0])]);
        let json = store.to_json().unwrap();
        assert!(json.contains("\"cordinates\""));
        assert_eq!(LocationStore::from_json(&json).unwrap(), store);
    }
}
