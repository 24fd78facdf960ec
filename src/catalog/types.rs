//! Item and record types
//!
//! - **`LocationRecord`**: one `{name, cordinates}` entry as stored on disk
//! - **`Item`**: a loaded, immutable record with a synthetic [`ItemId`]
//!
//! The store format predates this crate and spells the coordinate key
//! `cordinates`. Both spellings are read; `cordinates` is written.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used for records stored without a name
pub const UNKNOWN_NAME: &str = "Unknown";

/// Stable identifier assigned to an item when its catalog is loaded
///
/// The id is the item's position in the loaded group, so it is only meaningful
/// together with the catalog that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub usize);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single `{name, cordinates}` record as found in the location store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    #[serde(default = "unknown_name")]
    pub name: String,

    /// Planar point (2 values) or pose with orientation (6 values)
    #[serde(rename = "cordinates", alias = "coordinates", default)]
    pub coordinates: Vec<f64>,
}

fn unknown_name() -> String {
    UNKNOWN_NAME.to_string()
}

impl LocationRecord {
    /// Create a new record
    #[must_use]
    pub fn new(name: impl Into<String>, coordinates: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }
}

/// A selectable item: display name plus location payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    #[serde(skip)]
    id: ItemId,
    name: String,
    #[serde(rename = "cordinates")]
    location: Vec<f64>,
}

impl Item {
    /// Create a new item
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>, location: Vec<f64>) -> Self {
        Self {
            id,
            name: name.into(),
            location,
        }
    }

    #[must_use]
    pub const fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn location(&self) -> &[f64] {
        &self.location
    }

    /// Convert back into a storable record
    #[must_use]
    pub fn to_record(&self) -> LocationRecord {
        LocationRecord::new(self.name.clone(), self.location.clone())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
