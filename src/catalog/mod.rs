//! Item catalogs
//!
//! An [`ItemCatalog`] is the full ordered set of selectable items for one
//! picker. It is loaded once from a [`CatalogSource`], never mutated in place,
//! and replaced wholesale on reload. Catalogs are shared read-only between
//! pickers through `Arc<ItemCatalog>`.
//!
//! Each loaded [`Item`] gets a synthetic [`ItemId`] equal to its position in
//! the group, so duplicate display names remain distinguishable.
//!
//! # Examples
//!
//! ```
//! use gridpick::catalog::{CatalogSource, ItemCatalog, defaults};
//!
//! let source = CatalogSource::File {
//!     path: "/does/not/exist.json".into(),
//!     group: "Delivery_Location".into(),
//! };
//! let catalog = ItemCatalog::load_or(&source, || {
//!     ItemCatalog::from_records("Delivery_Location", &defaults::delivery_locations())
//! });
//! assert_eq!(catalog.len(), 6);
//! ```

pub mod defaults;
pub mod error;
pub mod store;
pub mod types;

pub use error::LoadError;
pub use store::{BASE_LOCATIONS, DEFAULT_BASE_LOCATION, DELIVERY_LOCATIONS, LocationStore};
pub use types::{Item, ItemId, LocationRecord};

use error::Result;
use std::path::PathBuf;

/// Where a catalog's records come from
#[derive(Debug, Clone)]
pub enum CatalogSource {
    /// A group inside a store file on disk
    File { path: PathBuf, group: String },

    /// A group inside an already-parsed store
    Store { store: LocationStore, group: String },

    /// Records supplied directly by the caller
    Records {
        group: String,
        records: Vec<LocationRecord>,
    },
}

impl CatalogSource {
    /// Name of the group this source reads
    #[must_use]
    pub fn group(&self) -> &str {
        match self {
            Self::File { group, .. } | Self::Store { group, .. } | Self::Records { group, .. } => {
                group
            }
        }
    }
}

/// Ordered, immutable set of items for one picker
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    /// Build a catalog from raw records, assigning ids by position
    ///
    /// # Errors
    ///
    /// Returns `LoadError::EmptyName` if any record's name is blank.
    pub fn from_records(group: &str, records: &[LocationRecord]) -> Result<Self> {
        let items = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                if record.name.trim().is_empty() {
                    return Err(LoadError::EmptyName {
                        group: group.to_string(),
                        index,
                    });
                }
                Ok(Item::new(
                    ItemId(index),
                    record.name.clone(),
                    record.coordinates.clone(),
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { items })
    }

    /// Load a catalog from a source
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the source is unreadable, malformed, lacks the
    /// group, or holds a record with an empty name.
    pub fn load(source: &CatalogSource) -> Result<Self> {
        match source {
            CatalogSource::File { path, group } => {
                let store = LocationStore::open(path)?;
                Self::from_records(group, store.group(group)?)
            }
            CatalogSource::Store { store, group } => Self::from_records(group, store.group(group)?),
            CatalogSource::Records { group, records } => Self::from_records(group, records),
        }
    }

    /// Load a catalog, falling back to `default` on any load failure
    ///
    /// The failure is logged and otherwise swallowed; the end user sees the
    /// default items instead.
    pub fn load_or<F>(source: &CatalogSource, default: F) -> Self
    where
        F: FnOnce() -> Result<Self>,
    {
        match Self::load(source) {
            Ok(catalog) => {
                log::debug!(
                    "loaded {} items from group '{}'",
                    catalog.len(),
                    source.group()
                );
                catalog
            }
            Err(e) => {
                log::info!("{e}; using default items for '{}'", source.group());
                default().unwrap_or_else(|e| {
                    log::warn!("default items for '{}' rejected: {e}", source.group());
                    Self::default()
                })
            }
        }
    }

    /// Read-only view of all items, in load order
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// First item with the given display name
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Item with the given id
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.0).filter(|item| item.id() == id)
    }

    /// Whether `item` is a member of this catalog (same id and name)
    #[must_use]
    pub fn contains(&self, item: &Item) -> bool {
        self.get(item.id()).is_some_and(|own| own == item)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
