//! Catalog-specific error types
//!
//! Loading a catalog can fail because the record store is unreadable, is not
//! valid JSON, lacks the requested group, or contains a record the picker
//! cannot display. None of these are fatal: callers fall back to a default
//! catalog through [`ItemCatalog::load_or`](super::ItemCatalog::load_or).

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading items from a record store
#[derive(Debug, Error)]
pub enum LoadError {
    /// The store file could not be read
    #[error("Failed to read location store {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store content is not a valid group mapping
    #[error("Malformed location store: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The requested group is not present in the store
    #[error("Group '{0}' not found in location store")]
    MissingGroup(String),

    /// A record in the group has a blank name
    #[error("Record {index} in group '{group}' has an empty name")]
    EmptyName { group: String, index: usize },
}

/// Result type alias for catalog loading
pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
