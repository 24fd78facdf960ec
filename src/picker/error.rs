//! Picker-specific error types
//!
//! All of these are recoverable. `NoSelection` is the one the end user sees:
//! the host shows a short warning and keeps the picker open.

use super::types::PickerPhase;
use thiserror::Error;

/// Errors raised by picker transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    /// Confirm was attempted with nothing selected
    #[error("No item selected")]
    NoSelection,

    /// The picker has no catalog or already finished its interaction
    #[error("Picker is not browsing (current phase: {0})")]
    NotBrowsing(PickerPhase),

    /// The item is not part of the loaded catalog
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// No item is placed at that grid position on the current page
    #[error("No item at row {row}, column {column}")]
    EmptyCell { row: usize, column: usize },

    /// A textual command could not be parsed
    #[error("Invalid picker command: {0}")]
    InvalidCommand(String),
}

/// Result type alias for picker operations
pub type Result<T> = std::result::Result<T, PickerError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
