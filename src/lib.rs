//! Gridpick - paginated grid picker for a delivery robot kiosk
//!
//! This library provides the selection state machine behind the kiosk's
//! button grids: a catalog of named locations, page windows over it, a
//! single toggled selection, and a controller that turns every user action
//! into an explicit render instruction. It does not draw anything.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod delivery;
pub mod output;
pub mod paginate;
pub mod picker;
pub mod selection;
pub mod tasks;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum GridpickError {
    /// Location store could not be loaded
    #[error("Load error: {0}")]
    LoadError(#[from] catalog::LoadError),
    /// A picker transition was rejected
    #[error("Picker error: {0}")]
    PickerError(#[from] picker::PickerError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Request could not be serialized
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
}
