//! Paginated single-selection picker
//!
//! This module composes an [`ItemCatalog`](crate::catalog::ItemCatalog), a
//! [`Paginator`](crate::paginate::Paginator) and a
//! [`SelectionState`](crate::selection::SelectionState) into the picker
//! interaction: load items, page through them, toggle one selection, then
//! confirm or cancel. It is independent of any widget toolkit.
//!
//! # Architecture
//!
//! - `controller`: the state machine ([`PickerController`])
//! - `command`: textual/explicit commands and [`PickerOutcome`]s
//! - `traits`: the [`PickerHost`] callbacks a UI layer implements
//! - `hosted`: [`HostedPicker`], controller plus host
//! - `mock`: [`RecordingHost`](mock::RecordingHost) for tests
//!
//! # Example
//!
//! ```
//! use gridpick::catalog::{ItemCatalog, defaults};
//! use gridpick::picker::{PickerConfig, PickerController, PickerError};
//! use std::sync::Arc;
//!
//! let catalog = ItemCatalog::from_records("t", &defaults::delivery_locations()).unwrap();
//! let mut picker = PickerController::with_catalog(PickerConfig::default(), Arc::new(catalog));
//!
//! assert_eq!(picker.confirm(), Err(PickerError::NoSelection));
//!
//! let view = picker.select_by_name("Table 2").unwrap();
//! assert!(view.confirm_enabled);
//! assert_eq!(picker.confirm().unwrap().name(), "Table 2");
//! ```

pub mod command;
pub mod controller;
pub mod error;
pub mod hosted;
pub mod mock;
pub mod traits;
pub mod types;

pub use command::{PickerCommand, PickerOutcome};
pub use controller::PickerController;
pub use error::PickerError;
pub use hosted::HostedPicker;
pub use traits::PickerHost;
pub use types::{DEFAULT_PROMPT, PickerConfig, PickerPhase, RenderInstruction, VisibleItem};
