//! Common types for the picker state machine

use crate::catalog::Item;
use crate::paginate::{DEFAULT_COLUMNS, DEFAULT_PAGE_SIZE, GridCell};
use serde::Serialize;
use std::fmt;
use std::num::NonZeroUsize;

/// Placeholder status text shown while nothing is selected
pub const DEFAULT_PROMPT: &str = "Select Table \n Number";

/// Lifecycle phase of one picker interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PickerPhase {
    /// No catalog loaded yet
    #[default]
    Empty,
    /// Catalog loaded, page displayed, zero or one item selected
    Browsing,
    /// Selection confirmed; terminal
    Confirmed,
    /// Interaction cancelled; terminal
    Cancelled,
}

impl PickerPhase {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Browsing => "browsing",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Confirmed | Self::Cancelled)
    }
}

impl fmt::Display for PickerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-picker layout and text settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    /// Buttons per page
    pub page_size: NonZeroUsize,
    /// Buttons per grid row
    pub columns: NonZeroUsize,
    /// Status text while nothing is selected
    pub prompt: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            columns: DEFAULT_COLUMNS,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl PickerConfig {
    #[must_use]
    pub const fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub const fn with_columns(mut self, columns: NonZeroUsize) -> Self {
        self.columns = columns;
        self
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}

/// One button on the current page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisibleItem {
    pub item: Item,
    pub cell: GridCell,
    pub highlighted: bool,
}

/// Everything the host needs to repaint the picker after a transition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderInstruction {
    /// Items on the current page with their grid placement
    pub visible_items: Vec<VisibleItem>,
    /// Name of the selected item (which may be on another page)
    pub selected_name: Option<String>,
    /// Selected item's name, or the prompt
    pub status_text: String,
    pub has_prev: bool,
    pub has_next: bool,
    /// `"Page {n} of {total}"`
    pub page_label: String,
    pub total_pages: usize,
    /// Size of the whole catalog
    pub item_count: usize,
    /// Whether the confirm/start action is enabled
    pub confirm_enabled: bool,
    pub phase: PickerPhase,
}

impl RenderInstruction {
    /// The highlighted button, if it is on the current page
    #[must_use]
    pub fn highlighted(&self) -> Option<&VisibleItem> {
        self.visible_items.iter().find(|v| v.highlighted)
    }

    /// Names of the visible items, in page order
    #[must_use]
    pub fn visible_names(&self) -> Vec<&str> {
        self.visible_items.iter().map(|v| v.item.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_display() {
        assert_eq!(PickerPhase::Browsing.to_string(), "browsing");
        assert_eq!(PickerPhase::default(), PickerPhase::Empty);
    }

    #[test]
    fn test_terminal_phases() {
        assert!(!PickerPhase::Empty.is_terminal());
        assert!(!PickerPhase::Browsing.is_terminal());
        assert!(PickerPhase::Confirmed.is_terminal());
        assert!(PickerPhase::Cancelled.is_terminal());
    }

    #[test]
    fn test_config_builder() {
        let config = PickerConfig::default()
            .with_page_size(NonZeroUsize::new(9).unwrap())
            .with_columns(NonZeroUsize::new(3).unwrap())
            .with_prompt("Pick a base");
        assert_eq!(config.page_size.get(), 9);
        assert_eq!(config.columns.get(), 3);
        assert_eq!(config.prompt, "Pick a base");
    }

    #[test]
    fn test_default_config_is_four_by_four() {
        let config = PickerConfig::default();
        assert_eq!(config.page_size.get(), 16);
        assert_eq!(config.columns.get(), 4);
    }
}
