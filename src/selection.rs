//! Single-item selection with toggle semantics
//!
//! Selection is keyed on [`ItemId`], not on the display name, so two items
//! that happen to share a name are still told apart. The name is carried
//! alongside for status text.

use crate::catalog::{Item, ItemId};

/// The currently selected item, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<(ItemId, String)>,
}

impl SelectionState {
    /// Empty selection
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// Clicking the selected item clears it; clicking any other item selects it
    #[must_use]
    pub fn click(&self, item: &Item) -> Self {
        if self.is_selected(item) {
            Self::new()
        } else {
            Self {
                selected: Some((item.id(), item.name().to_string())),
            }
        }
    }

    #[must_use]
    pub fn is_selected(&self, item: &Item) -> bool {
        self.selected_id() == Some(item.id())
    }

    #[must_use]
    pub const fn clear(&self) -> Self {
        Self::new()
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<ItemId> {
        self.selected.as_ref().map(|(id, _)| *id)
    }

    #[must_use]
    pub fn selected_name(&self) -> Option<&str> {
        self.selected.as_ref().map(|(_, name)| name.as_str())
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.selected.is_none()
    }
}
