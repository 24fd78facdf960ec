//! Picker controller state machine
//!
//! ```text
//! EMPTY ──load──▶ BROWSING ──confirm (with selection)──▶ CONFIRMED
//!                   │  ▲
//!                   │  └── select / page_next / page_prev / reload
//!                   └──────────cancel──────────────────▶ CANCELLED
//! ```
//!
//! Every transition that changes what the user sees returns a fresh
//! [`RenderInstruction`]; the controller never touches widgets itself.

use super::error::{PickerError, Result};
use super::types::{PickerConfig, PickerPhase, RenderInstruction, VisibleItem};
use crate::catalog::{Item, ItemCatalog};
use crate::paginate::{GridCell, Paginator, cell_index, grid_cell};
use crate::selection::SelectionState;
use std::sync::Arc;

/// Paginated single-selection picker over a shared catalog
#[derive(Debug, Clone)]
pub struct PickerController {
    config: PickerConfig,
    catalog: Option<Arc<ItemCatalog>>,
    paginator: Paginator,
    selection: SelectionState,
    phase: PickerPhase,
    confirmed: Option<Item>,
}

impl Default for PickerController {
    fn default() -> Self {
        Self::new(PickerConfig::default())
    }
}

impl PickerController {
    /// Create a picker with no catalog
    #[must_use]
    pub fn new(config: PickerConfig) -> Self {
        Self {
            paginator: Paginator::new(config.page_size),
            config,
            catalog: None,
            selection: SelectionState::new(),
            phase: PickerPhase::Empty,
            confirmed: None,
        }
    }

    /// Create a picker and immediately load `catalog`
    #[must_use]
    pub fn with_catalog(config: PickerConfig, catalog: Arc<ItemCatalog>) -> Self {
        let mut picker = Self::new(config);
        picker.load(catalog);
        picker
    }

    #[must_use]
    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }

    #[must_use]
    pub const fn phase(&self) -> PickerPhase {
        self.phase
    }

    #[must_use]
    pub const fn selection(&self) -> &SelectionState {
        &self.selection
    }

    #[must_use]
    pub const fn paginator(&self) -> Paginator {
        self.paginator
    }

    #[must_use]
    pub fn catalog(&self) -> Option<&Arc<ItemCatalog>> {
        self.catalog.as_ref()
    }

    /// The item emitted by the last successful confirm
    #[must_use]
    pub const fn confirmed_item(&self) -> Option<&Item> {
        self.confirmed.as_ref()
    }

    /// The selected item, resolved against the loaded catalog
    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        let id = self.selection.selected_id()?;
        self.catalog.as_ref()?.get(id)
    }

    fn items(&self) -> &[Item] {
        self.catalog.as_ref().map_or(&[], |c| c.items())
    }

    fn ensure_browsing(&self) -> Result<()> {
        if self.phase == PickerPhase::Browsing {
            Ok(())
        } else {
            Err(PickerError::NotBrowsing(self.phase))
        }
    }

    /// Start a fresh interaction over `catalog`: first page, nothing selected
    pub fn load(&mut self, catalog: Arc<ItemCatalog>) -> RenderInstruction {
        log::debug!("picker loaded {} items", catalog.len());
        self.catalog = Some(catalog);
        self.paginator = self.paginator.reset();
        self.selection = self.selection.clear();
        self.phase = PickerPhase::Browsing;
        self.confirmed = None;
        self.render()
    }

    /// Swap in a new catalog, keeping the current page if it still exists
    ///
    /// The selection is cleared since ids from the old catalog are stale.
    pub fn reload(&mut self, catalog: Arc<ItemCatalog>) -> RenderInstruction {
        let len = catalog.len();
        log::debug!(
            "picker reloaded {len} items (page {} before clamp)",
            self.paginator.current_page()
        );
        self.catalog = Some(catalog);
        self.paginator = self.paginator.clamped(len);
        self.selection = self.selection.clear();
        self.phase = PickerPhase::Browsing;
        self.confirmed = None;
        self.render()
    }

    /// Toggle selection of `item`
    ///
    /// # Errors
    ///
    /// Returns `NotBrowsing` outside the browsing phase and `UnknownItem` if
    /// `item` does not belong to the loaded catalog.
    pub fn select(&mut self, item: &Item) -> Result<RenderInstruction> {
        self.ensure_browsing()?;
        if !self.catalog.as_ref().is_some_and(|c| c.contains(item)) {
            return Err(PickerError::UnknownItem(item.name().to_string()));
        }
        self.selection = self.selection.click(item);
        log::debug!(
            "selection now {:?}",
            self.selection.selected_name().unwrap_or("<none>")
        );
        Ok(self.render())
    }

    /// Toggle selection of the first item named `name`
    ///
    /// # Errors
    ///
    /// See [`Self::select`].
    pub fn select_by_name(&mut self, name: &str) -> Result<RenderInstruction> {
        self.ensure_browsing()?;
        let item = self
            .catalog
            .as_ref()
            .and_then(|c| c.find_by_name(name))
            .cloned()
            .ok_or_else(|| PickerError::UnknownItem(name.to_string()))?;
        self.select(&item)
    }

    /// Toggle selection of the button at `row`/`column` on the current page
    ///
    /// # Errors
    ///
    /// Returns `NotBrowsing` outside the browsing phase and `EmptyCell` if no
    /// button sits at that position.
    pub fn select_cell(&mut self, row: usize, column: usize) -> Result<RenderInstruction> {
        self.ensure_browsing()?;
        let empty = PickerError::EmptyCell { row, column };
        let index = cell_index(GridCell { row, column }, self.config.columns).ok_or(empty.clone())?;
        let item = self
            .paginator
            .current_window(self.items())
            .get(index)
            .cloned()
            .ok_or(empty)?;
        self.select(&item)
    }

    /// Show the next page; a no-op on the last page
    ///
    /// # Errors
    ///
    /// Returns `NotBrowsing` outside the browsing phase.
    pub fn page_next(&mut self) -> Result<RenderInstruction> {
        self.ensure_browsing()?;
        self.paginator = self.paginator.next(self.items().len());
        Ok(self.render())
    }

    /// Show the previous page; a no-op on the first page
    ///
    /// # Errors
    ///
    /// Returns `NotBrowsing` outside the browsing phase.
    pub fn page_prev(&mut self) -> Result<RenderInstruction> {
        self.ensure_browsing()?;
        self.paginator = self.paginator.prev(self.items().len());
        Ok(self.render())
    }

    /// Finish the interaction with the selected item
    ///
    /// # Errors
    ///
    /// Returns `NoSelection` (phase unchanged) if nothing is selected, and
    /// `NotBrowsing` if the interaction already finished.
    pub fn confirm(&mut self) -> Result<Item> {
        if self.phase.is_terminal() {
            return Err(PickerError::NotBrowsing(self.phase));
        }
        let item = self.selected_item().cloned().ok_or(PickerError::NoSelection)?;
        log::debug!("picker confirmed '{}'", item.name());
        self.phase = PickerPhase::Confirmed;
        self.confirmed = Some(item.clone());
        Ok(item)
    }

    /// Abandon the interaction
    ///
    /// Returns `true` if the picker moved to `Cancelled`, `false` if it had
    /// already finished.
    pub fn cancel(&mut self) -> bool {
        if self.phase.is_terminal() {
            return false;
        }
        log::debug!("picker cancelled");
        self.phase = PickerPhase::Cancelled;
        true
    }

    /// Describe the current state for the host to repaint
    #[must_use]
    pub fn render(&self) -> RenderInstruction {
        let items = self.items();
        let len = items.len();
        let pager = self.paginator.clamped(len);

        let visible_items = pager
            .current_window(items)
            .iter()
            .enumerate()
            .map(|(i, item)| VisibleItem {
                item: item.clone(),
                cell: grid_cell(i, self.config.columns),
                highlighted: self.selection.is_selected(item),
            })
            .collect();

        let selected_name = self.selection.selected_name().map(str::to_string);
        let status_text = selected_name
            .clone()
            .unwrap_or_else(|| self.config.prompt.clone());

        RenderInstruction {
            visible_items,
            selected_name,
            status_text,
            has_prev: pager.has_prev(len),
            has_next: pager.has_next(len),
            page_label: pager.page_label(len),
            total_pages: pager.total_pages(len),
            item_count: len,
            confirm_enabled: self.phase == PickerPhase::Browsing && !self.selection.is_empty(),
            phase: self.phase,
        }
    }
}
