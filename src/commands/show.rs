//! Show command - print one page of a group as a grid

use crate::{
    GridpickError,
    catalog::{CatalogSource, ItemCatalog, LocationStore},
    commands::{footer_line, grid_lines},
    output::OutputWriter,
    picker::{PickerConfig, PickerController},
};
use std::sync::Arc;

type Result<T> = std::result::Result<T, GridpickError>;

/// Execute the show command
///
/// `page` is one-based; pages past the end show the last page.
///
/// # Errors
/// Returns an error if the group cannot be loaded
pub fn execute(
    store: &LocationStore,
    group: &str,
    page: usize,
    config: PickerConfig,
    output: &dyn OutputWriter,
) -> Result<()> {
    let catalog = ItemCatalog::load(&CatalogSource::Store {
        store: store.clone(),
        group: group.to_string(),
    })?;

    let mut picker = PickerController::with_catalog(config, Arc::new(catalog));
    let mut view = picker.render();
    for _ in 1..page {
        if !view.has_next {
            break;
        }
        view = picker.page_next()?;
    }

    if view.visible_items.is_empty() {
        output.info(&format!("No items in group '{group}'."));
        return Ok(());
    }

    for line in grid_lines(&view) {
        output.write(&line);
    }
    output.info(&footer_line(&view));
    Ok(())
}
