//! Delivery kiosk screen
//!
//! The delivery screen is made of two pickers sharing one store:
//!
//! - the main grid over `Delivery_Location`, whose selection drives the
//!   status label and the start button
//! - a popup grid over `Base_Locations`, opened either from the base-mode
//!   button or the return-location edit button; confirming it changes the
//!   robot's return location
//!
//! The return location starts as the first entry of `Default_Base_Loc`.
//! Starting a delivery produces a [`DeliveryRequest`] for the robot
//! controller.

use crate::catalog::{
    BASE_LOCATIONS, DEFAULT_BASE_LOCATION, DELIVERY_LOCATIONS, Item, ItemCatalog, LoadError,
    LocationRecord, LocationStore, defaults,
};
use crate::output::Notice;
use crate::picker::{
    PickerCommand, PickerConfig, PickerController, PickerError, PickerOutcome, PickerPhase,
    RenderInstruction,
};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Label of the return-location button when no base is known
pub const RETURN_PLACEHOLDER: &str = "Return to Base";

/// Warning shown when starting without a table
pub const SELECT_FIRST_WARNING: &str = "Please select a location first";

/// Which button opened the base-location popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    BaseMode,
    ReturnLocation,
}

impl PopupKind {
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::BaseMode => "Select Base Location",
            Self::ReturnLocation => "Select Return Location",
        }
    }

    fn confirmation(self, item: &Item) -> Notice {
        match self {
            Self::BaseMode => Notice::info(format!("Base location set to: {item}")),
            Self::ReturnLocation => Notice::info(format!("Return location set to: {item}")),
        }
    }
}

/// Request handed to the robot controller when a delivery starts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryRequest {
    pub location: Item,
    pub delivery_type: &'static str,
    pub return_location: Option<Item>,
}

/// Result of a command sent to the main grid
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenOutcome {
    /// Grid changed; repaint it
    Render(RenderInstruction),
    /// A delivery was started; the grid is ready for the next one
    Started(DeliveryRequest),
    /// The user left the screen; the grid was reset
    Left,
}

/// Result of a command sent to the popup
#[derive(Debug, Clone, PartialEq)]
pub enum PopupOutcome {
    /// Popup still open; repaint it
    Render(RenderInstruction),
    /// Popup closed; show this notice if any
    Closed(Option<Notice>),
}

#[derive(Debug)]
struct Popup {
    kind: PopupKind,
    picker: PickerController,
}

/// State of the delivery screen
#[derive(Debug)]
pub struct DeliveryScreen {
    main: PickerController,
    bases: Arc<ItemCatalog>,
    popup_config: PickerConfig,
    popup: Option<Popup>,
    return_location: Option<Item>,
}

impl DeliveryScreen {
    /// Build the screen from a parsed store
    ///
    /// Missing delivery or base groups fall back to the built-in defaults. A
    /// missing `Default_Base_Loc` group leaves the return location unset.
    #[must_use]
    pub fn new(store: &LocationStore, main_config: PickerConfig, popup_config: PickerConfig) -> Self {
        let deliveries = group_catalog(store, DELIVERY_LOCATIONS).unwrap_or_else(|e| {
            log::info!("{e}; using built-in delivery locations");
            builtin(DELIVERY_LOCATIONS, &defaults::delivery_locations())
        });
        let bases = group_catalog(store, BASE_LOCATIONS).unwrap_or_else(|e| {
            log::info!("{e}; using built-in base locations");
            builtin(BASE_LOCATIONS, &defaults::base_locations())
        });
        let return_location = group_catalog(store, DEFAULT_BASE_LOCATION)
            .ok()
            .and_then(|c| c.items().first().cloned());

        Self {
            main: PickerController::with_catalog(main_config, Arc::new(deliveries)),
            bases: Arc::new(bases),
            popup_config,
            popup: None,
            return_location,
        }
    }

    /// Build the screen from a store file, using built-in data if it is unusable
    #[must_use]
    pub fn open(path: &Path, main_config: PickerConfig, popup_config: PickerConfig) -> Self {
        let store = LocationStore::open(path).unwrap_or_else(|e| {
            log::info!("{e}; using built-in locations");
            defaults::store()
        });
        Self::new(&store, main_config, popup_config)
    }

    /// The main delivery-location picker
    #[must_use]
    pub const fn picker(&self) -> &PickerController {
        &self.main
    }

    #[must_use]
    pub fn render(&self) -> RenderInstruction {
        self.main.render()
    }

    /// Apply a command to the main grid
    ///
    /// `confirm` runs [`Self::start_delivery`] and `cancel` runs
    /// [`Self::leave`]; everything else goes to the grid's picker.
    ///
    /// # Errors
    ///
    /// Propagates the picker's error. A `confirm` with nothing selected
    /// returns `PickerError::NoSelection`.
    pub fn handle(&mut self, command: &PickerCommand) -> Result<ScreenOutcome, PickerError> {
        match command {
            PickerCommand::Confirm => self.start_delivery().map(ScreenOutcome::Started),
            PickerCommand::Cancel => {
                self.leave();
                Ok(ScreenOutcome::Left)
            }
            _ => match self.main.dispatch(command)? {
                PickerOutcome::Render(view) => Ok(ScreenOutcome::Render(view)),
                _ => Ok(ScreenOutcome::Render(self.main.render())),
            },
        }
    }

    /// Leave the screen: close any popup and reset the grid to its first page
    pub fn leave(&mut self) {
        self.popup = None;
        if let Some(catalog) = self.main.catalog().cloned() {
            self.main.load(catalog);
        }
    }

    #[must_use]
    pub const fn return_location(&self) -> Option<&Item> {
        self.return_location.as_ref()
    }

    /// Text of the return-location button
    #[must_use]
    pub fn return_label(&self) -> &str {
        self.return_location
            .as_ref()
            .map_or(RETURN_PLACEHOLDER, Item::name)
    }

    /// Start a delivery to the selected table
    ///
    /// The grid starts a fresh session on the same page afterwards, so the
    /// screen can start another delivery.
    ///
    /// # Errors
    ///
    /// Returns `PickerError::NoSelection` if no table is selected; show
    /// [`SELECT_FIRST_WARNING`] in that case.
    pub fn start_delivery(&mut self) -> Result<DeliveryRequest, PickerError> {
        let location = self.main.confirm()?;
        if let Some(catalog) = self.main.catalog().cloned() {
            self.main.reload(catalog);
        }
        log::info!(
            "delivery to '{}' (return: {})",
            location.name(),
            self.return_label()
        );
        Ok(DeliveryRequest {
            location,
            delivery_type: "delivery",
            return_location: self.return_location.clone(),
        })
    }

    /// Open the base-location popup on its first page
    pub fn open_popup(&mut self, kind: PopupKind) -> RenderInstruction {
        let config = self.popup_config.clone().with_prompt(kind.title());
        let picker = PickerController::with_catalog(config, Arc::clone(&self.bases));
        let view = picker.render();
        self.popup = Some(Popup { kind, picker });
        view
    }

    #[must_use]
    pub fn popup_kind(&self) -> Option<PopupKind> {
        self.popup.as_ref().map(|p| p.kind)
    }

    /// `"Page n of m (k locations)"` for the open popup
    #[must_use]
    pub fn popup_page_label(&self) -> Option<String> {
        self.popup.as_ref().map(|p| {
            let view = p.picker.render();
            format!("{} ({} locations)", view.page_label, view.item_count)
        })
    }

    /// Send a command to the open popup
    ///
    /// Confirming sets the return location and closes the popup; cancelling
    /// closes it without changes.
    ///
    /// # Errors
    ///
    /// Returns `NotBrowsing(Empty)` when no popup is open, and otherwise
    /// propagates the popup picker's error (the popup stays open).
    pub fn handle_popup(&mut self, command: &PickerCommand) -> Result<PopupOutcome, PickerError> {
        let popup = self
            .popup
            .as_mut()
            .ok_or(PickerError::NotBrowsing(PickerPhase::Empty))?;

        match popup.picker.dispatch(command)? {
            PickerOutcome::Render(view) => Ok(PopupOutcome::Render(view)),
            PickerOutcome::Confirmed(item) => {
                let notice = popup.kind.confirmation(&item);
                log::debug!("return location now '{}'", item.name());
                self.return_location = Some(item);
                self.popup = None;
                Ok(PopupOutcome::Closed(Some(notice)))
            }
            PickerOutcome::Cancelled | PickerOutcome::Ignored => {
                self.popup = None;
                Ok(PopupOutcome::Closed(None))
            }
        }
    }
}

fn group_catalog(store: &LocationStore, group: &str) -> Result<ItemCatalog, LoadError> {
    ItemCatalog::from_records(group, store.group(group)?)
}

fn builtin(group: &str, records: &[LocationRecord]) -> ItemCatalog {
    ItemCatalog::from_records(group, records).unwrap_or_else(|e| {
        log::warn!("built-in locations for '{group}' rejected: {e}");
        ItemCatalog::default()
    })
}

/// User-facing notice for a failed start
#[must_use]
pub fn start_failure_notice(error: &PickerError) -> Notice {
    match error {
        PickerError::NoSelection => Notice::warning(SELECT_FIRST_WARNING),
        other => Notice::warning(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::numbered_records;

    fn screen() -> DeliveryScreen {
        DeliveryScreen::new(&defaults::store(), PickerConfig::default(), PickerConfig::default())
    }

    #[test]
    fn test_defaults_loaded() {
        let screen = screen();
        assert_eq!(screen.render().item_count, 6);
        assert_eq!(screen.return_label(), "Base 1");
    }

    #[test]
    fn test_missing_groups_fall_back() {
        let store = LocationStore::default();
        let screen = DeliveryScreen::new(&store, PickerConfig::default(), PickerConfig::default());
        assert_eq!(screen.render().item_count, 6);
        assert!(screen.return_location().is_none());
        assert_eq!(screen.return_label(), RETURN_PLACEHOLDER);
    }

    #[test]
    fn test_start_without_selection_warns() {
        let mut screen = screen();
        let err = screen.start_delivery().unwrap_err();
        assert_eq!(err, PickerError::NoSelection);
        assert_eq!(
            start_failure_notice(&err),
            Notice::warning(SELECT_FIRST_WARNING)
        );
        assert_eq!(screen.picker().phase(), PickerPhase::Browsing);
    }

    #[test]
    fn test_start_delivery_request() {
        let mut screen = screen();
        screen
            .handle(&PickerCommand::Select("Table 4".into()))
            .unwrap();
        let request = screen.start_delivery().unwrap();

        assert_eq!(request.location.name(), "Table 4");
        assert_eq!(request.delivery_type, "delivery");
        assert_eq!(request.return_location.as_ref().map(Item::name), Some("Base 1"));

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["location"]["cordinates"], serde_json::json!([0.0, 1.0]));
        assert_eq!(json["return_location"]["name"], "Base 1");
    }

    #[test]
    fn test_popup_sets_return_location() {
        let mut screen = screen();
        let view = screen.open_popup(PopupKind::ReturnLocation);
        assert_eq!(view.status_text, "Select Return Location");
        assert_eq!(
            screen.popup_page_label().as_deref(),
            Some("Page 1 of 1 (3 locations)")
        );

        screen
            .handle_popup(&PickerCommand::Select("Base 3".into()))
            .unwrap();
        let outcome = screen.handle_popup(&PickerCommand::Confirm).unwrap();

        assert_eq!(
            outcome,
            PopupOutcome::Closed(Some(Notice::info("Return location set to: Base 3")))
        );
        assert_eq!(screen.return_label(), "Base 3");
        assert!(screen.popup_kind().is_none());
    }

    #[test]
    fn test_base_mode_popup_message() {
        let mut screen = screen();
        screen.open_popup(PopupKind::BaseMode);
        screen.handle_popup(&"cell:0,1".parse().unwrap()).unwrap();
        let outcome = screen.handle_popup(&PickerCommand::Confirm).unwrap();
        assert_eq!(
            outcome,
            PopupOutcome::Closed(Some(Notice::info("Base location set to: Base 2")))
        );
    }

    #[test]
    fn test_popup_cancel_keeps_return_location() {
        let mut screen = screen();
        screen.open_popup(PopupKind::ReturnLocation);
        screen
            .handle_popup(&PickerCommand::Select("Base 2".into()))
            .unwrap();
        let outcome = screen.handle_popup(&PickerCommand::Cancel).unwrap();
        assert_eq!(outcome, PopupOutcome::Closed(None));
        assert_eq!(screen.return_label(), "Base 1");
    }

    #[test]
    fn test_popup_confirm_without_selection_stays_open() {
        let mut screen = screen();
        screen.open_popup(PopupKind::BaseMode);
        assert_eq!(
            screen.handle_popup(&PickerCommand::Confirm),
            Err(PickerError::NoSelection)
        );
        assert_eq!(screen.popup_kind(), Some(PopupKind::BaseMode));
    }

    #[test]
    fn test_popup_closed_rejects_commands() {
        let mut screen = screen();
        assert_eq!(
            screen.handle_popup(&PickerCommand::Next),
            Err(PickerError::NotBrowsing(PickerPhase::Empty))
        );
    }

    #[test]
    fn test_main_selection_survives_popup() {
        let mut screen = screen();
        screen
            .handle(&PickerCommand::Select("Table 2".into()))
            .unwrap();
        screen.open_popup(PopupKind::ReturnLocation);
        screen.handle_popup(&PickerCommand::Cancel).unwrap();
        assert_eq!(screen.render().selected_name.as_deref(), Some("Table 2"));
    }

    #[test]
    fn test_open_unreadable_file_uses_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let screen = DeliveryScreen::open(
            &dir.path().join("missing.json"),
            PickerConfig::default(),
            PickerConfig::default(),
        );
        assert_eq!(screen.render().item_count, 6);
        assert_eq!(screen.return_label(), "Base 1");
    }

    #[test]
    fn test_custom_store_with_many_tables() {
        let mut store = LocationStore::default();
        store.insert_group(DELIVERY_LOCATIONS, numbered_records("Table", 20));
        let mut screen = DeliveryScreen::new(&store, PickerConfig::default(), PickerConfig::default());
        let view = screen.render();
        assert!(view.has_next);
        assert_eq!(view.page_label, "Page 1 of 2");

        match screen.handle(&PickerCommand::Next).unwrap() {
            ScreenOutcome::Render(view) => assert_eq!(view.visible_items.len(), 4),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_confirm_command_starts_delivery() {
        let mut screen = screen();
        screen
            .handle(&PickerCommand::Select("Table 1".into()))
            .unwrap();

        match screen.handle(&PickerCommand::Confirm).unwrap() {
            ScreenOutcome::Started(request) => assert_eq!(request.location.name(), "Table 1"),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(screen.picker().phase(), PickerPhase::Browsing);
        assert!(screen.render().selected_name.is_none());

        assert_eq!(screen.start_delivery(), Err(PickerError::NoSelection));
        screen
            .handle(&PickerCommand::Select("Table 3".into()))
            .unwrap();
        assert_eq!(screen.start_delivery().unwrap().location.name(), "Table 3");
    }

    #[test]
    fn test_confirm_command_without_selection() {
        let mut screen = screen();
        assert_eq!(
            screen.handle(&PickerCommand::Confirm),
            Err(PickerError::NoSelection)
        );
        assert_eq!(screen.picker().phase(), PickerPhase::Browsing);
    }

    #[test]
    fn test_cancel_command_resets_grid() {
        let mut store = LocationStore::default();
        store.insert_group(DELIVERY_LOCATIONS, numbered_records("Table", 20));
        let mut screen = DeliveryScreen::new(&store, PickerConfig::default(), PickerConfig::default());
        screen.handle(&PickerCommand::Next).unwrap();
        screen
            .handle(&PickerCommand::Select("Table 18".into()))
            .unwrap();
        screen.open_popup(PopupKind::BaseMode);

        assert_eq!(screen.handle(&PickerCommand::Cancel).unwrap(), ScreenOutcome::Left);
        assert!(screen.popup_kind().is_none());
        let view = screen.render();
        assert_eq!(view.phase, PickerPhase::Browsing);
        assert_eq!(view.page_label, "Page 1 of 2");
        assert!(view.selected_name.is_none());

        screen
            .handle(&PickerCommand::Select("Table 2".into()))
            .unwrap();
        assert_eq!(screen.start_delivery().unwrap().location.name(), "Table 2");
    }
}
