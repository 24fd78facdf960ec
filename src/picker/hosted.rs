//! A picker bound to its host
//!
//! [`HostedPicker`] owns a [`PickerController`] and a [`PickerHost`]. Each
//! command is dispatched to the controller and its outcome forwarded to the
//! host: a repaint after every transition, then `on_confirm` or `on_cancel`
//! once the interaction ends.

use super::command::{PickerCommand, PickerOutcome};
use super::controller::PickerController;
use super::error::Result;
use super::traits::PickerHost;
use super::types::{PickerConfig, PickerPhase};
use crate::catalog::ItemCatalog;
use std::sync::Arc;

/// Controller plus the host it reports to
#[derive(Debug)]
pub struct HostedPicker<H: PickerHost> {
    picker: PickerController,
    host: H,
}

impl<H: PickerHost> HostedPicker<H> {
    /// Load `catalog` and paint the first page
    pub fn open(config: PickerConfig, catalog: Arc<ItemCatalog>, mut host: H) -> Self {
        let mut picker = PickerController::new(config);
        host.render(&picker.load(catalog));
        Self { picker, host }
    }

    /// Apply one command and notify the host
    ///
    /// Errors are returned to the caller without touching the host, so a
    /// failed confirm can be answered with a warning while the picker stays
    /// open.
    ///
    /// # Errors
    ///
    /// Propagates the controller's `PickerError`.
    pub fn handle(&mut self, command: &PickerCommand) -> Result<PickerPhase> {
        match self.picker.dispatch(command)? {
            PickerOutcome::Render(view) => self.host.render(&view),
            PickerOutcome::Confirmed(item) => {
                self.host.render(&self.picker.render());
                self.host.on_confirm(&item);
            }
            PickerOutcome::Cancelled => {
                self.host.render(&self.picker.render());
                self.host.on_cancel();
            }
            PickerOutcome::Ignored => {}
        }
        Ok(self.picker.phase())
    }

    #[must_use]
    pub const fn picker(&self) -> &PickerController {
        &self.picker
    }

    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Split back into controller and host
    #[must_use]
    pub fn into_parts(self) -> (PickerController, H) {
        (self.picker, self.host)
    }
}
