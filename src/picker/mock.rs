//! Recording host for testing

use super::traits::PickerHost;
use super::types::RenderInstruction;
use crate::catalog::Item;

/// Everything a [`RecordingHost`] was told, in order
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Rendered(RenderInstruction),
    Confirmed(Item),
    Cancelled,
}

/// Host that records every callback instead of drawing anything
///
/// Useful for testing without a UI toolkit
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    events: Vec<HostEvent>,
}

impl RecordingHost {
    #[must_use]
    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// All render instructions received, oldest first
    #[must_use]
    pub fn renders(&self) -> Vec<&RenderInstruction> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Rendered(view) => Some(view),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn last_render(&self) -> Option<&RenderInstruction> {
        self.renders().pop()
    }

    #[must_use]
    pub fn confirmed(&self) -> Vec<&Item> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Confirmed(item) => Some(item),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn cancel_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, HostEvent::Cancelled))
            .count()
    }
}

impl PickerHost for RecordingHost {
    fn render(&mut self, view: &RenderInstruction) {
        self.events.push(HostEvent::Rendered(view.clone()));
    }

    fn on_confirm(&mut self, item: &Item) {
        self.events.push(HostEvent::Confirmed(item.clone()));
    }

    fn on_cancel(&mut self) {
        self.events.push(HostEvent::Cancelled);
    }
}
