//! Host-side callbacks for a picker

use super::types::RenderInstruction;
use crate::catalog::Item;

/// The UI layer driving a picker
///
/// Implementors repaint from each [`RenderInstruction`] and react to the end
/// of the interaction. [`HostedPicker`](super::HostedPicker) guarantees that
/// exactly one of `on_confirm`/`on_cancel` is called per interaction.
///
/// # Example
///
/// ```
/// use gridpick::catalog::Item;
/// use gridpick::picker::{PickerHost, RenderInstruction};
///
/// struct LabelOnly(String);
///
/// impl PickerHost for LabelOnly {
///     fn render(&mut self, view: &RenderInstruction) {
///         self.0 = view.page_label.clone();
///     }
///
///     fn on_confirm(&mut self, item: &Item) {
///         self.0 = format!("going to {item}");
///     }
/// }
/// ```
pub trait PickerHost {
    /// Repaint the picker
    fn render(&mut self, view: &RenderInstruction);

    /// The user confirmed `item`
    fn on_confirm(&mut self, item: &Item);

    /// The user closed the picker without confirming
    fn on_cancel(&mut self) {}
}
