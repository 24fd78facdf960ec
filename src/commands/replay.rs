//! Replay command - drive a picker with a scripted command list

use crate::{
    GridpickError,
    catalog::{CatalogSource, Item, ItemCatalog, LocationStore},
    commands::{footer_line, grid_lines},
    output::OutputWriter,
    picker::{HostedPicker, PickerCommand, PickerConfig, PickerError, PickerHost, RenderInstruction},
};
use std::sync::Arc;

type Result<T> = std::result::Result<T, GridpickError>;

/// Host that prints every picker callback
struct ConsoleHost<'a> {
    output: &'a dyn OutputWriter,
    json: bool,
}

impl PickerHost for ConsoleHost<'_> {
    fn render(&mut self, view: &RenderInstruction) {
        if self.json {
            match serde_json::to_string(view) {
                Ok(line) => self.output.write(&line),
                Err(e) => self.output.error(&format!("Failed to encode render: {e}")),
            }
            return;
        }
        for line in grid_lines(view) {
            self.output.write(&line);
        }
        self.output.info(&footer_line(view));
    }

    fn on_confirm(&mut self, item: &Item) {
        self.output.success(&format!("Confirmed: {item}"));
    }

    fn on_cancel(&mut self) {
        self.output.info("Cancelled");
    }
}

/// Execute the replay command
///
/// Rejected commands are reported as warnings and the script continues, the
/// way a user would be re-prompted.
///
/// # Errors
/// Returns an error if the group cannot be loaded
pub fn execute(
    store: &LocationStore,
    group: &str,
    commands: &[PickerCommand],
    config: PickerConfig,
    json: bool,
    output: &dyn OutputWriter,
) -> Result<()> {
    let catalog = ItemCatalog::load(&CatalogSource::Store {
        store: store.clone(),
        group: group.to_string(),
    })?;

    let host = ConsoleHost { output, json };
    let mut picker = HostedPicker::open(config, Arc::new(catalog), host);

    for command in commands {
        log::debug!("replaying '{command}'");
        match picker.handle(command) {
            Ok(_) => {}
            Err(PickerError::NoSelection) => output.warning("Please select an item first"),
            Err(e) => output.warning(&format!("{command}: {e}")),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BASE_LOCATIONS, defaults};
    use crate::output::{MessageBuffer, MessageLevel, Notice};

    fn parse(script: &[&str]) -> Vec<PickerCommand> {
        script.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_replay_confirm() {
        let output = MessageBuffer::new();
        execute(
            &defaults::store(),
            BASE_LOCATIONS,
            &parse(&["select:Base 3", "confirm"]),
            PickerConfig::default(),
            false,
            &output,
        )
        .unwrap();

        assert_eq!(
            output.latest(),
            Some(Notice::new(MessageLevel::Success, "Confirmed: Base 3"))
        );
    }

    #[test]
    fn test_replay_warns_and_continues() {
        let output = MessageBuffer::new();
        execute(
            &defaults::store(),
            BASE_LOCATIONS,
            &parse(&["confirm", "cancel", "next"]),
            PickerConfig::default(),
            false,
            &output,
        )
        .unwrap();

        let warnings: Vec<String> = output
            .messages()
            .into_iter()
            .filter(|m| m.level == MessageLevel::Warning)
            .map(|m| m.text)
            .collect();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0], "Please select an item first");
        assert!(warnings[1].starts_with("next: Picker is not browsing"));
    }

    #[test]
    fn test_replay_json_renders() {
        let output = MessageBuffer::new();
        execute(
            &defaults::store(),
            BASE_LOCATIONS,
            &parse(&["select:Base 1"]),
            PickerConfig::default(),
            true,
            &output,
        )
        .unwrap();

        let renders: Vec<serde_json::Value> = output
            .messages()
            .iter()
            .map(|m| serde_json::from_str(&m.text).unwrap())
            .collect();
        assert_eq!(renders.len(), 2);
        assert_eq!(renders[0]["phase"], "browsing");
        assert_eq!(renders[1]["selected_name"], "Base 1");
        assert_eq!(renders[1]["visible_items"][0]["highlighted"], true);
        assert_eq!(renders[1]["page_label"], "Page 1 of 1");
    }
}
