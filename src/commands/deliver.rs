//! Deliver command - pick a table and emit the delivery request

use crate::{
    GridpickError,
    delivery::{DeliveryScreen, PopupKind, PopupOutcome, start_failure_notice},
    output::OutputWriter,
    picker::PickerCommand,
};

type Result<T> = std::result::Result<T, GridpickError>;

/// Execute the deliver command
///
/// When `return_to` is given, the return-location popup is driven first.
/// The request is printed as pretty JSON.
///
/// # Errors
/// Returns an error if a name is not in the store or the request cannot be encoded
pub fn execute(
    mut screen: DeliveryScreen,
    table: &str,
    return_to: Option<&str>,
    output: &dyn OutputWriter,
) -> Result<()> {
    if let Some(base) = return_to {
        screen.open_popup(PopupKind::ReturnLocation);
        screen.handle_popup(&PickerCommand::Select(base.to_string()))?;
        if let PopupOutcome::Closed(Some(notice)) = screen.handle_popup(&PickerCommand::Confirm)? {
            output.notify(&notice);
        }
    }

    screen.handle(&PickerCommand::Select(table.to_string()))?;
    let request = match screen.start_delivery() {
        Ok(request) => request,
        Err(e) => {
            output.notify(&start_failure_notice(&e));
            return Err(e.into());
        }
    };

    output.write(&serde_json::to_string_pretty(&request)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::defaults;
    use crate::output::{MessageBuffer, Notice};
    use crate::picker::{PickerConfig, PickerError};

    fn screen() -> DeliveryScreen {
        DeliveryScreen::new(&defaults::store(), PickerConfig::default(), PickerConfig::default())
    }

    #[test]
    fn test_deliver_with_default_return() {
        let output = MessageBuffer::new();
        execute(screen(), "Table 2", None, &output).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&output.latest().unwrap().text).unwrap();
        assert_eq!(json["location"]["name"], "Table 2");
        assert_eq!(json["delivery_type"], "delivery");
        assert_eq!(json["return_location"]["name"], "Base 1");
    }

    #[test]
    fn test_deliver_with_custom_return() {
        let output = MessageBuffer::new();
        execute(screen(), "Table 5", Some("Base 2"), &output).unwrap();

        let messages = output.messages();
        assert_eq!(messages[0], Notice::info("Return location set to: Base 2"));
        let json: serde_json::Value = serde_json::from_str(&messages[1].text).unwrap();
        assert_eq!(json["return_location"]["name"], "Base 2");
    }

    #[test]
    fn test_deliver_unknown_table() {
        let output = MessageBuffer::new();
        let err = execute(screen(), "Table 99", None, &output).unwrap_err();
        assert!(matches!(
            err,
            GridpickError::PickerError(PickerError::UnknownItem(ref name)) if name == "Table 99"
        ));
    }
}
