//! Explicit picker commands and their outcomes
//!
//! Every host event maps onto one [`PickerCommand`]. Feeding the same command
//! sequence to a fresh controller always reproduces the same outcomes, which
//! is what the `replay` subcommand and the tests rely on.
//!
//! Textual form (used on the command line):
//!
//! | Text              | Command                    |
//! |-------------------|----------------------------|
//! | `next`            | `PickerCommand::Next`      |
//! | `prev`            | `PickerCommand::Prev`      |
//! | `select:<name>`   | `PickerCommand::Select`    |
//! | `cell:<row>,<col>`| `PickerCommand::Cell`      |
//! | `confirm`         | `PickerCommand::Confirm`   |
//! | `cancel`          | `PickerCommand::Cancel`    |

use super::controller::PickerController;
use super::error::{PickerError, Result};
use super::types::RenderInstruction;
use crate::catalog::Item;
use std::fmt;
use std::str::FromStr;

/// One user action directed at a picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerCommand {
    Next,
    Prev,
    /// Toggle the first item with this name
    Select(String),
    /// Toggle the button at this grid position on the current page
    Cell { row: usize, column: usize },
    Confirm,
    Cancel,
}

/// What a dispatched command produced
#[derive(Debug, Clone, PartialEq)]
pub enum PickerOutcome {
    /// The picker is still browsing; repaint with this
    Render(RenderInstruction),
    /// The interaction finished with this item
    Confirmed(Item),
    /// The interaction was abandoned
    Cancelled,
    /// Cancel arrived after the interaction had already finished
    Ignored,
}

impl FromStr for PickerCommand {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || PickerError::InvalidCommand(s.to_string());

        match s {
            "next" | ">" => return Ok(Self::Next),
            "prev" | "<" => return Ok(Self::Prev),
            "confirm" => return Ok(Self::Confirm),
            "cancel" => return Ok(Self::Cancel),
            _ => {}
        }

        let (verb, arg) = s.split_once(':').ok_or_else(invalid)?;
        match verb.trim() {
            "select" if !arg.trim().is_empty() => Ok(Self::Select(arg.trim().to_string())),
            "cell" => {
                let (row, column) = arg.split_once(',').ok_or_else(invalid)?;
                Ok(Self::Cell {
                    row: row.trim().parse().map_err(|_| invalid())?,
                    column: column.trim().parse().map_err(|_| invalid())?,
                })
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for PickerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => write!(f, "next"),
            Self::Prev => write!(f, "prev"),
            Self::Select(name) => write!(f, "select:{name}"),
            Self::Cell { row, column } => write!(f, "cell:{row},{column}"),
            Self::Confirm => write!(f, "confirm"),
            Self::Cancel => write!(f, "cancel"),
        }
    }
}

impl PickerController {
    /// Apply one command
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying transition.
    pub fn dispatch(&mut self, command: &PickerCommand) -> Result<PickerOutcome> {
        let outcome = match command {
            PickerCommand::Next => PickerOutcome::Render(self.page_next()?),
            PickerCommand::Prev => PickerOutcome::Render(self.page_prev()?),
            PickerCommand::Select(name) => PickerOutcome::Render(self.select_by_name(name)?),
            PickerCommand::Cell { row, column } => {
                PickerOutcome::Render(self.select_cell(*row, *column)?)
            }
            PickerCommand::Confirm => PickerOutcome::Confirmed(self.confirm()?),
            PickerCommand::Cancel => {
                if self.cancel() {
                    PickerOutcome::Cancelled
                } else {
                    PickerOutcome::Ignored
                }
            }
        };
        Ok(outcome)
    }
}
