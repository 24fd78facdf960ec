//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs against the loaded location store.

pub mod deliver;
pub mod groups;
pub mod replay;
pub mod show;

pub use deliver::execute as deliver;
pub use groups::execute as groups;
pub use replay::execute as replay;
pub use show::execute as show;

use crate::picker::RenderInstruction;
use colored::Colorize;

/// Text rows of a rendered page grid, highlighted item marked
#[must_use]
pub fn grid_lines(view: &RenderInstruction) -> Vec<String> {
    let width = view
        .visible_items
        .iter()
        .map(|v| v.item.name().chars().count())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<String> = Vec::new();
    for visible in &view.visible_items {
        let name = format!("{:<width$}", visible.item.name());
        let cell = if visible.highlighted {
            format!("[{}]", name.bold().green())
        } else {
            format!(" {name} ")
        };
        if visible.cell.column == 0 || lines.len() <= visible.cell.row {
            lines.push(cell);
        } else if let Some(line) = lines.last_mut() {
            line.push(' ');
            line.push_str(&cell);
        }
    }
    lines
}

/// Footer line: page label, navigation hints and status
#[must_use]
pub fn footer_line(view: &RenderInstruction) -> String {
    let prev = if view.has_prev { "<" } else { " " };
    let next = if view.has_next { ">" } else { " " };
    format!(
        "{prev} {} {next}  | {}",
        view.page_label,
        view.status_text.replace('\n', " ")
    )
}
