//! Groups command - list the groups of the location store

use crate::{GridpickError, catalog::LocationStore, output::OutputWriter};

type Result<T> = std::result::Result<T, GridpickError>;

/// Execute the groups command
///
/// # Errors
/// Returns an error if a group cannot be read from the store
pub fn execute(store: &LocationStore, output: &dyn OutputWriter) -> Result<()> {
    let groups = store.groups();

    if groups.is_empty() {
        output.info("No groups found in location store.");
        return Ok(());
    }

    output.info("Groups in location store:");
    for group in groups {
        let count = store.group(group)?.len();
        output.write(&format!("{group} ({count})"));
    }
    Ok(())
}
