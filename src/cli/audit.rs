//! Audit CLI command

use crate::error::TrackerResult;
use crate::storage::Storage;

/// Handle `quit audit`: print the most recent audit entries
pub fn handle_audit_command(storage: &Storage, limit: usize) -> TrackerResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
