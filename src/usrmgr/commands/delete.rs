use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Removes the record with `key`. Callers confirm with the user first.
pub fn run<S: DataStore>(store: &mut S, key: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if let Some(record) = store.delete_record(key)? {
        tracing::debug!(%key, "record deleted");
        result.add_message(CmdMessage::success(format!("User deleted: {}", record.name)));
        result.affected_records.push(record);
    } else {
        tracing::debug!(%key, "delete skipped, no such record");
    }
    Ok(result)
}
