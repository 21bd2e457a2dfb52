use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordFields;
use crate::store::DataStore;

use super::helpers::ensure_valid;

/// Overwrites name, sex and age of the record with `key`. A missing key is a no-op.
pub fn run<S: DataStore>(store: &mut S, key: &str, fields: RecordFields) -> Result<CmdResult> {
    ensure_valid(&fields)?;

    let Some(mut record) = store.get_record(key)? else {
        tracing::debug!(%key, "update skipped, no such record");
        return Ok(CmdResult::default());
    };
    record.apply(fields);
    store.save_record(&record)?;
    tracing::debug!(%key, "record updated");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("User updated: {}", record.name)))
        .with_affected_records(vec![record]))
}
