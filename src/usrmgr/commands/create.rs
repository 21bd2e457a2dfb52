use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{RecordFields, UserRecord};
use crate::store::DataStore;
use chrono::Local;

use super::helpers::{ensure_valid, fresh_key};

pub fn run<S: DataStore>(store: &mut S, fields: RecordFields) -> Result<CmdResult> {
    ensure_valid(&fields)?;

    let key = fresh_key(store)?;
    let record = UserRecord::with_key(key, fields, Local::now().naive_local());
    store.save_record(&record)?;
    tracing::debug!(key = %record.key, name = %record.name, "record created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("User created: {}", record.name)));
    result.affected_records.push(record);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UsrmgrError;
    use crate::model::Sex;
    use crate::store::memory::InMemoryStore;
    use std::collections::HashSet;

    #[test]
    fn appends_with_unique_key() {
        let mut store = InMemoryStore::seeded();
        let fields = RecordFields::new("王五", Some(Sex::Male), Some(25));
        let first = run(&mut store, fields.clone()).unwrap();
        let second = run(&mut store, fields).unwrap();

        let records = store.list_records().unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[2].key, first.affected_records[0].key);

        let keys: HashSet<_> = records.iter().map(|r| r.key.clone()).collect();
        assert_eq!(keys.len(), 4);
        assert_ne!(first.affected_records[0].key, second.affected_records[0].key);
    }

    #[test]
    fn stamps_created_at_now() {
        let mut store = InMemoryStore::new();
        let before = Local::now().naive_local();
        let result = run(
            &mut store,
            RecordFields::new("王五", Some(Sex::Female), Some(1)),
        )
        .unwrap();
        assert!(result.affected_records[0].created_at >= before);
        assert_eq!(result.messages[0], CmdMessage::success("User created: 王五"));
    }

    #[test]
    fn rejects_invalid_fields() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, RecordFields::new("x", None, Some(5))).unwrap_err();
        assert!(matches!(err, UsrmgrError::Validation(_)));
        assert!(store.list_records().unwrap().is_empty());
    }
}
