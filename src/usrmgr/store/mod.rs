//! # Storage Layer
//!
//! The [`DataStore`] trait holds the canonical list of user records. Business
//! logic in `commands/` only talks to this trait, so it can be exercised against
//! any backend.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: an ordered `Vec` of records. Records are not
//!   persisted; a new session starts from the seed dataset.
//!
//! ## Ordering
//!
//! Backends must keep insertion order: `list_records` returns records in the
//! order they were first saved, and saving an existing key replaces the record
//! in place. The table's default order and the stability of its sorts depend
//! on this.

use crate::error::Result;
use crate::model::UserRecord;

pub mod memory;

/// Abstract interface for the canonical record list.
pub trait DataStore {
    /// Insert a record, or replace the record with the same key in place.
    fn save_record(&mut self, record: &UserRecord) -> Result<()>;

    /// Get a record by key.
    fn get_record(&self, key: &str) -> Result<Option<UserRecord>>;

    /// All records, in insertion order.
    fn list_records(&self) -> Result<Vec<UserRecord>>;

    /// Remove a record, returning it if it existed.
    fn delete_record(&mut self, key: &str) -> Result<Option<UserRecord>>;

    /// Drop every record and load `records` instead.
    fn replace_all(&mut self, records: Vec<UserRecord>) -> Result<()>;

    fn contains_key(&self, key: &str) -> Result<bool> {
        Ok(self.get_record(key)?.is_some())
    }
}
