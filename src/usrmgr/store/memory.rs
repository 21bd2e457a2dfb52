use super::DataStore;
use crate::error::Result;
use crate::model::{UserRecord, SEED};

/// In-memory record list. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<UserRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with the seed dataset.
    pub fn seeded() -> Self {
        Self {
            records: SEED.clone(),
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.records.iter().position(|r| r.key == key)
    }
}

impl DataStore for InMemoryStore {
    fn save_record(&mut self, record: &UserRecord) -> Result<()> {
        match self.position(&record.key) {
            Some(i) => self.records[i] = record.clone(),
            None => self.records.push(record.clone()),
        }
        Ok(())
    }

    fn get_record(&self, key: &str) -> Result<Option<UserRecord>> {
        Ok(self.position(key).map(|i| self.records[i].clone()))
    }

    fn list_records(&self) -> Result<Vec<UserRecord>> {
        Ok(self.records.clone())
    }

    fn delete_record(&mut self, key: &str) -> Result<Option<UserRecord>> {
        Ok(self.position(key).map(|i| self.records.remove(i)))
    }

    fn replace_all(&mut self, records: Vec<UserRecord>) -> Result<()> {
        self.records = records;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{RecordFields, Sex};
    use chrono::NaiveDate;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Adds a record created on 2024-01-`day` at noon.
        pub fn with_record(
            mut self,
            key: &str,
            name: &str,
            sex: Option<Sex>,
            age: Option<i64>,
            day: u32,
        ) -> Self {
            let created_at = NaiveDate::from_ymd_opt(2024, 1, day)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap();
            let record =
                UserRecord::with_key(key, RecordFields::new(name, sex, age), created_at);
            self.store.save_record(&record).unwrap();
            self
        }
    }
}
