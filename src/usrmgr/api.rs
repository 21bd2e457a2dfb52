//! # API Facade
//!
//! [`RecordStore`] is the single entry point for record operations, whatever UI
//! drives it. It dispatches to `commands/*.rs` and keeps one piece of state the
//! commands do not: the **displayed list**, i.e. what the table currently shows.
//!
//! ## Canonical vs displayed
//!
//! - The canonical list lives in the [`DataStore`] and holds every record.
//! - The displayed list starts as a copy of it. `filter` replaces it with the
//!   matching subset; `reset` replaces it with the seed dataset.
//! - `create`, `update` and `delete` write through to the store and patch the
//!   displayed list in place, so a filtered view stays filtered but reflects the
//!   change.
//!
//! ## What the API Does NOT Do
//!
//! - Sorting: a table concern, see [`crate::sort`].
//! - Confirmation before delete: the caller asks, see [`crate::screen`].
//! - Any I/O: results come back as [`CmdResult`] values, with notifications in
//!   `messages`.

use crate::commands;
use crate::error::Result;
use crate::filter::FilterCriteria;
use crate::model::{RecordFields, UserRecord};
use crate::store::memory::InMemoryStore;
use crate::store::DataStore;

pub struct RecordStore<S: DataStore = InMemoryStore> {
    store: S,
    displayed: Vec<UserRecord>,
}

impl RecordStore<InMemoryStore> {
    /// An in-memory store loaded with the seed dataset.
    pub fn seeded() -> Self {
        Self {
            displayed: crate::model::SEED.clone(),
            store: InMemoryStore::seeded(),
        }
    }
}

impl<S: DataStore> RecordStore<S> {
    pub fn new(store: S) -> Result<Self> {
        let displayed = store.list_records()?;
        Ok(Self { store, displayed })
    }

    pub fn displayed(&self) -> &[UserRecord] {
        &self.displayed
    }

    pub fn canonical(&self) -> Result<Vec<UserRecord>> {
        self.store.list_records()
    }

    pub fn get(&self, key: &str) -> Result<Option<UserRecord>> {
        self.store.get_record(key)
    }

    pub fn create(&mut self, fields: RecordFields) -> Result<CmdResult> {
        let result = commands::create::run(&mut self.store, fields)?;
        self.displayed.extend(result.affected_records.iter().cloned());
        Ok(result)
    }

    pub fn update(&mut self, key: &str, fields: RecordFields) -> Result<CmdResult> {
        let result = commands::update::run(&mut self.store, key, fields)?;
        for updated in &result.affected_records {
            if let Some(shown) = self.displayed.iter_mut().find(|r| r.key == updated.key) {
                *shown = updated.clone();
            }
        }
        Ok(result)
    }

    pub fn delete(&mut self, key: &str) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.store, key)?;
        self.displayed.retain(|r| r.key != key);
        Ok(result)
    }

    /// Narrows the displayed list to canonical records matching `criteria`.
    /// With no criterion set the displayed list is left as it is.
    pub fn filter(&mut self, criteria: &FilterCriteria) -> Result<CmdResult> {
        if criteria.is_empty() {
            return Ok(CmdResult::default().with_listed_records(self.displayed.clone()));
        }
        let result = commands::search::run(&self.store, criteria)?;
        self.displayed = result.listed_records.clone();
        Ok(result)
    }

    pub fn reset(&mut self) -> Result<CmdResult> {
        let result = commands::reset::run(&mut self.store)?;
        self.displayed = result.listed_records.clone();
        Ok(result)
    }
}

pub use crate::commands::{CmdMessage, CmdResult};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Sex, SEED};
    use crate::store::memory::fixtures::StoreFixture;

    fn keys(records: &[UserRecord]) -> Vec<&str> {
        records.iter().map(|r| r.key.as_str()).collect()
    }

    #[test]
    fn new_displays_the_canonical_list() {
        let fixture = StoreFixture::new().with_record("a", "A", None, None, 1);
        let api = RecordStore::new(fixture.store).unwrap();
        assert_eq!(keys(api.displayed()), vec!["a"]);
    }

    #[test]
    fn empty_filter_is_identity() {
        let mut api = RecordStore::seeded();
        api.filter(&FilterCriteria::new().sex(Sex::Male)).unwrap();
        let before = api.displayed().to_vec();

        let result = api.filter(&FilterCriteria::new()).unwrap();
        assert_eq!(api.displayed(), before.as_slice());
        assert_eq!(result.listed_records, before);
    }

    #[test]
    fn zero_age_filter_keeps_every_row() {
        let mut api = RecordStore::seeded();
        api.filter(&FilterCriteria::new().age(0)).unwrap();
        assert_eq!(api.displayed().len(), 2);

        api.filter(&FilterCriteria::new().age(0).name("张")).unwrap();
        assert_eq!(keys(api.displayed()), vec!["1"]);
    }

    #[test]
    fn filter_by_sex_then_reset() {
        let mut api = RecordStore::seeded();
        api.filter(&FilterCriteria::new().sex(Sex::Female)).unwrap();
        assert_eq!(keys(api.displayed()), vec!["2"]);
        assert_eq!(api.canonical().unwrap().len(), 2);

        api.reset().unwrap();
        assert_eq!(api.displayed(), SEED.as_slice());
    }

    #[test]
    fn filter_reads_canonical_not_displayed() {
        let mut api = RecordStore::seeded();
        api.filter(&FilterCriteria::new().sex(Sex::Female)).unwrap();
        api.filter(&FilterCriteria::new().sex(Sex::Male)).unwrap();
        assert_eq!(keys(api.displayed()), vec!["1"]);
    }

    #[test]
    fn create_shows_new_record() {
        let mut api = RecordStore::seeded();
        let result = api
            .create(RecordFields::new("王五", Some(Sex::Male), Some(30)))
            .unwrap();
        let key = result.affected_records[0].key.clone();

        api.filter(&FilterCriteria::new()).unwrap();
        assert_eq!(api.displayed().len(), 3);
        assert_eq!(api.displayed()[2].key, key);
        assert!(SEED.iter().all(|r| r.key != key));
    }

    #[test]
    fn update_patches_filtered_view() {
        let mut api = RecordStore::seeded();
        api.filter(&FilterCriteria::new().name("张")).unwrap();
        api.update("1", RecordFields::new("张三", Some(Sex::Male), Some(19)))
            .unwrap();

        assert_eq!(api.displayed().len(), 1);
        assert_eq!(api.displayed()[0].age, Some(19));
        assert_eq!(api.displayed()[0].created_at, SEED[0].created_at);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut api = RecordStore::seeded();
        api.delete("1").unwrap();
        api.delete("1").unwrap();
        assert_eq!(keys(api.displayed()), vec!["2"]);
        assert_eq!(keys(&api.canonical().unwrap()), vec!["2"]);
    }
}
