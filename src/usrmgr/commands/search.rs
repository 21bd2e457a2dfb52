use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::FilterCriteria;
use crate::store::DataStore;

/// Lists the canonical records that match every criterion, in store order.
pub fn run<S: DataStore>(store: &S, criteria: &FilterCriteria) -> Result<CmdResult> {
    let matched: Vec<_> = store
        .list_records()?
        .into_iter()
        .filter(|r| criteria.matches(r))
        .collect();
    tracing::debug!(?criteria, matched = matched.len(), "search");
    Ok(CmdResult::default().with_listed_records(matched))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sex;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn filters_by_sex() {
        let store = InMemoryStore::seeded();
        let result = run(&store, &FilterCriteria::new().sex(Sex::Female)).unwrap();
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].name, "李四");
    }

    #[test]
    fn name_substring_returns_all_containing_records() {
        let store = StoreFixture::new()
            .with_record("a", "Anna", Some(Sex::Female), Some(30), 1)
            .with_record("b", "Hannah", Some(Sex::Female), Some(31), 2)
            .with_record("c", "Bob", Some(Sex::Male), Some(32), 3)
            .store;

        let result = run(&store, &FilterCriteria::new().name("nn")).unwrap();
        let names: Vec<_> = result.listed_records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Anna", "Hannah"]);
    }

    #[test]
    fn does_not_touch_the_store() {
        let store = InMemoryStore::seeded();
        run(&store, &FilterCriteria::new().age(99)).unwrap();
        assert_eq!(store.list_records().unwrap().len(), 2);
    }
}
