//! Table column sorting.
//!
//! Sorting is a view concern: it reorders what the table shows and never touches
//! the store. Two columns are sortable:
//!
//! - **age** cycles ascend → descend → unsorted. A record with no age compares
//!   equal to every other record, so it is never pushed to either end.
//! - **created** cycles ascend → descend → ascend and is never unsorted. It is the
//!   column sorted by default.
//!
//! Switching to the other column starts it at ascend.

use crate::model::UserRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortColumn {
    Age,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Ascend,
    Descend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSort {
    pub column: SortColumn,
    pub order: Option<SortOrder>,
}

impl Default for TableSort {
    fn default() -> Self {
        Self {
            column: SortColumn::CreatedAt,
            order: Some(SortOrder::Ascend),
        }
    }
}

impl TableSort {
    /// Advance the sort state as if the column header had been clicked.
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column != column {
            self.column = column;
            self.order = Some(SortOrder::Ascend);
            return;
        }
        self.order = match (column, self.order) {
            (_, None) => Some(SortOrder::Ascend),
            (_, Some(SortOrder::Ascend)) => Some(SortOrder::Descend),
            (SortColumn::Age, Some(SortOrder::Descend)) => None,
            (SortColumn::CreatedAt, Some(SortOrder::Descend)) => Some(SortOrder::Ascend),
        };
    }

    /// Returns the records in display order. The input order is kept for ties.
    pub fn apply(&self, records: &[UserRecord]) -> Vec<UserRecord> {
        let mut sorted = records.to_vec();
        let Some(order) = self.order else {
            return sorted;
        };
        let column = self.column;
        stable_sort_by(&mut sorted, |a, b| match order {
            SortOrder::Ascend => compare(column, a, b),
            SortOrder::Descend => compare(column, b, a),
        });
        sorted
    }
}

fn compare(column: SortColumn, a: &UserRecord, b: &UserRecord) -> Ordering {
    match column {
        SortColumn::Age => match (a.age, b.age) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => Ordering::Equal,
        },
        SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

/// Insertion sort. The age comparator is not a total order (a missing age equals
/// everything), which `slice::sort_by` is allowed to panic on.
fn stable_sort_by<T, F>(items: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DataStore;

    fn keys(records: &[UserRecord]) -> Vec<&str> {
        records.iter().map(|r| r.key.as_str()).collect()
    }

    fn sample() -> Vec<UserRecord> {
        StoreFixture::new()
            .with_record("a", "A", None, Some(30), 3)
            .with_record("b", "B", None, Some(10), 1)
            .with_record("c", "C", None, Some(20), 2)
            .store
            .list_records()
            .unwrap()
    }

    #[test]
    fn defaults_to_created_ascend() {
        let sort = TableSort::default();
        assert_eq!(keys(&sort.apply(&sample())), vec!["b", "c", "a"]);
    }

    #[test]
    fn created_cycle_never_unsorts() {
        let mut sort = TableSort::default();
        sort.toggle(SortColumn::CreatedAt);
        assert_eq!(sort.order, Some(SortOrder::Descend));
        assert_eq!(keys(&sort.apply(&sample())), vec!["a", "c", "b"]);
        sort.toggle(SortColumn::CreatedAt);
        assert_eq!(sort.order, Some(SortOrder::Ascend));
    }

    #[test]
    fn age_cycle_includes_unsorted() {
        let mut sort = TableSort::default();
        sort.toggle(SortColumn::Age);
        assert_eq!(sort.order, Some(SortOrder::Ascend));
        assert_eq!(keys(&sort.apply(&sample())), vec!["b", "c", "a"]);

        sort.toggle(SortColumn::Age);
        assert_eq!(keys(&sort.apply(&sample())), vec!["a", "c", "b"]);

        sort.toggle(SortColumn::Age);
        assert_eq!(sort.order, None);
        assert_eq!(keys(&sort.apply(&sample())), vec!["a", "b", "c"]);
    }

    #[test]
    fn unset_ages_compare_equal_and_keep_order() {
        let records = StoreFixture::new()
            .with_record("x", "X", None, None, 1)
            .with_record("y", "Y", None, None, 2)
            .store
            .list_records()
            .unwrap();

        let mut sort = TableSort::default();
        sort.toggle(SortColumn::Age);
        assert_eq!(keys(&sort.apply(&records)), vec!["x", "y"]);
        sort.toggle(SortColumn::Age);
        assert_eq!(keys(&sort.apply(&records)), vec!["x", "y"]);
    }
}
