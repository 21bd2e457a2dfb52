//! Search criteria for the user table.
//!
//! Every criterion is optional. Present criteria combine with AND:
//!
//! - `name`: case-sensitive substring containment
//! - `sex`, `age`: exact equality (a record with the field unset never matches);
//!   an age of 0 is treated as no age criterion
//! - `created_at`: strictly inside `(start, end)`; a record stamped exactly on
//!   either bound is excluded

use crate::model::{Sex, UserRecord};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedAtRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl CreatedAtRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, time: NaiveDateTime) -> bool {
        self.start < time && time < self.end
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub name: Option<String>,
    pub sex: Option<Sex>,
    pub age: Option<i64>,
    pub created_at: Option<CreatedAtRange>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    pub fn age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    pub fn created_between(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.created_at = Some(CreatedAtRange::new(start, end));
        self
    }

    /// An empty name box counts as unset, same as a missing one.
    fn name_term(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    fn age_term(&self) -> Option<i64> {
        self.age.filter(|&a| a != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.name_term().is_none()
            && self.sex.is_none()
            && self.age_term().is_none()
            && self.created_at.is_none()
    }

    pub fn matches(&self, record: &UserRecord) -> bool {
        if let Some(sex) = self.sex {
            if record.sex != Some(sex) {
                return false;
            }
        }
        if let Some(age) = self.age_term() {
            if record.age != Some(age) {
                return false;
            }
        }
        if let Some(term) = self.name_term() {
            if !record.name.contains(term) {
                return false;
            }
        }
        if let Some(range) = &self.created_at {
            if !range.contains(record.created_at) {
                return false;
            }
        }
        true
    }
}
