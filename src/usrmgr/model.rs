use chrono::{Local, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Sex {
    Male = 1,
    Female = 2,
}

impl TryFrom<u8> for Sex {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Sex::Male),
            2 => Ok(Sex::Female),
            other => Err(format!("unknown sex code {}", other)),
        }
    }
}

impl From<Sex> for u8 {
    fn from(sex: Sex) -> u8 {
        sex as u8
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "m" | "male" => Ok(Sex::Male),
            "2" | "f" | "female" => Ok(Sex::Female),
            other => Err(format!("expected male/female or 1/2, got '{}'", other)),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// The user-editable part of a record: everything except `key` and `created_at`.
///
/// `age` is kept as a raw `i64` so that out-of-range input can be held in a form
/// and reported by validation instead of being rejected at parse time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFields {
    pub name: String,
    pub sex: Option<Sex>,
    pub age: Option<i64>,
}

impl RecordFields {
    pub fn new(name: impl Into<String>, sex: Option<Sex>, age: Option<i64>) -> Self {
        Self {
            name: name.into(),
            sex,
            age,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub key: String,
    pub name: String,
    pub sex: Option<Sex>,
    pub age: Option<i64>,
    pub created_at: NaiveDateTime,
}

impl UserRecord {
    /// Builds a brand new record, stamping a fresh key and the current local time.
    pub fn new(fields: RecordFields) -> Self {
        Self::with_key(generate_key(), fields, Local::now().naive_local())
    }

    pub fn with_key(
        key: impl Into<String>,
        fields: RecordFields,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            key: key.into(),
            name: fields.name,
            sex: fields.sex,
            age: fields.age,
            created_at,
        }
    }

    pub fn fields(&self) -> RecordFields {
        RecordFields {
            name: self.name.clone(),
            sex: self.sex,
            age: self.age,
        }
    }

    /// Overwrites the editable fields; `key` and `created_at` never change.
    pub fn apply(&mut self, fields: RecordFields) {
        self.name = fields.name;
        self.sex = fields.sex;
        self.age = fields.age;
    }
}

/// `<unix millis>-<7 random base-16 chars>`
pub fn generate_key() -> String {
    let suffix: String = Uuid::new_v4().simple().to_string().chars().take(7).collect();
    format!("{}-{}", Utc::now().timestamp_millis(), suffix)
}

fn seed_time(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, s))
        .unwrap_or_default()
}

/// The dataset every session starts from and `reset` returns to.
pub static SEED: Lazy<Vec<UserRecord>> = Lazy::new(|| {
    vec![
        UserRecord::with_key(
            "1",
            RecordFields::new("张三", Some(Sex::Male), Some(18)),
            seed_time(2024, 3, 14, 12, 44, 9),
        ),
        UserRecord::with_key(
            "2",
            RecordFields::new("李四", Some(Sex::Female), Some(20)),
            seed_time(2024, 3, 15, 9, 8, 8),
        ),
    ]
});
