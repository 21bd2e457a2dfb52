//! Form validation for the record dialog.
//!
//! Each field is checked on its own and every failure is reported, so the dialog
//! can show a message next to each offending field at once:
//!
//! - `name`: must be non-empty
//! - `sex`: must be set
//! - `age`: must be set, and within [`AGE_MIN`]..=[`AGE_MAX`]
//!
//! An age of `0` is a value, not an absence: it fails the range check, not the
//! required check.

use crate::model::RecordFields;
use std::fmt;

pub const AGE_MIN: i64 = 1;
pub const AGE_MAX: i64 = 110;

pub const NAME_REQUIRED: &str = "name required";
pub const SEX_REQUIRED: &str = "sex required";
pub const AGE_REQUIRED: &str = "age required";
pub const AGE_OUT_OF_RANGE: &str = "age out of range";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Sex,
    Age,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Sex => write!(f, "sex"),
            Field::Age => write!(f, "age"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// All field errors from one validation pass, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// The message for one field, if it failed.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    fn push(&mut self, field: Field, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    /// Drops the error for a field once the user has touched it again.
    pub(crate) fn clear(&mut self, field: Field) {
        self.errors.retain(|e| e.field != field);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err(NAME_REQUIRED);
    }
    Ok(())
}

pub fn validate_sex<T>(sex: Option<T>) -> Result<(), &'static str> {
    match sex {
        Some(_) => Ok(()),
        None => Err(SEX_REQUIRED),
    }
}

pub fn validate_age(age: Option<i64>) -> Result<(), &'static str> {
    match age {
        None => Err(AGE_REQUIRED),
        Some(a) if !(AGE_MIN..=AGE_MAX).contains(&a) => Err(AGE_OUT_OF_RANGE),
        Some(_) => Ok(()),
    }
}

/// Runs every field rule and collects the failures.
pub fn validate_fields(fields: &RecordFields) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    if let Err(message) = validate_name(&fields.name) {
        errors.push(Field::Name, message);
    }
    if let Err(message) = validate_sex(fields.sex) {
        errors.push(Field::Sex, message);
    }
    if let Err(message) = validate_age(fields.age) {
        errors.push(Field::Age, message);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sex;

    #[test]
    fn empty_form_fails_every_field() {
        let errors = validate_fields(&RecordFields::default()).unwrap_err();
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Sex), Some(SEX_REQUIRED));
        assert_eq!(errors.get(Field::Age), Some(AGE_REQUIRED));
        assert_eq!(errors.iter().count(), 3);
    }

    #[test]
    fn zero_age_is_out_of_range_not_missing() {
        assert_eq!(validate_age(Some(0)), Err(AGE_OUT_OF_RANGE));
        assert_eq!(validate_age(None), Err(AGE_REQUIRED));
    }

    #[test]
    fn age_bounds_are_inclusive() {
        assert!(validate_age(Some(1)).is_ok());
        assert!(validate_age(Some(110)).is_ok());
        assert_eq!(validate_age(Some(111)), Err(AGE_OUT_OF_RANGE));
        assert_eq!(validate_age(Some(-5)), Err(AGE_OUT_OF_RANGE));
    }

    #[test]
    fn valid_form_passes() {
        let fields = RecordFields::new("王五", Some(Sex::Male), Some(42));
        assert!(validate_fields(&fields).is_ok());
    }

    #[test]
    fn display_lists_each_failure() {
        let fields = RecordFields::new("", Some(Sex::Female), Some(0));
        let errors = validate_fields(&fields).unwrap_err();
        assert_eq!(errors.to_string(), "name: name required; age: age out of range");
    }
}
