use crate::dialog::validation::validate_fields;
use crate::error::{Result, UsrmgrError};
use crate::model::{generate_key, RecordFields};
use crate::store::DataStore;

/// A key not used by any record in the store.
pub fn fresh_key<S: DataStore>(store: &S) -> Result<String> {
    loop {
        let key = generate_key();
        if !store.contains_key(&key)? {
            return Ok(key);
        }
        tracing::debug!(%key, "generated key collided, retrying");
    }
}

/// Fields must pass the dialog rules before they reach the store.
pub fn ensure_valid(fields: &RecordFields) -> Result<()> {
    validate_fields(fields).map_err(UsrmgrError::Validation)
}
