use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::SEED;
use crate::store::DataStore;

/// Puts the seed dataset back, dropping every create, edit and delete.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    store.replace_all(SEED.clone())?;
    tracing::debug!("store reset to seed");
    Ok(CmdResult::default().with_listed_records(SEED.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, delete};
    use crate::model::{RecordFields, Sex};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn restores_seed_after_changes() {
        let mut store = InMemoryStore::seeded();
        delete::run(&mut store, "1").unwrap();
        create::run(
            &mut store,
            RecordFields::new("王五", Some(Sex::Male), Some(50)),
        )
        .unwrap();

        let result = run(&mut store).unwrap();
        assert_eq!(result.listed_records, SEED.clone());
        assert_eq!(store.list_records().unwrap(), SEED.clone());
    }
}
