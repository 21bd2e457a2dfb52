//! # User Management Screen
//!
//! [`Screen`] is the glue between the table, the search panel and the dialog. It
//! owns no records itself: those sit in the injected [`RecordStore`]. It owns the
//! view state around them:
//!
//! - [`SearchPanel`]: the criteria being typed and whether the extra fields
//!   (age, created range) are expanded
//! - [`TableSort`]: the active column sort
//! - [`RecordDialog`]: the modal form
//!
//! Rows are addressed by their 1-based position in the sorted table, the way a
//! user sees them. Every action resolves the row to a record key before touching
//! the store.
//!
//! Collapsing the search panel only hides the age and created fields. Values
//! entered while it was expanded keep taking part in the next search.

use crate::api::{CmdResult, RecordStore};
use crate::dialog::{DialogEvent, DialogRequest, RecordDialog};
use crate::error::{Result, UsrmgrError};
use crate::filter::{CreatedAtRange, FilterCriteria};
use crate::model::{Sex, UserRecord};
use crate::sort::{SortColumn, TableSort};
use crate::store::memory::InMemoryStore;
use crate::store::DataStore;

pub const DELETE_TITLE: &str = "Delete user";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this user?";

/// A yes/no prompt shown before destructive actions.
pub trait Confirm {
    fn confirm(&mut self, title: &str, message: &str) -> Result<bool>;
}

/// Answers every prompt the same way.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&mut self, _title: &str, _message: &str) -> Result<bool> {
        Ok(self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchPanel {
    criteria: FilterCriteria,
    expanded: bool,
}

impl SearchPanel {
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.criteria.name = name;
    }

    pub fn set_sex(&mut self, sex: Option<Sex>) {
        self.criteria.sex = sex;
    }

    pub fn set_age(&mut self, age: Option<i64>) -> Result<()> {
        self.require_expanded("age")?;
        self.criteria.age = age;
        Ok(())
    }

    pub fn set_created_range(&mut self, range: Option<CreatedAtRange>) -> Result<()> {
        self.require_expanded("created")?;
        self.criteria.created_at = range;
        Ok(())
    }

    fn require_expanded(&self, field: &'static str) -> Result<()> {
        if self.expanded {
            Ok(())
        } else {
            Err(UsrmgrError::Unavailable {
                action: field,
                mode: "collapsed search",
            })
        }
    }

    /// Empties every criterion. The expanded state is kept.
    pub fn clear(&mut self) {
        self.criteria = FilterCriteria::default();
    }
}

pub struct Screen<S: DataStore = InMemoryStore> {
    records: RecordStore<S>,
    dialog: RecordDialog,
    panel: SearchPanel,
    sort: TableSort,
}

impl Screen<InMemoryStore> {
    pub fn seeded() -> Self {
        Self::new(RecordStore::seeded())
    }
}

impl<S: DataStore> Screen<S> {
    pub fn new(records: RecordStore<S>) -> Self {
        Self {
            records,
            dialog: RecordDialog::new(),
            panel: SearchPanel::default(),
            sort: TableSort::default(),
        }
    }

    pub fn records(&self) -> &RecordStore<S> {
        &self.records
    }

    pub fn dialog(&self) -> &RecordDialog {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut RecordDialog {
        &mut self.dialog
    }

    pub fn panel(&self) -> &SearchPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut SearchPanel {
        &mut self.panel
    }

    pub fn sort(&self) -> TableSort {
        self.sort
    }

    /// The displayed list in table order.
    pub fn rows(&self) -> Vec<UserRecord> {
        self.sort.apply(self.records.displayed())
    }

    pub fn row(&self, row: usize) -> Result<UserRecord> {
        row.checked_sub(1)
            .and_then(|i| self.rows().into_iter().nth(i))
            .ok_or(UsrmgrError::RowNotFound(row))
    }

    pub fn toggle_sort(&mut self, column: SortColumn) -> Result<()> {
        self.ensure_table_active()?;
        self.sort.toggle(column);
        tracing::debug!(?column, order = ?self.sort.order, "sort changed");
        Ok(())
    }

    /// Filters the table by the criteria already in the panel.
    pub fn search(&mut self) -> Result<CmdResult> {
        self.search_with(|_| Ok(()))
    }

    /// Edits the panel and filters in one step. If `edit` fails the panel is
    /// left exactly as it was.
    pub fn search_with<F>(&mut self, edit: F) -> Result<CmdResult>
    where
        F: FnOnce(&mut SearchPanel) -> Result<()>,
    {
        self.ensure_table_active()?;
        let mut panel = self.panel.clone();
        edit(&mut panel)?;
        self.panel = panel;
        let criteria = self.panel.criteria().clone();
        self.records.filter(&criteria)
    }

    pub fn reset(&mut self) -> Result<CmdResult> {
        self.ensure_table_active()?;
        self.panel.clear();
        self.records.reset()
    }

    pub fn open_create(&mut self) -> Result<()> {
        self.dialog.open(DialogRequest::create())
    }

    pub fn open_edit(&mut self, row: usize) -> Result<()> {
        self.ensure_table_active()?;
        let record = self.row(row)?;
        self.dialog.open(DialogRequest::edit(record))
    }

    pub fn open_view(&mut self, row: usize) -> Result<()> {
        self.ensure_table_active()?;
        let record = self.row(row)?;
        self.dialog.open(DialogRequest::view(record))
    }

    /// Submits the dialog and writes the outcome into the store.
    pub fn submit(&mut self) -> Result<CmdResult> {
        match self.dialog.submit()? {
            DialogEvent::Created(fields) => self.records.create(fields),
            DialogEvent::Updated { key, fields } => self.records.update(&key, fields),
        }
    }

    /// Deletes a row after the user says yes. A "no" changes nothing.
    pub fn delete_row<C: Confirm + ?Sized>(
        &mut self,
        row: usize,
        confirm: &mut C,
    ) -> Result<CmdResult> {
        self.ensure_table_active()?;
        let record = self.row(row)?;
        if !confirm.confirm(DELETE_TITLE, DELETE_PROMPT)? {
            tracing::debug!(key = %record.key, "delete declined");
            return Ok(CmdResult::default());
        }
        self.records.delete(&record.key)
    }

    /// The whole table, search panel included, sits behind the modal while it
    /// is open.
    fn ensure_table_active(&self) -> Result<()> {
        if self.dialog.is_open() {
            return Err(UsrmgrError::DialogBusy);
        }
        Ok(())
    }
}
