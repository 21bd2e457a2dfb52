//! # Record Dialog
//!
//! A modal form that creates, edits or shows one user record. The dialog is a
//! small state machine:
//!
//! ```text
//!            open(Create) ──► Create ──┐
//!  hidden ── open(Edit)   ──► Edit   ──┼─ cancel ────────────────► hidden
//!            open(View)   ──► View     └─ submit ─┬─ invalid ──► (stays open)
//!                               │                 └─ valid ────► hidden + DialogEvent
//!                               └─ dismiss ───────────────────────► hidden
//! ```
//!
//! The dialog knows nothing about where records live. The caller hands it a
//! [`DialogRequest`] and gets back at most one [`DialogEvent`] per opening, from a
//! successful [`RecordDialog::submit`]. Writing that event into storage is the
//! caller's job.

use crate::error::{Result, UsrmgrError};
use crate::model::{RecordFields, Sex, UserRecord};
use chrono::NaiveDateTime;

pub mod validation;

use validation::{validate_fields, Field, ValidationErrors};

/// Which form is shown. `Edit` and `View` carry the record they were opened on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit(UserRecord),
    View(UserRecord),
}

impl DialogMode {
    pub fn name(&self) -> &'static str {
        match self {
            DialogMode::Create => "create",
            DialogMode::Edit(_) => "edit",
            DialogMode::View(_) => "view",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DialogMode::Create => "Create user",
            DialogMode::Edit(_) => "Edit user",
            DialogMode::View(_) => "View user",
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, DialogMode::View(_))
    }

    fn target(&self) -> Option<&UserRecord> {
        match self {
            DialogMode::Create => None,
            DialogMode::Edit(record) | DialogMode::View(record) => Some(record),
        }
    }
}

/// What the parent asks the dialog to do when opening it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogRequest {
    pub mode: DialogMode,
}

impl DialogRequest {
    pub fn create() -> Self {
        Self {
            mode: DialogMode::Create,
        }
    }

    pub fn edit(record: UserRecord) -> Self {
        Self {
            mode: DialogMode::Edit(record),
        }
    }

    pub fn view(record: UserRecord) -> Self {
        Self {
            mode: DialogMode::View(record),
        }
    }
}

/// The single result of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    Created(RecordFields),
    Updated { key: String, fields: RecordFields },
}

#[derive(Debug, Clone)]
struct OpenDialog {
    mode: DialogMode,
    fields: RecordFields,
    errors: ValidationErrors,
}

#[derive(Debug, Default)]
pub struct RecordDialog {
    open: Option<OpenDialog>,
}

impl RecordDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, request: DialogRequest) -> Result<()> {
        if self.open.is_some() {
            return Err(UsrmgrError::DialogBusy);
        }
        let fields = request
            .mode
            .target()
            .map(UserRecord::fields)
            .unwrap_or_default();
        tracing::debug!(mode = request.mode.name(), "dialog opened");
        self.open = Some(OpenDialog {
            mode: request.mode,
            fields,
            errors: ValidationErrors::default(),
        });
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn mode(&self) -> Option<&DialogMode> {
        self.open.as_ref().map(|o| &o.mode)
    }

    pub fn title(&self) -> Option<&'static str> {
        self.mode().map(DialogMode::title)
    }

    pub fn fields(&self) -> Option<&RecordFields> {
        self.open.as_ref().map(|o| &o.fields)
    }

    /// Errors from the last failed submit, minus fields edited since.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        self.open.as_ref().map(|o| &o.errors)
    }

    /// The read-only creation time. Not shown when creating.
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        self.mode()
            .and_then(DialogMode::target)
            .map(|r| r.created_at)
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        self.edit_field(Field::Name, |f| f.name = name)
    }

    pub fn set_sex(&mut self, sex: Option<Sex>) -> Result<()> {
        self.edit_field(Field::Sex, |f| f.sex = sex)
    }

    pub fn set_age(&mut self, age: Option<i64>) -> Result<()> {
        self.edit_field(Field::Age, |f| f.age = age)
    }

    fn edit_field(&mut self, field: Field, edit: impl FnOnce(&mut RecordFields)) -> Result<()> {
        let open = self.open.as_mut().ok_or(UsrmgrError::DialogClosed)?;
        if open.mode.is_read_only() {
            return Err(UsrmgrError::ReadOnly);
        }
        edit(&mut open.fields);
        open.errors.clear(field);
        Ok(())
    }

    /// Close a create/edit form, throwing away whatever was typed.
    pub fn cancel(&mut self) -> Result<()> {
        let open = self.open.as_ref().ok_or(UsrmgrError::DialogClosed)?;
        if open.mode.is_read_only() {
            return Err(UsrmgrError::Unavailable {
                action: "cancel",
                mode: open.mode.name(),
            });
        }
        tracing::debug!(mode = open.mode.name(), "dialog cancelled");
        self.open = None;
        Ok(())
    }

    /// Close a view dialog.
    pub fn dismiss(&mut self) -> Result<()> {
        let open = self.open.as_ref().ok_or(UsrmgrError::DialogClosed)?;
        if !open.mode.is_read_only() {
            return Err(UsrmgrError::Unavailable {
                action: "dismiss",
                mode: open.mode.name(),
            });
        }
        tracing::debug!("dialog dismissed");
        self.open = None;
        Ok(())
    }

    /// Validate and, if every field passes, close and hand back the result.
    ///
    /// On failure the dialog stays open with the field errors recorded, and the
    /// same errors are returned as [`UsrmgrError::Validation`].
    pub fn submit(&mut self) -> Result<DialogEvent> {
        let open = self.open.as_mut().ok_or(UsrmgrError::DialogClosed)?;
        if open.mode.is_read_only() {
            return Err(UsrmgrError::Unavailable {
                action: "submit",
                mode: open.mode.name(),
            });
        }

        if let Err(errors) = validate_fields(&open.fields) {
            tracing::debug!(%errors, "dialog validation failed");
            open.errors = errors.clone();
            return Err(UsrmgrError::Validation(errors));
        }

        let Some(open) = self.open.take() else {
            return Err(UsrmgrError::DialogClosed);
        };
        let event = match open.mode {
            DialogMode::Create => DialogEvent::Created(open.fields),
            DialogMode::Edit(record) => DialogEvent::Updated {
                key: record.key,
                fields: open.fields,
            },
            DialogMode::View(_) => {
                return Err(UsrmgrError::Unavailable {
                    action: "submit",
                    mode: "view",
                })
            }
        };
        tracing::debug!("dialog submitted");
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::validation::{AGE_OUT_OF_RANGE, NAME_REQUIRED};
    use super::*;
    use crate::model::SEED;

    #[test]
    fn create_starts_empty_without_created_at() {
        let mut dialog = RecordDialog::new();
        dialog.open(DialogRequest::create()).unwrap();
        assert_eq!(dialog.fields(), Some(&RecordFields::default()));
        assert_eq!(dialog.created_at(), None);
        assert_eq!(dialog.title(), Some("Create user"));
    }

    #[test]
    fn create_submit_emits_created() {
        let mut dialog = RecordDialog::new();
        dialog.open(DialogRequest::create()).unwrap();
        dialog.set_name("王五").unwrap();
        dialog.set_sex(Some(Sex::Male)).unwrap();
        dialog.set_age(Some(33)).unwrap();

        let event = dialog.submit().unwrap();
        assert_eq!(
            event,
            DialogEvent::Created(RecordFields::new("王五", Some(Sex::Male), Some(33)))
        );
        assert!(!dialog.is_open());
    }

    #[test]
    fn edit_prefills_and_reports_key() {
        let mut dialog = RecordDialog::new();
        dialog.open(DialogRequest::edit(SEED[0].clone())).unwrap();
        assert_eq!(dialog.fields().unwrap().name, "张三");
        assert_eq!(dialog.created_at(), Some(SEED[0].created_at));

        dialog.set_age(Some(19)).unwrap();
        match dialog.submit().unwrap() {
            DialogEvent::Updated { key, fields } => {
                assert_eq!(key, "1");
                assert_eq!(fields.age, Some(19));
                assert_eq!(fields.name, "张三");
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn invalid_submit_stays_open_with_errors() {
        let mut dialog = RecordDialog::new();
        dialog.open(DialogRequest::create()).unwrap();
        dialog.set_sex(Some(Sex::Female)).unwrap();
        dialog.set_age(Some(0)).unwrap();

        let err = dialog.submit().unwrap_err();
        assert!(matches!(err, UsrmgrError::Validation(_)));
        assert!(dialog.is_open());

        let errors = dialog.errors().unwrap();
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Age), Some(AGE_OUT_OF_RANGE));
        assert_eq!(errors.get(Field::Sex), None);
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut dialog = RecordDialog::new();
        dialog.open(DialogRequest::create()).unwrap();
        let _ = dialog.submit();
        dialog.set_name("王五").unwrap();

        let errors = dialog.errors().unwrap();
        assert_eq!(errors.get(Field::Name), None);
        assert!(errors.get(Field::Age).is_some());
    }

    #[test]
    fn cancel_discards_edits() {
        let mut dialog = RecordDialog::new();
        dialog.open(DialogRequest::edit(SEED[1].clone())).unwrap();
        dialog.set_name("changed").unwrap();
        dialog.cancel().unwrap();
        assert!(!dialog.is_open());

        dialog.open(DialogRequest::edit(SEED[1].clone())).unwrap();
        assert_eq!(dialog.fields().unwrap().name, "李四");
    }

    #[test]
    fn view_is_read_only_and_only_dismisses() {
        let mut dialog = RecordDialog::new();
        dialog.open(DialogRequest::view(SEED[0].clone())).unwrap();
        assert_eq!(dialog.title(), Some("View user"));

        assert!(matches!(dialog.set_name("x"), Err(UsrmgrError::ReadOnly)));
        assert!(matches!(
            dialog.submit(),
            Err(UsrmgrError::Unavailable { action: "submit", .. })
        ));
        assert!(matches!(
            dialog.cancel(),
            Err(UsrmgrError::Unavailable { action: "cancel", .. })
        ));
        dialog.dismiss().unwrap();
        assert!(!dialog.is_open());
    }

    #[test]
    fn not_reentrant_while_open() {
        let mut dialog = RecordDialog::new();
        dialog.open(DialogRequest::create()).unwrap();
        assert!(matches!(
            dialog.open(DialogRequest::view(SEED[0].clone())),
            Err(UsrmgrError::DialogBusy)
        ));
        assert_eq!(dialog.mode(), Some(&DialogMode::Create));
    }

    #[test]
    fn closed_dialog_rejects_actions() {
        let mut dialog = RecordDialog::new();
        assert!(matches!(dialog.submit(), Err(UsrmgrError::DialogClosed)));
        assert!(matches!(dialog.set_age(Some(3)), Err(UsrmgrError::DialogClosed)));
        assert!(matches!(dialog.dismiss(), Err(UsrmgrError::DialogClosed)));
    }
}
