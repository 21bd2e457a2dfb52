use crate::dialog::validation::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UsrmgrError {
    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("No row {0} in the table")]
    RowNotFound(usize),

    #[error("The dialog is not open")]
    DialogClosed,

    #[error("The dialog is already open")]
    DialogBusy,

    #[error("The dialog is read-only")]
    ReadOnly,

    #[error("{action} is not available in {mode} mode")]
    Unavailable {
        action: &'static str,
        mode: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, UsrmgrError>;
