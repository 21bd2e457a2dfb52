use crate::model::UserRecord;

pub mod create;
pub mod delete;
pub mod helpers;
pub mod reset;
pub mod search;
pub mod update;

/// A transient success notification for the user, e.g. "User created".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<UserRecord>,
    pub listed_records: Vec<UserRecord>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<UserRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<UserRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}
