use serde::{Deserialize, Serialize};

/// A registered account. `account_id` is assigned by the store on insert.
///
/// Passwords are kept and compared as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_id: i64,
    pub username: String,
    pub password: String,
}

/// A posted message. `posted_by` references an `Account::account_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub message_id: i64,
    pub posted_by: i64,
    pub message_text: String,
    /// Seconds since the Unix epoch.
    pub time_posted_epoch: i64,
}

/// A message that has passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub posted_by: i64,
    pub message_text: String,
    pub time_posted_epoch: i64,
}
