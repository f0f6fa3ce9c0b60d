use serde::Deserialize;

// -- Accounts --

/// Body of `POST /register` and `POST /login`.
///
/// Clients may echo an `accountId`; it is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// -- Messages --

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    pub posted_by: i64,
    pub message_text: String,
    /// Filled with the current time when absent.
    #[serde(default)]
    pub time_posted_epoch: Option<i64>,
}

/// Body of `PATCH /messages/{id}`. Only the text is read; other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageRequest {
    pub message_text: String,
}
