use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::messages::MAX_MESSAGE_CHARS;

/// Why a candidate account or message was refused.
#[derive(Debug, thiserror::Error)]
pub enum Violation {
    #[error("Username must not be blank.")]
    EmptyUsername,

    #[error("Password must be longer than 4 characters.")]
    PasswordTooShort,

    #[error("Message text must not be blank.")]
    EmptyText,

    #[error("Message text is {len} characters long; the limit is {max}.", max = MAX_MESSAGE_CHARS)]
    TextTooLong { len: usize },

    #[error("Account {0} does not exist.")]
    UnknownAuthor(i64),
}

/// Outcome of a rules-engine call that did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Account already exists. Enter another account.")]
    DuplicateAccount,

    #[error("Credentials don't match. Try again with different username/password.")]
    Unauthorized,

    /// Login for a username nobody registered.
    #[error("No account is registered under that username.")]
    UnknownAccount,

    #[error(transparent)]
    Invalid(#[from] Violation),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Everything a handler can fail with. Rendered as a plain-text body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// Unreadable request: bad JSON, missing fields, non-numeric ids.
    #[error("{0}")]
    BadRequest(String),

    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Rule(RuleError::DuplicateAccount) => StatusCode::CONFLICT,
            Self::Rule(RuleError::Unauthorized) => StatusCode::UNAUTHORIZED,
            // Unknown usernames are answered like bad passwords.
            Self::Rule(RuleError::UnknownAccount) => {
                return (StatusCode::UNAUTHORIZED, RuleError::Unauthorized.to_string())
                    .into_response();
            }
            Self::Rule(RuleError::Invalid(_)) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Rule(RuleError::Storage(e)) => {
                error!("Storage error: {:#}", e);
                StatusCode::BAD_REQUEST
            }
            Self::Join(e) => {
                error!("spawn_blocking join error: {}", e);
                StatusCode::BAD_REQUEST
            }
        };

        (status, self.to_string()).into_response()
    }
}
