//! Message lifecycle rules.

use murmur_types::api::{CreateMessageRequest, UpdateMessageRequest};
use murmur_types::models::{Message, NewMessage};
use tracing::debug;

use crate::error::{RuleError, Violation};
use crate::store::{AccountStore, MessageStore};

/// Longest accepted message text, in characters.
pub const MAX_MESSAGE_CHARS: usize = 254;

pub struct Messages<'a, S: MessageStore + AccountStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: MessageStore + AccountStore + ?Sized> Messages<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Store a new message. The author must be a registered account.
    pub fn create(&self, candidate: &CreateMessageRequest) -> Result<Message, RuleError> {
        check_text(&candidate.message_text)?;

        if !self.store.account_exists(candidate.posted_by)? {
            return Err(Violation::UnknownAuthor(candidate.posted_by).into());
        }

        let message = NewMessage {
            posted_by: candidate.posted_by,
            message_text: candidate.message_text.clone(),
            time_posted_epoch: candidate
                .time_posted_epoch
                .unwrap_or_else(|| chrono::Utc::now().timestamp()),
        };

        Ok(self.store.insert_message(&message)?)
    }

    pub fn all(&self) -> Result<Vec<Message>, RuleError> {
        Ok(self.store.list_messages()?)
    }

    pub fn by_id(&self, id: i64) -> Result<Option<Message>, RuleError> {
        Ok(self.store.find_message(id)?)
    }

    pub fn by_account(&self, account_id: i64) -> Result<Vec<Message>, RuleError> {
        Ok(self.store.messages_by_author(account_id)?)
    }

    /// Returns rows removed: 1, or 0 when nothing had that id.
    pub fn delete(&self, id: i64) -> Result<usize, RuleError> {
        if !self.store.message_exists(id)? {
            return Ok(0);
        }
        Ok(self.store.delete_message(id)?)
    }

    /// Replace the text of message `id`. Returns rows updated: 0 when the
    /// message is missing or the new text is out of bounds.
    pub fn update(&self, id: i64, patch: &UpdateMessageRequest) -> Result<usize, RuleError> {
        if self.store.find_message(id)?.is_none() {
            debug!("Update of missing message {}", id);
            return Ok(0);
        }

        if let Err(violation) = check_text(&patch.message_text) {
            debug!("Update of message {} refused: {}", id, violation);
            return Ok(0);
        }

        Ok(self.store.update_message_text(id, &patch.message_text)?)
    }
}

fn check_text(text: &str) -> Result<(), Violation> {
    let len = text.chars().count();
    if len == 0 {
        return Err(Violation::EmptyText);
    }
    if len > MAX_MESSAGE_CHARS {
        return Err(Violation::TextTooLong { len });
    }
    Ok(())
}
