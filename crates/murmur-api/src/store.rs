//! Persistence seams used by the rules engines.
//!
//! `murmur_db::Database` is the production implementation; tests can wrap it
//! to inject specific interleavings.

use anyhow::Result;
use murmur_db::Database;
use murmur_types::models::{Account, Message, NewMessage};

pub trait AccountStore {
    fn insert_account(&self, username: &str, password: &str) -> Result<Account>;
    fn find_account_by_username(&self, username: &str) -> Result<Option<Account>>;
    fn account_exists(&self, id: i64) -> Result<bool>;
    fn list_accounts(&self) -> Result<Vec<Account>>;
}

pub trait MessageStore {
    fn insert_message(&self, message: &NewMessage) -> Result<Message>;
    fn list_messages(&self) -> Result<Vec<Message>>;
    fn find_message(&self, id: i64) -> Result<Option<Message>>;
    fn messages_by_author(&self, account_id: i64) -> Result<Vec<Message>>;
    fn message_exists(&self, id: i64) -> Result<bool>;
    /// Rows removed.
    fn delete_message(&self, id: i64) -> Result<usize>;
    /// Rows changed.
    fn update_message_text(&self, id: i64, text: &str) -> Result<usize>;
}

impl AccountStore for Database {
    fn insert_account(&self, username: &str, password: &str) -> Result<Account> {
        self.create_account(username, password)
    }

    fn find_account_by_username(&self, username: &str) -> Result<Option<Account>> {
        self.get_account_by_username(username)
    }

    fn account_exists(&self, id: i64) -> Result<bool> {
        Database::account_exists(self, id)
    }

    fn list_accounts(&self) -> Result<Vec<Account>> {
        Database::list_accounts(self)
    }
}

impl MessageStore for Database {
    fn insert_message(&self, message: &NewMessage) -> Result<Message> {
        Database::insert_message(self, message)
    }

    fn list_messages(&self) -> Result<Vec<Message>> {
        Database::list_messages(self)
    }

    fn find_message(&self, id: i64) -> Result<Option<Message>> {
        self.get_message(id)
    }

    fn messages_by_author(&self, account_id: i64) -> Result<Vec<Message>> {
        self.get_messages_by_author(account_id)
    }

    fn message_exists(&self, id: i64) -> Result<bool> {
        Database::message_exists(self, id)
    }

    fn delete_message(&self, id: i64) -> Result<usize> {
        Database::delete_message(self, id)
    }

    fn update_message_text(&self, id: i64, text: &str) -> Result<usize> {
        Database::update_message_text(self, id, text)
    }
}
