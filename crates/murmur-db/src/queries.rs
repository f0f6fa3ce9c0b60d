use crate::Database;
use anyhow::Result;
use murmur_types::models::{Account, Message, NewMessage};
use rusqlite::{Connection, Row};

const ACCOUNT_COLUMNS: &str = "account_id, username, password";
const MESSAGE_COLUMNS: &str = "message_id, posted_by, message_text, time_posted_epoch";

impl Database {
    // -- Accounts --

    pub fn create_account(&self, username: &str, password: &str) -> Result<Account> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO account (username, password) VALUES (?1, ?2)",
                (username, password),
            )?;
            Ok(Account {
                account_id: conn.last_insert_rowid(),
                username: username.to_string(),
                password: password.to_string(),
            })
        })
    }

    /// Exact, case-sensitive match.
    pub fn get_account_by_username(&self, username: &str) -> Result<Option<Account>> {
        self.with_conn(|conn| {
            let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM account WHERE username = ?1");
            conn.query_row(&sql, [username], account_from_row).optional()
        })
    }

    pub fn get_account_by_id(&self, id: i64) -> Result<Option<Account>> {
        self.with_conn(|conn| {
            let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM account WHERE account_id = ?1");
            conn.query_row(&sql, [id], account_from_row).optional()
        })
    }

    pub fn account_exists(&self, id: i64) -> Result<bool> {
        self.with_conn(|conn| exists(conn, "SELECT 1 FROM account WHERE account_id = ?1", id))
    }

    pub fn list_accounts(&self) -> Result<Vec<Account>> {
        self.with_conn(|conn| {
            let sql = format!("SELECT {ACCOUNT_COLUMNS} FROM account ORDER BY account_id");
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map([], account_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    // -- Messages --

    pub fn insert_message(&self, message: &NewMessage) -> Result<Message> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO message (posted_by, message_text, time_posted_epoch) VALUES (?1, ?2, ?3)",
                rusqlite::params![
                    message.posted_by,
                    message.message_text,
                    message.time_posted_epoch
                ],
            )?;
            Ok(Message {
                message_id: conn.last_insert_rowid(),
                posted_by: message.posted_by,
                message_text: message.message_text.clone(),
                time_posted_epoch: message.time_posted_epoch,
            })
        })
    }

    /// All messages in insertion order.
    pub fn list_messages(&self) -> Result<Vec<Message>> {
        self.with_conn(|conn| {
            let sql = format!("SELECT {MESSAGE_COLUMNS} FROM message ORDER BY message_id");
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map([], message_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn get_message(&self, id: i64) -> Result<Option<Message>> {
        self.with_conn(|conn| {
            let sql = format!("SELECT {MESSAGE_COLUMNS} FROM message WHERE message_id = ?1");
            conn.query_row(&sql, [id], message_from_row).optional()
        })
    }

    pub fn get_messages_by_author(&self, account_id: i64) -> Result<Vec<Message>> {
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT {MESSAGE_COLUMNS} FROM message WHERE posted_by = ?1 ORDER BY message_id"
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map([account_id], message_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn message_exists(&self, id: i64) -> Result<bool> {
        self.with_conn(|conn| exists(conn, "SELECT 1 FROM message WHERE message_id = ?1", id))
    }

    /// Returns the number of rows removed.
    pub fn delete_message(&self, id: i64) -> Result<usize> {
        self.with_conn(|conn| Ok(conn.execute("DELETE FROM message WHERE message_id = ?1", [id])?))
    }

    /// Replaces only the text. Returns the number of rows changed.
    pub fn update_message_text(&self, id: i64, text: &str) -> Result<usize> {
        self.with_conn(|conn| {
            Ok(conn.execute(
                "UPDATE message SET message_text = ?1 WHERE message_id = ?2",
                rusqlite::params![text, id],
            )?)
        })
    }
}

fn account_from_row(row: &Row<'_>) -> rusqlite::Result<Account> {
    Ok(Account {
        account_id: row.get(0)?,
        username: row.get(1)?,
        password: row.get(2)?,
    })
}

fn message_from_row(row: &Row<'_>) -> rusqlite::Result<Message> {
    Ok(Message {
        message_id: row.get(0)?,
        posted_by: row.get(1)?,
        message_text: row.get(2)?,
        time_posted_epoch: row.get(3)?,
    })
}

fn exists(conn: &Connection, sql: &str, id: i64) -> Result<bool> {
    let found: Option<i64> = conn.query_row(sql, [id], |row| row.get(0)).optional()?;
    Ok(found.is_some())
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
