//! Registration and login rules.

use murmur_types::api::Credentials;
use murmur_types::models::Account;
use tracing::{info, warn};

use crate::error::{RuleError, Violation};
use crate::store::AccountStore;

/// Passwords must be strictly longer than this.
pub const MIN_PASSWORD_CHARS: usize = 4;

pub struct Accounts<'a, S: AccountStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: AccountStore + ?Sized> Accounts<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Persist a new account.
    ///
    /// A taken username is reported as a conflict before the candidate's
    /// own fields are looked at, so a duplicate always yields
    /// `DuplicateAccount` whatever the password.
    pub fn register(&self, candidate: &Credentials) -> Result<Account, RuleError> {
        if self
            .store
            .find_account_by_username(&candidate.username)?
            .is_some()
        {
            return Err(RuleError::DuplicateAccount);
        }

        if candidate.username.is_empty() {
            return Err(Violation::EmptyUsername.into());
        }
        if candidate.password.chars().count() <= MIN_PASSWORD_CHARS {
            return Err(Violation::PasswordTooShort.into());
        }

        let account = self
            .store
            .insert_account(&candidate.username, &candidate.password)?;
        info!("Registered account {} ({})", account.account_id, account.username);
        Ok(account)
    }

    /// Match the candidate against the stored account with the same username.
    pub fn login(&self, candidate: &Credentials) -> Result<Account, RuleError> {
        let Some(account) = self.store.find_account_by_username(&candidate.username)? else {
            return Err(RuleError::UnknownAccount);
        };

        if account.password != candidate.password {
            warn!("Rejected login for account {}", account.account_id);
            return Err(RuleError::Unauthorized);
        }

        Ok(account)
    }

    pub fn all(&self) -> Result<Vec<Account>, RuleError> {
        Ok(self.store.list_accounts()?)
    }
}
