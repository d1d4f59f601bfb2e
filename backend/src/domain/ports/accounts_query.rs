//! Driving port for account lookups.
//!
//! Covers viewing a single member's profile and the member search box.

use async_trait::async_trait;

use crate::domain::{Account, AccountId, DomainError};

/// Domain use-case port for reading accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountsQuery: Send + Sync {
    /// Return the account with `account_id`.
    async fn find_account(&self, account_id: &AccountId) -> Result<Account, DomainError>;

    /// Case-insensitive search over display names and emails.
    ///
    /// A blank query yields an empty list.
    async fn search_accounts(&self, query: &str) -> Result<Vec<Account>, DomainError>;
}
