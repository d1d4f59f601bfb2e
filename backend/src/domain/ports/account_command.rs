//! Driving port for account mutations: registration and profile edits.

use async_trait::async_trait;

use crate::domain::{Account, AccountId, DomainError, ProfileUpdate, Registration};

/// Domain use-case port for changing accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountCommand: Send + Sync {
    /// Register a new account.
    ///
    /// Fails with [`crate::domain::ErrorCode::DuplicateAccount`] when the
    /// email is taken.
    async fn register(&self, registration: Registration) -> Result<Account, DomainError>;

    /// Replace display name, avatar and profile of an account.
    ///
    /// Every post by the account reflects the new values afterwards.
    async fn update_profile(
        &self,
        account_id: &AccountId,
        update: ProfileUpdate,
    ) -> Result<Account, DomainError>;
}
