//! Driving port for sign-in use-cases.
//!
//! In hexagonal terms this is a *driving* port: a presentation layer or the
//! [`crate::domain::Session`] calls it to check credentials without knowing
//! which store backs the directory.

use async_trait::async_trait;

use crate::domain::{Account, DomainError, SignInCredentials};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return a copy of the matching account.
    ///
    /// Fails with [`crate::domain::ErrorCode::AuthenticationFailed`] when no
    /// account has exactly this email and credential.
    async fn authenticate(&self, credentials: &SignInCredentials) -> Result<Account, DomainError>;
}
