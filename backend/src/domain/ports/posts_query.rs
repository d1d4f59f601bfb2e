//! Driving port for reading the shared feed.

use async_trait::async_trait;

use crate::domain::{AccountId, DomainError, Post};

/// Domain use-case port for listing posts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostsQuery: Send + Sync {
    /// Return every post, newest first.
    ///
    /// `viewer` identifies who is looking; every post is public, so it never
    /// narrows the result.
    async fn list_posts(&self, viewer: Option<AccountId>) -> Result<Vec<Post>, DomainError>;
}
