//! Driving port for feed mutations.
//!
//! The [`PostCommand`] trait is the inbound contract for publishing, editing
//! and deleting posts. Raw title and body strings travel in the requests so
//! the directory can apply its checks in a fixed order.

use async_trait::async_trait;

use crate::domain::{AccountId, DomainError, Post, PostId};

/// Request to publish a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePostRequest {
    /// The authoring account.
    pub author_id: AccountId,
    /// Post title; must not be blank.
    pub title: String,
    /// Post body; must not be blank.
    pub body: String,
}

/// Request to edit a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePostRequest {
    /// The post being edited.
    pub post_id: PostId,
    /// The account performing the edit (for authorisation).
    pub acting_account_id: AccountId,
    /// Replacement title.
    pub title: String,
    /// Replacement body.
    pub body: String,
}

/// Request to delete a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePostRequest {
    /// The post being deleted.
    pub post_id: PostId,
    /// The account requesting deletion (for authorisation).
    pub acting_account_id: AccountId,
}

/// Domain use-case port for changing the feed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostCommand: Send + Sync {
    /// Publish a post at the top of the feed.
    async fn create_post(&self, request: CreatePostRequest) -> Result<Post, DomainError>;

    /// Replace title and body of a post owned by the acting account.
    async fn update_post(&self, request: UpdatePostRequest) -> Result<Post, DomainError>;

    /// Delete a post owned by the acting account.
    async fn delete_post(&self, request: DeletePostRequest) -> Result<(), DomainError>;
}
