//! In-memory directory of accounts and feed posts.
//!
//! [`Directory`] is the single owner of account and post state and enforces
//! every invariant of the data model:
//! - emails are unique across accounts;
//! - every post references an existing author and carries an up-to-date
//!   snapshot of that author;
//! - only the author may edit or delete a post.
//!
//! The aggregate is synchronous and takes identifiers and timestamps from the
//! caller, which keeps it deterministic. Sharing and clocks live in
//! [`crate::domain::DirectoryService`].

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::account::{Account, AccountId};
use crate::domain::auth::{Registration, SignInCredentials};
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostContent, PostId, PostValidationError};
use crate::domain::profile::ProfileUpdate;

#[derive(Debug, Clone)]
struct StoredPost {
    sequence: u64,
    post: Post,
}

/// Account mapping plus newest-first post sequence.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    accounts: HashMap<AccountId, Account>,
    registration_order: Vec<AccountId>,
    posts: Vec<StoredPost>,
    next_sequence: u64,
}

fn content_error(error: PostValidationError) -> DomainError {
    DomainError::invalid_request(error.to_string()).with_details(json!({
        "field": error.field(),
        "code": "empty_field",
    }))
}

fn account_not_found(id: &AccountId) -> DomainError {
    DomainError::not_found(format!("account {id} not found")).with_details(json!({
        "accountId": id,
        "code": "account_not_found",
    }))
}

fn post_not_found(id: PostId) -> DomainError {
    DomainError::not_found(format!("post {id} not found")).with_details(json!({
        "postId": id,
        "code": "post_not_found",
    }))
}

impl Directory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered accounts.
    #[must_use]
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Number of published posts.
    #[must_use]
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    /// Register a new account under `id`.
    ///
    /// Fails with [`crate::domain::ErrorCode::DuplicateAccount`] when the email
    /// is already registered; the directory is left untouched.
    pub fn register(
        &mut self,
        id: AccountId,
        registration: Registration,
    ) -> Result<Account, DomainError> {
        if self
            .accounts
            .values()
            .any(|account| account.email() == registration.email())
        {
            return Err(DomainError::duplicate_account("email already in use").with_details(json!({
                "field": "email",
                "code": "email_taken",
            })));
        }
        if self.accounts.contains_key(&id) {
            return Err(DomainError::internal(format!("account id {id} already allocated")));
        }

        let account = Account::register(id.clone(), registration);
        self.accounts.insert(id.clone(), account.clone());
        self.registration_order.push(id);
        Ok(account)
    }

    /// Find the account whose email and credential both match exactly.
    pub fn authenticate(&self, credentials: &SignInCredentials) -> Result<Account, DomainError> {
        self.accounts
            .values()
            .find(|account| account.email().as_ref() == credentials.email())
            .filter(|account| account.credential_matches(credentials.credential()))
            .cloned()
            .ok_or_else(|| DomainError::authentication_failed("invalid email or password"))
    }

    /// Fetch a copy of the account with `id`.
    pub fn find_account(&self, id: &AccountId) -> Result<Account, DomainError> {
        self.accounts
            .get(id)
            .cloned()
            .ok_or_else(|| account_not_found(id))
    }

    /// Replace the mutable account fields and refresh every post snapshot by
    /// that account.
    pub fn update_profile(
        &mut self,
        id: &AccountId,
        update: ProfileUpdate,
    ) -> Result<Account, DomainError> {
        let account = self.accounts.get_mut(id).ok_or_else(|| account_not_found(id))?;
        account.apply_profile_update(update);
        let updated = account.clone();

        for stored in &mut self.posts {
            if stored.post.is_authored_by(id) {
                stored.post.refresh_author(&updated);
            }
        }
        Ok(updated)
    }

    /// Case-insensitive substring search over display names and emails.
    ///
    /// A blank query returns no accounts rather than every account. Results
    /// follow registration order.
    #[must_use]
    pub fn search_accounts(&self, query: &str) -> Vec<Account> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.registration_order
            .iter()
            .filter_map(|id| self.accounts.get(id))
            .filter(|account| account.matches_search(&needle))
            .cloned()
            .collect()
    }

    /// Publish a post at the front of the feed.
    pub fn create_post(
        &mut self,
        id: PostId,
        author_id: &AccountId,
        title: String,
        body: String,
        created_at: DateTime<Utc>,
    ) -> Result<Post, DomainError> {
        let content = PostContent::try_new(title, body).map_err(content_error)?;
        let author = self
            .accounts
            .get(author_id)
            .ok_or_else(|| account_not_found(author_id))?;
        if self.posts.iter().any(|stored| stored.post.id() == id) {
            return Err(DomainError::internal(format!("post id {id} already allocated")));
        }

        let post = Post::new(id, author, content, created_at);
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.posts.insert(
            0,
            StoredPost {
                sequence,
                post: post.clone(),
            },
        );
        Ok(post)
    }

    /// Replace the title and body of a post owned by `acting_account`.
    ///
    /// Checks run in order: the post must exist, the actor must be its author,
    /// then the new content must be non-empty.
    pub fn update_post(
        &mut self,
        id: PostId,
        acting_account: &AccountId,
        title: String,
        body: String,
    ) -> Result<Post, DomainError> {
        let stored = self
            .posts
            .iter_mut()
            .find(|stored| stored.post.id() == id)
            .ok_or_else(|| post_not_found(id))?;
        if !stored.post.is_authored_by(acting_account) {
            return Err(DomainError::forbidden("only the author may edit this post"));
        }
        let content = PostContent::try_new(title, body).map_err(content_error)?;

        stored.post.replace_content(content);
        Ok(stored.post.clone())
    }

    /// Remove a post owned by `acting_account`. There is no undo.
    pub fn delete_post(
        &mut self,
        id: PostId,
        acting_account: &AccountId,
    ) -> Result<(), DomainError> {
        let index = self
            .posts
            .iter()
            .position(|stored| stored.post.id() == id)
            .ok_or_else(|| post_not_found(id))?;
        let is_author = self
            .posts
            .get(index)
            .is_some_and(|stored| stored.post.is_authored_by(acting_account));
        if !is_author {
            return Err(DomainError::forbidden("only the author may delete this post"));
        }

        self.posts.remove(index);
        Ok(())
    }

    /// Every post, newest `created_at` first; ties go to the most recent
    /// insertion.
    #[must_use]
    pub fn list_posts(&self) -> Vec<Post> {
        let mut ordered: Vec<&StoredPost> = self.posts.iter().collect();
        ordered.sort_by(|a, b| {
            b.post
                .created_at()
                .cmp(&a.post.created_at())
                .then_with(|| b.sequence.cmp(&a.sequence))
        });
        ordered
            .into_iter()
            .map(|stored| stored.post.clone())
            .collect()
    }
}
