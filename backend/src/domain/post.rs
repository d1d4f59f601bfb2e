//! Feed posts and the author snapshot they carry.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::account::{Account, AccountId, AvatarReference, DisplayName, Email};
use crate::domain::profile::Profile;

/// Validation errors for post content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PostValidationError {
    /// Title was blank.
    #[error("post title must not be empty")]
    EmptyTitle,
    /// Body was blank.
    #[error("post body must not be empty")]
    EmptyBody,
}

impl PostValidationError {
    /// Name of the offending field, as it appears in serialised posts.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::EmptyTitle => "title",
            Self::EmptyBody => "body",
        }
    }
}

/// Stable post identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(Uuid);

impl PostId {
    /// Generate a new random [`PostId`].
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for PostId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Title and body of a post.
///
/// ## Invariants
/// - Neither field is blank. Values are stored exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostContent {
    title: String,
    body: String,
}

impl PostContent {
    /// Validate raw title and body input.
    ///
    /// # Examples
    /// ```
    /// use alumni_connect::domain::{PostContent, PostValidationError};
    ///
    /// assert!(PostContent::try_new("Hello", "First post").is_ok());
    /// assert_eq!(
    ///     PostContent::try_new("Hello", "  "),
    ///     Err(PostValidationError::EmptyBody)
    /// );
    /// ```
    pub fn try_new(
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, PostValidationError> {
        let title = title.into();
        let body = body.into();
        if title.trim().is_empty() {
            return Err(PostValidationError::EmptyTitle);
        }
        if body.trim().is_empty() {
            return Err(PostValidationError::EmptyBody);
        }
        Ok(Self { title, body })
    }

    /// Post title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Post body.
    #[must_use]
    pub fn body(&self) -> &str {
        self.body.as_str()
    }
}

/// Copy of the author's public account data embedded in every post.
///
/// The directory refreshes these copies whenever the author edits their
/// profile, so a snapshot never lags behind the account it was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSnapshot {
    id: AccountId,
    email: Email,
    display_name: DisplayName,
    avatar: AvatarReference,
    profile: Profile,
}

impl AuthorSnapshot {
    /// Author account id.
    #[must_use]
    pub const fn id(&self) -> &AccountId {
        &self.id
    }

    /// Author email.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Author display name at the time of the last refresh.
    #[must_use]
    pub const fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// Author avatar at the time of the last refresh.
    #[must_use]
    pub const fn avatar(&self) -> &AvatarReference {
        &self.avatar
    }

    /// Author profile at the time of the last refresh.
    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }
}

impl From<&Account> for AuthorSnapshot {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id().clone(),
            email: account.email().clone(),
            display_name: account.display_name().clone(),
            avatar: account.avatar().clone(),
            profile: account.profile().clone(),
        }
    }
}

/// Entry in the shared feed.
///
/// ## Invariants
/// - `id`, `author.id` and `created_at` never change after creation.
/// - Only `content` is editable, and only by the author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    id: PostId,
    #[serde(flatten)]
    content: PostContent,
    author: AuthorSnapshot,
    created_at: DateTime<Utc>,
}

impl Post {
    /// Build a post authored by `author`.
    #[must_use]
    pub fn new(
        id: PostId,
        author: &Account,
        content: PostContent,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            content,
            author: AuthorSnapshot::from(author),
            created_at,
        }
    }

    /// Stable post identifier.
    #[must_use]
    pub const fn id(&self) -> PostId {
        self.id
    }

    /// Post title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.content.title()
    }

    /// Post body.
    #[must_use]
    pub fn body(&self) -> &str {
        self.content.body()
    }

    /// Denormalised author data.
    #[must_use]
    pub const fn author(&self) -> &AuthorSnapshot {
        &self.author
    }

    /// Identifier of the authoring account.
    #[must_use]
    pub const fn author_id(&self) -> &AccountId {
        &self.author.id
    }

    /// Creation timestamp; the feed sort key.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn is_authored_by(&self, account_id: &AccountId) -> bool {
        self.author.id == *account_id
    }

    pub(crate) fn replace_content(&mut self, content: PostContent) {
        self.content = content;
    }

    pub(crate) fn refresh_author(&mut self, author: &Account) {
        self.author = AuthorSnapshot::from(author);
    }
}
