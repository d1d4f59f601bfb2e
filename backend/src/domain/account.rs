//! Account data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::domain::auth::{Credential, Registration};
use crate::domain::profile::{Profile, ProfileUpdate};

/// Avatar applied when an account is created or updated without one.
pub const PLACEHOLDER_AVATAR: &str = "https://randomuser.me/api/portraits/lego/1.jpg";

/// Validation errors returned by the account value constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountValidationError {
    /// Identifier was empty.
    #[error("account id must not be empty")]
    EmptyId,
    /// Identifier was not a UUID.
    #[error("account id must be a valid UUID")]
    InvalidId,
    /// Email was empty.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Email was not shaped like `local@domain` or carried padding.
    #[error("email must look like name@domain")]
    InvalidEmail,
    /// Display name was blank.
    #[error("display name must not be empty")]
    EmptyDisplayName,
    /// Avatar reference was not an absolute URL.
    #[error("avatar must be an absolute URL")]
    InvalidAvatar,
    /// Credential was empty.
    #[error("password must not be empty")]
    EmptyCredential,
    /// Credential confirmation did not match the credential.
    #[error("passwords don't match")]
    CredentialMismatch,
}

/// Stable account identifier stored as a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(Uuid, String);

impl AccountId {
    /// Validate and construct an [`AccountId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, AccountValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a new random [`AccountId`].
    #[must_use]
    pub fn random() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid, uuid.to_string())
    }

    fn from_owned(id: String) -> Result<Self, AccountValidationError> {
        if id.is_empty() {
            return Err(AccountValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(AccountValidationError::InvalidId);
        }

        let parsed = Uuid::parse_str(&id).map_err(|_| AccountValidationError::InvalidId)?;
        Ok(Self(parsed, id))
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<AccountId> for String {
    fn from(value: AccountId) -> Self {
        let AccountId(_, raw) = value;
        raw
    }
}

impl TryFrom<String> for AccountId {
    type Error = AccountValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Sign-in email. Compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`].
    pub fn new(email: impl Into<String>) -> Result<Self, AccountValidationError> {
        Self::from_owned(email.into())
    }

    fn from_owned(email: String) -> Result<Self, AccountValidationError> {
        if email.trim().is_empty() {
            return Err(AccountValidationError::EmptyEmail);
        }
        if email.trim() != email || email.chars().any(char::is_whitespace) {
            return Err(AccountValidationError::InvalidEmail);
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(Self(email)),
            _ => Err(AccountValidationError::InvalidEmail),
        }
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = AccountValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Human readable label shown next to posts and in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and construct a [`DisplayName`] from owned input.
    pub fn new(display_name: impl Into<String>) -> Result<Self, AccountValidationError> {
        Self::from_owned(display_name.into())
    }

    fn from_owned(display_name: String) -> Result<Self, AccountValidationError> {
        if display_name.trim().is_empty() {
            return Err(AccountValidationError::EmptyDisplayName);
        }
        Ok(Self(display_name))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = AccountValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Absolute URL of the account's avatar image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AvatarReference(String);

impl AvatarReference {
    /// Validate and construct an [`AvatarReference`].
    pub fn new(uri: impl Into<String>) -> Result<Self, AccountValidationError> {
        Self::from_owned(uri.into())
    }

    /// Resolve optional form input, falling back to [`PLACEHOLDER_AVATAR`]
    /// when the input is missing or blank.
    pub fn from_input(uri: Option<&str>) -> Result<Self, AccountValidationError> {
        match uri.map(str::trim) {
            Some(value) if !value.is_empty() => Self::new(value),
            _ => Ok(Self::placeholder()),
        }
    }

    /// The shared placeholder avatar.
    #[must_use]
    pub fn placeholder() -> Self {
        Self(PLACEHOLDER_AVATAR.to_owned())
    }

    /// Whether this is the shared placeholder avatar.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.0 == PLACEHOLDER_AVATAR
    }

    fn from_owned(uri: String) -> Result<Self, AccountValidationError> {
        Url::parse(&uri).map_err(|_| AccountValidationError::InvalidAvatar)?;
        Ok(Self(uri))
    }
}

impl Default for AvatarReference {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl AsRef<str> for AvatarReference {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<AvatarReference> for String {
    fn from(value: AvatarReference) -> Self {
        value.0
    }
}

impl TryFrom<String> for AvatarReference {
    type Error = AccountValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Registered member of the directory.
///
/// Values handed out by the directory are owned copies; changing one never
/// reaches the stored record.
///
/// ## Invariants
/// - `id`, `email` and `credential` never change after registration.
/// - `profile` is always present; it starts empty apart from the contact
///   email, which mirrors the sign-in email.
/// - `credential` is skipped during serialisation and redacted in `Debug`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    id: AccountId,
    email: Email,
    display_name: DisplayName,
    #[serde(skip_serializing)]
    credential: Credential,
    avatar: AvatarReference,
    profile: Profile,
}

impl Account {
    /// Build a freshly registered account with an empty profile.
    #[must_use]
    pub fn register(id: AccountId, registration: Registration) -> Self {
        let (email, display_name, credential, avatar) = registration.into_parts();
        let profile = Profile::empty_for(&email);
        Self {
            id,
            email,
            display_name,
            credential,
            avatar,
            profile,
        }
    }

    /// Stable account identifier.
    #[must_use]
    pub const fn id(&self) -> &AccountId {
        &self.id
    }

    /// Sign-in email.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Display name shown to other members.
    #[must_use]
    pub const fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// Avatar image reference.
    #[must_use]
    pub const fn avatar(&self) -> &AvatarReference {
        &self.avatar
    }

    /// Extended profile record.
    #[must_use]
    pub const fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Take ownership of the profile, e.g. to seed an edit form.
    #[must_use]
    pub fn into_profile(self) -> Profile {
        self.profile
    }

    /// Exact comparison against a candidate credential.
    #[must_use]
    pub fn credential_matches(&self, candidate: &Credential) -> bool {
        self.credential == *candidate
    }

    pub(crate) fn apply_profile_update(&mut self, update: ProfileUpdate) {
        let (display_name, avatar, profile) = update.into_parts();
        self.display_name = display_name;
        self.avatar = avatar;
        self.profile = profile;
    }

    /// `needle_lowercase` must already be lower-cased.
    pub(crate) fn matches_search(&self, needle_lowercase: &str) -> bool {
        self.display_name
            .as_ref()
            .to_lowercase()
            .contains(needle_lowercase)
            || self.email.as_ref().to_lowercase().contains(needle_lowercase)
    }
}

#[cfg(test)]
mod tests;
