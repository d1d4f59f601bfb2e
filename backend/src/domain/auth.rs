//! Authentication primitives: credentials, sign-in payloads and registrations.
//!
//! Keep form parsing outside the directory by exposing constructors that
//! validate string inputs before a caller talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::account::{AccountValidationError, AvatarReference, DisplayName, Email};

/// Opaque secret compared by exact byte equality.
///
/// The demo stores credentials in clear text; the buffer is zeroed on drop and
/// never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(Zeroizing<String>);

impl Credential {
    /// Wrap a non-empty secret.
    pub fn new(secret: impl Into<String>) -> Result<Self, AccountValidationError> {
        let secret = Zeroizing::new(secret.into());
        if secret.is_empty() {
            return Err(AccountValidationError::EmptyCredential);
        }
        Ok(Self(secret))
    }

    /// The raw secret.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Domain error returned when sign-in payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignInValidationError {
    /// Email was missing.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Password was missing.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Sign-in credentials used by [`crate::domain::ports::LoginService`].
///
/// ## Invariants
/// - `email` is kept verbatim. Lookups are exact and case-sensitive, so no
///   trimming or case folding happens here.
/// - `credential` is non-empty and retains caller-provided whitespace.
///
/// # Examples
/// ```
/// use alumni_connect::domain::SignInCredentials;
///
/// let creds = SignInCredentials::try_from_parts("test@example.com", "password123").unwrap();
/// assert_eq!(creds.email(), "test@example.com");
/// assert_eq!(creds.credential().expose(), "password123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInCredentials {
    email: String,
    credential: Credential,
}

impl SignInCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, SignInValidationError> {
        if email.is_empty() {
            return Err(SignInValidationError::EmptyEmail);
        }
        let credential =
            Credential::new(password).map_err(|_| SignInValidationError::EmptyPassword)?;

        Ok(Self {
            email: email.to_owned(),
            credential,
        })
    }

    /// Email string used for the account lookup.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Credential supplied by the caller.
    #[must_use]
    pub const fn credential(&self) -> &Credential {
        &self.credential
    }
}

/// Validated sign-up request.
///
/// # Examples
/// ```
/// use alumni_connect::domain::Registration;
///
/// let registration = Registration::try_from_parts("ada@example.com", "Ada", "s3cret")
///     .and_then(|r| r.with_avatar(Some("")))
///     .unwrap();
/// assert!(registration.avatar().is_placeholder());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    email: Email,
    display_name: DisplayName,
    credential: Credential,
    avatar: AvatarReference,
}

impl Registration {
    /// Validate the mandatory registration fields. The avatar starts as the
    /// placeholder.
    pub fn try_from_parts(
        email: impl Into<String>,
        display_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, AccountValidationError> {
        Ok(Self {
            email: Email::new(email)?,
            display_name: DisplayName::new(display_name)?,
            credential: Credential::new(password)?,
            avatar: AvatarReference::placeholder(),
        })
    }

    /// Replace the avatar from optional form input; blank input keeps the
    /// placeholder.
    pub fn with_avatar(mut self, uri: Option<&str>) -> Result<Self, AccountValidationError> {
        self.avatar = AvatarReference::from_input(uri)?;
        Ok(self)
    }

    /// Check the "confirm password" field of a sign-up form.
    pub fn confirm_credential(&self, confirmation: &str) -> Result<(), AccountValidationError> {
        if self.credential.expose() == confirmation {
            Ok(())
        } else {
            Err(AccountValidationError::CredentialMismatch)
        }
    }

    /// Requested sign-in email.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Requested display name.
    #[must_use]
    pub const fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// Requested avatar.
    #[must_use]
    pub const fn avatar(&self) -> &AvatarReference {
        &self.avatar
    }

    pub(crate) fn into_parts(self) -> (Email, DisplayName, Credential, AvatarReference) {
        (self.email, self.display_name, self.credential, self.avatar)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", SignInValidationError::EmptyEmail)]
    #[case("user@example.com", "", SignInValidationError::EmptyPassword)]
    fn invalid_sign_in(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: SignInValidationError,
    ) {
        let err = SignInCredentials::try_from_parts(email, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case(" Test@Example.com ", " padded ")]
    #[case("alice@example.com", "correct horse battery staple")]
    fn sign_in_keeps_inputs_verbatim(#[case] email: &str, #[case] password: &str) {
        let creds =
            SignInCredentials::try_from_parts(email, password).expect("valid inputs succeed");
        assert_eq!(creds.email(), email);
        assert_eq!(creds.credential().expose(), password);
    }

    #[rstest]
    fn credential_debug_is_redacted() {
        let credential = Credential::new("hunter2").expect("credential");
        let rendered = format!("{credential:?}");
        assert!(!rendered.contains("hunter2"));
    }

    #[rstest]
    #[case("", "Ada", "pw", AccountValidationError::EmptyEmail)]
    #[case("not-an-email", "Ada", "pw", AccountValidationError::InvalidEmail)]
    #[case("ada@example.com", "   ", "pw", AccountValidationError::EmptyDisplayName)]
    #[case("ada@example.com", "Ada", "", AccountValidationError::EmptyCredential)]
    fn invalid_registration(
        #[case] email: &str,
        #[case] display_name: &str,
        #[case] password: &str,
        #[case] expected: AccountValidationError,
    ) {
        let err = Registration::try_from_parts(email, display_name, password)
            .expect_err("invalid registration must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn registration_accepts_custom_avatar() {
        let registration = Registration::try_from_parts("ada@example.com", "Ada", "pw")
            .and_then(|r| r.with_avatar(Some("https://example.com/ada.png")))
            .expect("valid registration");
        assert_eq!(registration.avatar().as_ref(), "https://example.com/ada.png");
    }

    #[rstest]
    fn registration_rejects_relative_avatar() {
        let err = Registration::try_from_parts("ada@example.com", "Ada", "pw")
            .and_then(|r| r.with_avatar(Some("ada.png")))
            .expect_err("relative avatar must fail");
        assert_eq!(err, AccountValidationError::InvalidAvatar);
    }

    #[rstest]
    #[case("pw", true)]
    #[case("pw ", false)]
    #[case("PW", false)]
    fn confirmation_must_match_exactly(#[case] confirmation: &str, #[case] matches: bool) {
        let registration =
            Registration::try_from_parts("ada@example.com", "Ada", "pw").expect("registration");
        assert_eq!(
            registration.confirm_credential(confirmation).is_ok(),
            matches
        );
    }
}
