//! Domain-level error types.
//!
//! These errors are transport agnostic. A presentation layer maps them to
//! user-facing messages, HTTP responses, or any other envelope it needs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A required field is empty or otherwise fails validation.
    InvalidRequest,
    /// The email/credential pair did not match a registered account.
    AuthenticationFailed,
    /// The acting account does not own the resource it tried to change.
    Forbidden,
    /// The referenced account or post does not exist.
    NotFound,
    /// Another account already uses the requested email.
    DuplicateAccount,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` must be non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use alumni_connect::domain::{DomainError, ErrorCode};
///
/// let err = DomainError::not_found("missing");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
#[serde(try_from = "DomainErrorDto", into = "DomainErrorDto")]
pub struct DomainError {
    code: ErrorCode,
    message: String,
    details: Option<Value>,
}

/// Validation errors emitted by the constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainErrorValidationError {
    /// The message was blank.
    #[error("error message must not be empty")]
    EmptyMessage,
}

impl DomainError {
    /// Create a new error, panicking if validation fails.
    ///
    /// # Panics
    /// Panics when `message` is blank. Use [`DomainError::try_new`] for untrusted
    /// input.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(value) => value,
            Err(err) => panic!("error messages must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the message content.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, DomainErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(DomainErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            code,
            message,
            details: None,
        })
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to callers.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary error details.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use alumni_connect::domain::DomainError;
    /// use serde_json::json;
    ///
    /// let err = DomainError::invalid_request("bad").with_details(json!({ "field": "title" }));
    /// assert!(err.details().is_some());
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::AuthenticationFailed`].
    pub fn authentication_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthenticationFailed, message)
    }

    /// Convenience constructor for [`ErrorCode::Forbidden`].
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::DuplicateAccount`].
    pub fn duplicate_account(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DuplicateAccount, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DomainError {}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DomainErrorDto {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl From<DomainError> for DomainErrorDto {
    fn from(value: DomainError) -> Self {
        Self {
            code: value.code,
            message: value.message,
            details: value.details,
        }
    }
}

impl TryFrom<DomainErrorDto> for DomainError {
    type Error = DomainErrorValidationError;

    fn try_from(value: DomainErrorDto) -> Result<Self, Self::Error> {
        let DomainErrorDto {
            code,
            message,
            details,
        } = value;

        let mut error = Self::try_new(code, message)?;
        error.details = details;
        Ok(error)
    }
}
