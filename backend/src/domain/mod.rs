//! Domain primitives, aggregates and services.
//!
//! Purpose: own the alumni directory state and its rules. Everything here is
//! transport agnostic; presentation code talks to it through the driving
//! ports in [`ports`].
//!
//! Public surface:
//! - Account, Profile and Post value types with validated newtypes.
//! - Directory, the synchronous aggregate enforcing the invariants.
//! - DirectoryService, the shared async facade implementing every port.
//! - Session, the current signed-in identity.
//! - DomainError and ErrorCode, the single failure envelope.

pub mod account;
pub mod auth;
pub mod demo_seed;
pub mod directory;
pub mod directory_service;
pub mod error;
pub mod ports;
pub mod post;
pub mod profile;
pub mod session;

pub use self::account::{
    Account, AccountId, AccountValidationError, AvatarReference, DisplayName, Email,
    PLACEHOLDER_AVATAR,
};
pub use self::auth::{Credential, Registration, SignInCredentials, SignInValidationError};
pub use self::directory::Directory;
pub use self::directory_service::DirectoryService;
pub use self::error::{DomainError, DomainErrorValidationError, ErrorCode};
pub use self::post::{AuthorSnapshot, Post, PostContent, PostId, PostValidationError};
pub use self::profile::{Education, Profile, ProfileUpdate, WorkExperience};
pub use self::session::Session;
