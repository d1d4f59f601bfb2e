//! Demo data loaded into a fresh directory.
//!
//! One fully populated member and one welcome post, with fixed identifiers and
//! timestamps so repeated start-ups produce the same directory. The demo
//! credential is supplied by the caller so deployments can override it.

use chrono::{DateTime, TimeZone, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{
    AccountId, AccountValidationError, Directory, DomainError, Education, PostId, Profile,
    ProfileUpdate, Registration, WorkExperience,
};

/// Sign-in email of the demo member.
pub const DEMO_EMAIL: &str = "test@example.com";
/// Credential used when no override is configured.
pub const DEFAULT_DEMO_PASSWORD: &str = "password123";

const DEMO_DISPLAY_NAME: &str = "Test User";
const DEMO_AVATAR: &str = "https://randomuser.me/api/portraits/men/1.jpg";
const DEMO_ACCOUNT_UUID: u128 = 0x6a1f_0c3e_2b4d_4e5f_8a9b_1c2d_3e4f_5a6b;
const DEMO_POST_UUID: u128 = 0x0b7e_5d21_94c3_4f8a_b6d0_7e1f_2a3b_4c5d;
const DEMO_EDUCATION_UUID: u128 = 0x3c9d_7a12_e4f5_4b6c_9d8e_0f1a_2b3c_4d5e;
const DEMO_WORK_UUID: u128 = 0x8e2f_4b61_c7d8_4a9e_a0b1_c2d3_e4f5_a6b7;

const WELCOME_TITLE: &str = "Career Advice for New Grads";
const WELCOME_BODY: &str = "Network early and often - many of my best opportunities came \
from alumni connections I made during school.";

/// Identifiers of the seeded records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSeedOutcome {
    /// The demo member.
    pub account_id: AccountId,
    /// The welcome post.
    pub post_id: PostId,
}

/// Errors raised while seeding demo data.
#[derive(Debug, Error)]
pub enum DemoSeedError {
    /// The configured credential or fixed demo values failed validation.
    #[error("demo data failed validation: {0}")]
    Validation(#[from] AccountValidationError),
    /// The directory rejected a demo record, e.g. the demo email is taken.
    #[error("demo data rejected by directory: {0}")]
    Directory(#[from] DomainError),
    /// The fixed welcome-post timestamp could not be represented.
    #[error("demo post timestamp is out of range")]
    Timestamp,
}

/// Stable identifier of the demo member.
#[must_use]
pub fn demo_account_id() -> AccountId {
    AccountId::from_uuid(Uuid::from_u128(DEMO_ACCOUNT_UUID))
}

/// Stable identifier of the welcome post.
#[must_use]
pub const fn demo_post_id() -> PostId {
    PostId::from_uuid(Uuid::from_u128(DEMO_POST_UUID))
}

fn welcome_posted_at() -> Result<DateTime<Utc>, DemoSeedError> {
    Utc.with_ymd_and_hms(2023, 2, 20, 0, 0, 0)
        .single()
        .ok_or(DemoSeedError::Timestamp)
}

fn demo_profile() -> Profile {
    Profile {
        bio: "Alumni passionate about technology and education".to_owned(),
        contact_email: DEMO_EMAIL.to_owned(),
        phone: "+1 (555) 123-4567".to_owned(),
        location: "San Francisco, CA".to_owned(),
        skills: ["React", "Node.js", "TypeScript", "UI/UX"]
            .into_iter()
            .map(str::to_owned)
            .collect(),
        education: vec![Education {
            id: Uuid::from_u128(DEMO_EDUCATION_UUID),
            ..Education::new("Stanford University", "Master of Science", "Computer Science")
                .years("2015", "2017")
        }],
        work_experience: vec![WorkExperience {
            id: Uuid::from_u128(DEMO_WORK_UUID),
            ..WorkExperience::new("Tech Corp", "Senior Software Engineer")
                .period("2019", "Present")
                .description("Leading frontend development team")
        }],
    }
}

/// Register the demo member and publish the welcome post.
///
/// # Errors
///
/// Fails when `password` is empty or the directory already holds the demo
/// email; a failure may leave the demo account registered without its post.
///
/// # Examples
/// ```
/// use alumni_connect::domain::Directory;
/// use alumni_connect::domain::demo_seed::{DEFAULT_DEMO_PASSWORD, seed_demo_data};
///
/// let mut directory = Directory::new();
/// seed_demo_data(&mut directory, DEFAULT_DEMO_PASSWORD).unwrap();
/// assert_eq!(directory.account_count(), 1);
/// assert_eq!(directory.post_count(), 1);
/// ```
pub fn seed_demo_data(
    directory: &mut Directory,
    password: &str,
) -> Result<DemoSeedOutcome, DemoSeedError> {
    let registration = Registration::try_from_parts(DEMO_EMAIL, DEMO_DISPLAY_NAME, password)?
        .with_avatar(Some(DEMO_AVATAR))?;
    let registered = directory.register(demo_account_id(), registration)?;
    let account = directory.update_profile(
        registered.id(),
        ProfileUpdate::from_account(&registered).with_profile(demo_profile()),
    )?;

    let post = directory.create_post(
        demo_post_id(),
        account.id(),
        WELCOME_TITLE.to_owned(),
        WELCOME_BODY.to_owned(),
        welcome_posted_at()?,
    )?;

    Ok(DemoSeedOutcome {
        account_id: account.id().clone(),
        post_id: post.id(),
    })
}
