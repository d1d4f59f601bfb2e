//! Directory construction at start-up.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use tracing::info;

use crate::demo_data::config::DirectorySettings;
use crate::domain::demo_seed::{DemoSeedError, seed_demo_data};
use crate::domain::{Directory, DirectoryService};

/// Errors returned while building the directory.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The configured demo password is blank once trimmed.
    #[error("demo password must not be blank")]
    BlankDemoPassword,
    /// Demo data could not be applied.
    #[error("demo data seeding error: {0}")]
    Seeding(#[from] DemoSeedError),
}

/// Build the shared directory service, seeding demo data when enabled.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
///
/// use alumni_connect::demo_data::{DirectorySettings, build_directory_service};
/// use mockable::DefaultClock;
///
/// let settings = DirectorySettings {
///     seed_demo_data: Some(false),
///     demo_password: None,
/// };
/// let service = build_directory_service(&settings, Arc::new(DefaultClock)).unwrap();
/// assert_eq!(service.account_count().unwrap(), 0);
/// ```
pub fn build_directory_service(
    settings: &DirectorySettings,
    clock: Arc<dyn Clock>,
) -> Result<DirectoryService, StartupError> {
    let mut directory = Directory::new();
    if !settings.seed_demo_data() {
        info!(reason = "disabled", "demo data seeding skipped");
        return Ok(DirectoryService::with_directory(directory, clock));
    }

    let password = settings.demo_password();
    if password.trim().is_empty() {
        return Err(StartupError::BlankDemoPassword);
    }

    let outcome = seed_demo_data(&mut directory, password)?;
    info!(
        account_id = %outcome.account_id,
        post_id = %outcome.post_id,
        "demo data seeded"
    );
    Ok(DirectoryService::with_directory(directory, clock))
}
