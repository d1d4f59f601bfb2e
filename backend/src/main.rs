//! Directory entry-point: loads configuration, builds the directory and
//! reports what it holds.

use std::env;
use std::sync::Arc;

use color_eyre::eyre::{Context, Result};
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use alumni_connect::demo_data::{DirectorySettings, build_directory_service};
use alumni_connect::domain::ports::PostsQuery;

/// Application bootstrap.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = DirectorySettings::load_from_iter(env::args_os())
        .context("failed to load directory settings")?;
    let service = build_directory_service(&settings, Arc::new(DefaultClock))
        .context("failed to build directory")?;

    let accounts = service.account_count()?;
    let posts = service.list_posts(None).await?.len();
    info!(accounts, posts, "directory ready");
    Ok(())
}
