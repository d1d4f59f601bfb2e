//! Start-up wiring for the directory and its demo data.

mod config;
mod startup;

pub use config::DirectorySettings;
pub use startup::{StartupError, build_directory_service};
