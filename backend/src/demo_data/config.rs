//! Directory start-up configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::demo_seed::DEFAULT_DEMO_PASSWORD;

/// Configuration values controlling how the directory starts.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ALUMNI")]
pub struct DirectorySettings {
    /// Load the demo member and welcome post on start-up. Unset means enabled.
    pub seed_demo_data: Option<bool>,
    /// Override for the demo member's credential.
    pub demo_password: Option<String>,
}

impl DirectorySettings {
    /// Whether demo data is loaded, defaulting to enabled.
    pub fn seed_demo_data(&self) -> bool {
        self.seed_demo_data.unwrap_or(true)
    }

    /// Return the demo credential, falling back to the default.
    pub fn demo_password(&self) -> &str {
        self.demo_password.as_deref().unwrap_or(DEFAULT_DEMO_PASSWORD)
    }
}
