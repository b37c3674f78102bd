//! Configuration handling for the TUI

use crate::submit::DelayedSubmitClient;
use crate::validation::ValidationProfile;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment override for the validation profile
const PROFILE_ENV: &str = "CADASTRO_PROFILE";
/// Environment override for the simulated submit delay
const SUBMIT_DELAY_ENV: &str = "CADASTRO_SUBMIT_DELAY_MS";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Rule variant applied to the form (`strict` or `lenient`)
    pub validation_profile: Option<ValidationProfile>,
    /// Simulated submit round trip in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Strip the password from the submit payload
    pub redact_password: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("br", "cadastro", "cadastro-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_overrides(
            std::env::var(PROFILE_ENV).ok().as_deref(),
            std::env::var(SUBMIT_DELAY_ENV).ok().as_deref(),
        )?;
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                let config: TuiConfig = serde_json::from_str(&content)
                    .with_context(|| format!("parsing {}", path.display()))?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Apply values taken from the environment
    fn apply_overrides(&mut self, profile: Option<&str>, delay_ms: Option<&str>) -> Result<()> {
        if let Some(profile) = profile {
            self.validation_profile = Some(profile.parse()?);
        }
        if let Some(delay) = delay_ms {
            let delay = delay
                .trim()
                .parse()
                .with_context(|| format!("{SUBMIT_DELAY_ENV} must be a number of milliseconds"))?;
            self.submit_delay_ms = Some(delay);
        }
        Ok(())
    }

    pub fn profile(&self) -> ValidationProfile {
        self.validation_profile.unwrap_or_default()
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| DelayedSubmitClient::default().delay())
    }

    pub fn redact_password(&self) -> bool {
        self.redact_password.unwrap_or(true)
    }
}
