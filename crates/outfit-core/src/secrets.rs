//! API keys for the forecast and place search services.
//!
//! Keys live in `secrets.toml` next to the config file and can be overridden
//! through environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const SECRETS_FILE: &str = "secrets.toml";

pub const KMA_API_KEY_ENV: &str = "KMA_API_KEY";
pub const KAKAO_API_KEY_ENV: &str = "KAKAO_API_KEY";

/// API keys consumed by the dashboards
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Secrets {
    /// Short-term forecast service key
    #[serde(rename = "KMA_API_KEY", default)]
    pub kma_api_key: Option<String>,

    /// Place search REST key
    #[serde(rename = "kakao_api_key", default)]
    pub kakao_api_key: Option<String>,
}

impl Secrets {
    /// Path of the secrets file inside a config directory
    pub fn path_in(config_dir: &Path) -> PathBuf {
        config_dir.join(SECRETS_FILE)
    }

    /// Load secrets from the config directory and apply environment overrides.
    ///
    /// A missing file is not an error; it simply yields no keys.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let mut secrets = Self::load_file(&Self::path_in(config_dir))?;
        secrets.apply_overrides(|name| std::env::var(name).ok());
        Ok(secrets)
    }

    /// Load secrets from a file without consulting the environment
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No secrets file at {}", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).context("Failed to read secrets file")?;
        // Values are left out of the message so keys never reach the logs
        let secrets: Secrets = toml::from_str(&contents).map_err(|e| {
            ConfigError::ParseError(format!("{}: {}", path.display(), e.message()))
        })?;

        tracing::info!("Loaded secrets from {}", path.display());
        Ok(secrets.normalized())
    }

    /// Override keys with values from `lookup` (normally the process environment)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = non_blank(lookup(KMA_API_KEY_ENV)) {
            self.kma_api_key = Some(key);
        }
        if let Some(key) = non_blank(lookup(KAKAO_API_KEY_ENV)) {
            self.kakao_api_key = Some(key);
        }
    }

    /// Forecast service key; the weather dashboard cannot run without it
    pub fn weather_key(&self) -> Result<&str, ConfigError> {
        self.kma_api_key.as_deref().ok_or_else(|| {
            ConfigError::MissingSetting(format!(
                "{} (add it to {} or the environment)",
                KMA_API_KEY_ENV, SECRETS_FILE
            ))
        })
    }

    /// Place search key, if one was configured
    pub fn places_key(&self) -> Option<&str> {
        self.kakao_api_key.as_deref()
    }

    fn normalized(self) -> Self {
        Self {
            kma_api_key: non_blank(self.kma_api_key),
            kakao_api_key: non_blank(self.kakao_api_key),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
