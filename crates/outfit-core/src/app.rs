use anyhow::Result;

use crate::{Config, Secrets};

/// Main application state and lifecycle manager
pub struct App {
    config: Config,
    secrets: Secrets,
}

impl App {
    /// Create a new application instance from the on-disk config and secrets
    pub fn new() -> Result<Self> {
        let (config, _) = Config::load_validated()?;
        let secrets = Secrets::load(&config.config_dir)?;
        Ok(Self::with_parts(config, secrets))
    }

    /// Create an application instance from already loaded parts
    pub fn with_parts(config: Config, secrets: Secrets) -> Self {
        tracing::info!(
            "Application ready (config dir: {}, weather key: {}, places key: {})",
            config.config_dir.display(),
            if secrets.kma_api_key.is_some() { "set" } else { "missing" },
            if secrets.kakao_api_key.is_some() { "set" } else { "missing" },
        );

        Self { config, secrets }
    }

    /// Shutdown the application
    pub fn shutdown(&mut self) -> Result<()> {
        tracing::info!("Shutting down application");
        Ok(())
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get reference to the loaded API keys
    pub fn secrets(&self) -> &Secrets {
        &self.secrets
    }
}
