pub mod app;
pub mod config;
pub mod error;
pub mod secrets;

pub use app::App;
pub use config::{Config, ConfigIssue, PlacesConfig, ValidationResult, WeatherConfig};
pub use error::{AppError, ConfigError, NetworkError, PlacesError, ReqwestErrorExt, WeatherError};
pub use secrets::Secrets;

use anyhow::Result;

/// Initialize the core application
pub fn init() -> Result<()> {
    // Logs go to stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Outfit core initialized");
    Ok(())
}
