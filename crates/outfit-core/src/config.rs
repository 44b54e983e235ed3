use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::ConfigError;

const APP_DIR: &str = "outfit";
const CONFIG_FILE: &str = "config.toml";

/// A problem found in one config field, e.g. `places.radius_m`
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.field)
    }
}

/// Outcome of [`Config::validate`]; warnings never block startup
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigIssue>,
    pub warnings: Vec<ConfigIssue>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, field: &'static str, message: impl Into<String>) {
        let message = message.into();
        self.errors.push(ConfigIssue { field, message });
    }

    fn warning(&mut self, field: &'static str, message: impl Into<String>) {
        let message = message.into();
        self.warnings.push(ConfigIssue { field, message });
    }

    /// Every error on one line, separated by `; `
    pub fn error_summary(&self) -> String {
        let issues: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        issues.join("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory (also holds secrets.toml)
    pub config_dir: PathBuf,

    /// Short-term forecast settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Store locator settings
    #[serde(default)]
    pub places: PlacesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Short-term forecast endpoint
    #[serde(default = "default_weather_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Region selected when the dashboard opens
    #[serde(default = "default_region")]
    pub default_region: String,
}

fn default_weather_endpoint() -> String {
    "http://apis.data.go.kr/1360000/VilageFcstInfoService_2.0/getVilageFcst".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_region() -> String {
    "서울".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            endpoint: default_weather_endpoint(),
            timeout_secs: default_timeout_secs(),
            default_region: default_region(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    /// Keyword search endpoint
    #[serde(default = "default_places_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Free-text search query
    #[serde(default = "default_query")]
    pub query: String,

    /// Search center latitude (Cheonan city hall)
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,

    /// Search center longitude (Cheonan city hall)
    #[serde(default = "default_center_lon")]
    pub center_lon: f64,

    /// Search radius in meters
    #[serde(default = "default_radius_m")]
    pub radius_m: u32,

    /// Results per search
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    /// Map zoom level around the selected store
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

fn default_places_endpoint() -> String {
    "https://dapi.kakao.com/v2/local/search/keyword.json".to_string()
}

fn default_query() -> String {
    "천안 옷가게".to_string()
}

fn default_center_lat() -> f64 {
    36.8151
}

fn default_center_lon() -> f64 {
    127.1139
}

fn default_radius_m() -> u32 {
    20_000
}

fn default_max_results() -> u32 {
    15
}

fn default_zoom() -> u8 {
    16
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            endpoint: default_places_endpoint(),
            timeout_secs: default_timeout_secs(),
            query: default_query(),
            center_lat: default_center_lat(),
            center_lon: default_center_lon(),
            radius_m: default_radius_m(),
            max_results: default_max_results(),
            zoom: default_zoom(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);

        Self {
            config_dir,
            weather: WeatherConfig::default(),
            places: PlacesConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, creating default if it doesn't exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let mut config = Self::default();
            if let Some(parent) = config_path.parent() {
                config.config_dir = parent.to_path_buf();
            }
            config.save_to(config_path)?;
            tracing::info!("Wrote default config to {}", config_path.display());
            return Ok(config);
        }

        let contents =
            std::fs::read_to_string(config_path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            ConfigError::ParseError(format!("{}: {}", config_path.display(), e.message()))
        })?;

        Ok(config)
    }

    /// Load and validate; errors abort, warnings are logged and returned
    pub fn load_validated() -> Result<(Self, ValidationResult)> {
        let config = Self::load()?;
        let validation = config.validate();

        anyhow::ensure!(
            validation.is_valid(),
            "Invalid configuration: {}",
            validation.error_summary()
        );
        for issue in &validation.warnings {
            tracing::warn!("Config: {}", issue);
        }

        Ok((config, validation))
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();
        let (weather, places) = (&self.weather, &self.places);

        check_endpoint(&mut result, "weather.endpoint", &weather.endpoint);
        check_endpoint(&mut result, "places.endpoint", &places.endpoint);
        check_timeout(&mut result, "weather.timeout_secs", weather.timeout_secs);
        check_timeout(&mut result, "places.timeout_secs", places.timeout_secs);

        if places.query.trim().is_empty() {
            result.error("places.query", "Search query must not be empty");
        }

        // Keyword search caps: 20 km radius, 15 results per page
        if !(1..=20_000).contains(&places.radius_m) {
            result.error("places.radius_m", "Radius must be between 1 and 20000 meters");
        }
        if !(1..=15).contains(&places.max_results) {
            result.error("places.max_results", "Result count must be between 1 and 15");
        }

        if !(-90.0..=90.0).contains(&places.center_lat) {
            result.error("places.center_lat", "Latitude must be within -90..=90");
        }
        if !(-180.0..=180.0).contains(&places.center_lon) {
            result.error("places.center_lon", "Longitude must be within -180..=180");
        }

        if !(1..=20).contains(&places.zoom) {
            result.warning("places.zoom", "Zoom outside 1..=20, map may render oddly");
        }

        result
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(config_path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join(APP_DIR);

        Ok(config_dir.join(CONFIG_FILE))
    }
}

fn check_endpoint(result: &mut ValidationResult, field: &'static str, value: &str) {
    let url = match Url::parse(value) {
        Ok(url) => url,
        Err(e) => return result.error(field, format!("Invalid URL: {}", e)),
    };

    if !matches!(url.scheme(), "http" | "https") {
        result.error(field, format!("URL must use http or https, got {}", url.scheme()));
    }
    if url.host().is_none() {
        result.error(field, "URL has no host");
    }
}

fn check_timeout(result: &mut ValidationResult, field: &'static str, secs: u64) {
    if secs == 0 {
        result.error(field, "Timeout must be greater than 0");
    } else if secs > 60 {
        result.warning(field, "Timeout is unusually long (>60s)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_default_config() {
        let config = Config::default();
        let result = config.validate();
        assert!(result.is_valid(), "Default config should be valid: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_default_places_settings() {
        let places = PlacesConfig::default();
        assert_eq!(places.radius_m, 20_000);
        assert_eq!(places.max_results, 15);
        assert_eq!(places.timeout_secs, 10);
        assert_eq!(places.zoom, 16);
    }

    #[test]
    fn test_invalid_url() {
        let mut config = Config::default();
        config.weather.endpoint = "not-a-url".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "weather.endpoint"));
    }

    #[test]
    fn test_invalid_url_scheme() {
        let mut config = Config::default();
        config.places.endpoint = "ftp://dapi.kakao.com/search".to_string();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.message.contains("http or https")));
    }

    #[test]
    fn test_zero_timeout_is_error() {
        let mut config = Config::default();
        config.weather.timeout_secs = 0;
        let result = config.validate();
        assert!(result.errors.iter().any(|e| e.field == "weather.timeout_secs"));
    }

    #[test]
    fn test_radius_above_api_cap() {
        let mut config = Config::default();
        config.places.radius_m = 20_001;
        let result = config.validate();
        assert!(result.errors.iter().any(|e| e.field == "places.radius_m"));
    }

    #[test]
    fn test_odd_zoom_is_warning() {
        let mut config = Config::default();
        config.places.zoom = 30;
        let result = config.validate();
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.field == "places.zoom"));
    }

    #[test]
    fn test_validation_result_error_summary() {
        let mut result = ValidationResult::default();
        result.error("field1", "error1");
        result.error("field2", "error2");
        let summary = result.error_summary();
        assert!(summary.contains("field1"));
        assert!(summary.contains("field2"));
    }

    #[test]
    fn test_load_from_writes_default_then_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let created = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created.config_dir, dir.path());

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.weather.default_region, "서울");
        assert_eq!(loaded.places.query, "천안 옷가게");
    }

    #[test]
    fn test_partial_file_uses_section_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            format!(
                "config_dir = {:?}\n[weather]\ndefault_region = \"부산\"\n",
                dir.path().display().to_string()
            ),
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.weather.default_region, "부산");
        assert_eq!(config.weather.timeout_secs, 10);
        assert_eq!(config.places.radius_m, 20_000);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[weather
default_region = 서울
").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::ParseError(_))
        ));
        assert!(err.to_string().contains("config.toml"));
    }
}
