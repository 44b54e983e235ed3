//! Builds the dashboards from the loaded configuration and secrets.

use std::time::Duration;

use outfit_core::{AppError, Config, ConfigError, Secrets};
use outfit_places::{Coordinate, PlaceClient, PlacesSettings, SearchRequest};
use outfit_weather::{ForecastProvider, ForecastSettings};

use crate::error_mapping::IntoAppError;
use crate::services::{StoreLocator, WeatherDashboard};

/// Weather dashboard for the configured endpoint and default region.
///
/// Fails when the forecast service key is missing; the dashboard has nothing
/// to show without it.
pub fn weather_dashboard(config: &Config, secrets: &Secrets) -> Result<WeatherDashboard, AppError> {
    let service_key = secrets.weather_key()?;

    let provider = ForecastProvider::new(ForecastSettings {
        endpoint: config.weather.endpoint.clone(),
        service_key: service_key.to_string(),
        timeout: Duration::from_secs(config.weather.timeout_secs),
    })
    .map_err(IntoAppError::into_app_error)?;

    Ok(WeatherDashboard::new(provider, &config.weather.default_region))
}

/// Store locator for the configured search area. The API key is entered later.
pub fn store_locator(config: &Config) -> Result<StoreLocator, AppError> {
    let places = &config.places;

    let center = Coordinate::new(places.center_lat, places.center_lon).ok_or_else(|| {
        ConfigError::Invalid(format!(
            "places center ({}, {}) is not a valid coordinate",
            places.center_lat, places.center_lon
        ))
    })?;

    let client = PlaceClient::new(PlacesSettings {
        endpoint: places.endpoint.clone(),
        timeout: Duration::from_secs(places.timeout_secs),
    })
    .map_err(IntoAppError::into_app_error)?;

    let request = SearchRequest::new(places.query.clone(), center)
        .with_radius(places.radius_m)
        .with_size(places.max_results);

    Ok(StoreLocator::new(client, request, places.zoom))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_dashboard_requires_service_key() {
        let err = weather_dashboard(&Config::default(), &Secrets::default())
            .err()
            .unwrap();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::MissingSetting(_))
        ));
    }

    #[test]
    fn weather_dashboard_uses_default_region() {
        let mut config = Config::default();
        config.weather.default_region = "대전".to_string();
        let secrets = Secrets {
            kma_api_key: Some("key".into()),
            kakao_api_key: None,
        };

        let dashboard = weather_dashboard(&config, &secrets).unwrap();
        assert_eq!(dashboard.selected_region().name, "대전");
    }

    #[test]
    fn store_locator_rejects_bad_center() {
        let mut config = Config::default();
        config.places.center_lat = 120.0;

        let err = store_locator(&config).err().unwrap();
        assert!(matches!(err, AppError::Config(ConfigError::Invalid(_))));
    }

    #[test]
    fn store_locator_builds_from_defaults() {
        let locator = store_locator(&Config::default()).unwrap();
        assert!(locator.cache().is_empty());
    }
}
