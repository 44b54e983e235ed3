use crate::base_time::BaseDateTime;
use crate::types::{GridPoint, WeatherError};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

/// Rows requested per call; one page covers a whole issue for one grid point
const ROWS_PER_PAGE: &str = "1000";

/// Connection settings for the short-term forecast endpoint
#[derive(Debug, Clone)]
pub struct ForecastSettings {
    pub endpoint: String,
    pub service_key: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ForecastProvider {
    client: Arc<Client>,
    endpoint: String,
    service_key: String,
}

impl ForecastProvider {
    pub fn new(settings: ForecastSettings) -> Result<Self, WeatherError> {
        let client = Client::builder().timeout(settings.timeout).build()?;

        Ok(Self {
            client: Arc::new(client),
            endpoint: settings.endpoint,
            service_key: settings.service_key,
        })
    }

    /// Fetch the forecast issued at `base` for a grid point.
    ///
    /// Transport failures and non-2xx statuses are returned as
    /// [`WeatherError::Network`] with the request URL removed, since its
    /// query carries the service key. The decoded body is returned unchanged.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self, base: &BaseDateTime, grid: GridPoint) -> Result<Value, WeatherError> {
        let base_date = base.base_date();
        let base_time = base.base_time();
        let nx = grid.nx.to_string();
        let ny = grid.ny.to_string();

        let query = [
            ("serviceKey", self.service_key.as_str()),
            ("pageNo", "1"),
            ("numOfRows", ROWS_PER_PAGE),
            ("dataType", "JSON"),
            ("base_date", base_date.as_str()),
            ("base_time", base_time.as_str()),
            ("nx", nx.as_str()),
            ("ny", ny.as_str()),
        ];

        let response = self
            .client
            .get(&self.endpoint)
            .query(&query)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(without_url)?;

        let body: Value = response.json().await.map_err(without_url)?;
        tracing::info!("Fetched forecast issued {} for {},{}", base, grid.nx, grid.ny);
        Ok(body)
    }
}

fn without_url(e: reqwest::Error) -> WeatherError {
    WeatherError::Network(e.without_url())
}
