//! Keyword place search client.

use std::time::Duration;

use tracing::instrument;

use crate::error::PlacesError;
use crate::types::{KeywordSearchResponse, Place, SearchRequest};

/// Authorization scheme expected by the keyword search API
const AUTH_SCHEME: &str = "KakaoAK";

/// Connection settings for the keyword search endpoint
#[derive(Debug, Clone)]
pub struct PlacesSettings {
    pub endpoint: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct PlaceClient {
    client: reqwest::Client,
    endpoint: String,
}

impl PlaceClient {
    pub fn new(settings: PlacesSettings) -> Result<Self, PlacesError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: settings.endpoint,
        })
    }

    fn auth_header(api_key: &str) -> String {
        format!("{} {}", AUTH_SCHEME, api_key)
    }

    /// Search places by keyword around `request.center`.
    ///
    /// Results keep the API's relevance order. An empty list means the search
    /// succeeded with no matches; failures are returned as errors.
    #[instrument(skip(self, api_key), level = "info")]
    pub async fn search(
        &self,
        api_key: &str,
        request: &SearchRequest,
    ) -> Result<Vec<Place>, PlacesError> {
        let query = [
            ("query", request.query.clone()),
            ("x", request.center.lon.to_string()),
            ("y", request.center.lat.to_string()),
            ("radius", request.radius.to_string()),
            ("size", request.size.to_string()),
        ];

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", Self::auth_header(api_key))
            .query(&query)
            .send()
            .await?;

        let resp: KeywordSearchResponse = self.handle_response(response).await?;
        tracing::info!("Keyword search returned {} places", resp.documents.len());
        Ok(resp.documents)
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, PlacesError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| PlacesError::ApiError(format!("JSON parse error: {}", e)))
        } else if status.as_u16() == 401 {
            Err(PlacesError::Unauthorized)
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(PlacesError::ApiError(format!("{}: {}", status, text)))
        }
    }
}
