//! Place search error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("Invalid coordinate for {place}: ({x}, {y})")]
    InvalidCoordinate { place: String, x: String, y: String },

    #[error("Unauthorized - API key may be invalid")]
    Unauthorized,

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Map rendering failed: {0}")]
    Render(#[from] tera::Error),
}

impl PlacesError {
    /// Whether a later retry could succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::NetworkError(e) => {
                e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
            }
            Self::Unauthorized
            | Self::ApiError(_)
            | Self::InvalidCoordinate { .. }
            | Self::Render(_) => false,
        }
    }
}
