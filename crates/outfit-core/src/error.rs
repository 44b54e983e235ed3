//! Error hierarchy shared by the Outfit dashboards.
//!
//! `Display` keeps the technical detail for logs; `user_message()` gives the
//! fixed text shown to the user.

use thiserror::Error;

/// Top-level application error type.
///
/// Use `user_message()` to get a UI-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Places service error: {0}")]
    Places(#[from] PlacesError),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Network(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Places(e) => e.user_message(),
        }
    }
}

/// Network-related errors (HTTP, connectivity).
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed(_) => "서버에 연결할 수 없습니다. 인터넷 연결을 확인해주세요.",
            NetworkError::Timeout => "요청 시간이 초과되었습니다. 다시 시도해주세요.",
            NetworkError::ServerError { status, .. } if *status == 401 || *status == 403 => {
                "API 키가 유효하지 않습니다. 설정을 확인해주세요."
            }
            NetworkError::ServerError { status, .. } if *status >= 500 => {
                "서버에 문제가 있습니다. 잠시 후 다시 시도해주세요."
            }
            NetworkError::ServerError { .. } => "요청이 거부되었습니다. 다시 시도해주세요.",
            NetworkError::InvalidResponse(_) => "예상하지 못한 응답을 받았습니다.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Missing required setting: {0}")]
    MissingSetting(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "설정이 올바르지 않습니다. 설정을 확인해주세요.",
            ConfigError::ParseError(_) => "설정 파일 형식이 잘못되었습니다.",
            ConfigError::MissingSetting(_) => "필수 설정이 없습니다. secrets.toml 파일을 확인해주세요.",
        }
    }
}

/// Weather forecast service errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Weather API rejected the request ({code}): {message}")]
    Rejected { code: String, message: String },

    #[error("Weather API error: {0}")]
    ApiError(String),

    #[error("Unknown region: {0}")]
    UnknownRegion(String),
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::Rejected { .. } => "기상청 API가 요청을 거부했습니다.",
            WeatherError::ApiError(_) => "날씨 정보를 처리하지 못했습니다. 다시 시도해주세요.",
            WeatherError::UnknownRegion(_) => "지원하지 않는 지역입니다.",
        }
    }
}

/// Place search service errors.
#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("Places API error: {0}")]
    ApiError(String),

    #[error("Invalid coordinate for {0}")]
    InvalidCoordinate(String),

    #[error("Map rendering failed: {0}")]
    MapRender(String),

    #[error("No store at list position {0}")]
    UnknownStore(usize),

    #[error("Missing API key")]
    MissingApiKey,
}

impl PlacesError {
    pub fn user_message(&self) -> &'static str {
        match self {
            PlacesError::ApiError(_) => "API 키가 유효한지, 또는 인터넷 연결을 확인해주세요.",
            PlacesError::InvalidCoordinate(_) => "가게 위치 정보가 올바르지 않습니다.",
            PlacesError::MapRender(_) => "지도를 표시하지 못했습니다.",
            PlacesError::UnknownStore(_) => "선택한 가게를 찾을 수 없습니다.",
            PlacesError::MissingApiKey => "카카오 REST API 키를 먼저 입력해주세요.",
        }
    }
}

/// Extension trait for converting reqwest errors to our error types.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_connect() {
            NetworkError::ConnectionFailed(self.to_string())
        } else if let Some(status) = self.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
                message: self.to_string(),
            }
        } else if self.is_decode() || self.is_body() {
            NetworkError::InvalidResponse(self.to_string())
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}
