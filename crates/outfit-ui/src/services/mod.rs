pub mod store_service;
pub mod weather_service;

pub use store_service::{StoreCommand, StoreLocator, StoreView};
pub use weather_service::{CurrentConditions, WeatherCommand, WeatherDashboard, WeatherView};

/// Invalid input coming from the dashboard controls
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    #[error("Unknown region: {0}")]
    UnknownRegion(String),
    #[error("No API key entered")]
    MissingApiKey,
    #[error("No store at position {0}")]
    NoSuchStore(usize),
}
