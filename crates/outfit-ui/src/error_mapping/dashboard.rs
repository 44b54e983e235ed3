use crate::services::DashboardError;
use outfit_core::{AppError, PlacesError, WeatherError};

impl From<DashboardError> for AppError {
    fn from(e: DashboardError) -> Self {
        match e {
            DashboardError::UnknownRegion(name) => {
                AppError::Weather(WeatherError::UnknownRegion(name))
            }
            DashboardError::MissingApiKey => AppError::Places(PlacesError::MissingApiKey),
            DashboardError::NoSuchStore(index) => AppError::Places(PlacesError::UnknownStore(index)),
        }
    }
}
