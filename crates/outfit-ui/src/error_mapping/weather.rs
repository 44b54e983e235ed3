use outfit_core::{AppError, ReqwestErrorExt, WeatherError};
use outfit_weather::WeatherError as ForecastError;

use super::IntoAppError;

impl IntoAppError for ForecastError {
    fn into_app_error(self) -> AppError {
        match self {
            ForecastError::Network(e) => AppError::Network(e.into_network_error()),
            ForecastError::Api { code, message } => {
                AppError::Weather(WeatherError::Rejected { code, message })
            }
            ForecastError::Parse(s) => AppError::Weather(WeatherError::ApiError(s)),
        }
    }
}
