use outfit_core::{AppError, NetworkError, PlacesError, ReqwestErrorExt};
use outfit_places::PlacesError as SearchError;

use super::IntoAppError;

impl IntoAppError for SearchError {
    fn into_app_error(self) -> AppError {
        match self {
            SearchError::NetworkError(e) => AppError::Network(e.into_network_error()),
            SearchError::Unauthorized => AppError::Network(NetworkError::ServerError {
                status: 401,
                message: "keyword search rejected the API key".to_string(),
            }),
            SearchError::ApiError(s) => AppError::Places(PlacesError::ApiError(s)),
            SearchError::InvalidCoordinate { place, .. } => {
                AppError::Places(PlacesError::InvalidCoordinate(place))
            }
            SearchError::Render(e) => AppError::Places(PlacesError::MapRender(e.to_string())),
        }
    }
}
