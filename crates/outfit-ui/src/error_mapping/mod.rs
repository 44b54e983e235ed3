//! Maps service errors to outfit_core::AppError for consistent user-facing messages.
//! Each service has its own module to keep mappings small and readable.

mod dashboard;
mod places;
mod weather;

use outfit_core::AppError;

/// Conversion of a service crate error into the application error hierarchy
pub trait IntoAppError {
    fn into_app_error(self) -> AppError;
}
