//! Framework-independent presentation layer for the Outfit dashboards.
//!
//! Each dashboard is driven by commands (region selection, fetch button,
//! API key entry, store selection) and answers with a view model that any
//! front end can render.

pub mod app_services;
pub mod error_mapping;
pub mod notice;
pub mod services;

pub use app_services::{store_locator, weather_dashboard};
pub use error_mapping::IntoAppError;
pub use notice::{Notice, NoticeLevel};
pub use services::{
    CurrentConditions, DashboardError, StoreCommand, StoreLocator, StoreView, WeatherCommand,
    WeatherDashboard, WeatherView,
};
