//! Short-term forecast service for Outfit
//!
//! Resolves the latest forecast issue time, fetches the forecast for a grid
//! point, pivots the flat records into one row per forecast time and maps the
//! temperature to clothing advice.

pub mod base_time;
pub mod clothing;
pub mod provider;
pub mod regions;
pub mod table;
pub mod types;

pub use base_time::{resolve_base_datetime, BaseDateTime, Clock, FixedClock, SystemClock};
pub use clothing::{recommend_clothing, ClothingAdvice};
pub use provider::{ForecastProvider, ForecastSettings};
pub use regions::{find_region, Region, REGIONS};
pub use table::{ForecastRow, ForecastTable};
pub use types::*;
