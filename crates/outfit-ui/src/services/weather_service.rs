//! Weather dashboard: region selector plus a fetch button.
//! Each fetch resolves the issue time, calls the forecast API and builds the view.

use outfit_core::AppError;
use outfit_weather::{
    recommend_clothing, resolve_base_datetime, BaseDateTime, ClothingAdvice, Clock,
    ForecastProvider, ForecastRow, ForecastTable, Region, SystemClock, WeatherError, REGIONS,
};

use super::DashboardError;
use crate::error_mapping::IntoAppError;
use crate::notice::Notice;

/// Placeholder for a value the forecast did not include
const NOT_AVAILABLE: &str = "N/A";

/// User actions on the weather dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherCommand {
    SelectRegion(String),
    Fetch,
}

/// Headline metrics taken from the nearest forecast row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentConditions {
    pub temperature: String,
    pub sky: String,
    pub precipitation: String,
    pub precipitation_chance: String,
    pub wind_speed: String,
    pub humidity: String,
    pub clothing: ClothingAdvice,
}

impl CurrentConditions {
    pub fn from_row(row: &ForecastRow) -> Self {
        let or_na = |v: Option<&str>| v.unwrap_or(NOT_AVAILABLE).to_string();

        Self {
            temperature: or_na(row.temperature()),
            sky: or_na(row.sky_status.map(|s| s.label())),
            precipitation: or_na(row.pty_status.map(|p| p.label())),
            precipitation_chance: or_na(row.precipitation_chance()),
            wind_speed: or_na(row.wind_speed()),
            humidity: or_na(row.humidity()),
            clothing: recommend_clothing(row.temperature()),
        }
    }
}

/// Everything the weather dashboard shows after a command
#[derive(Debug, Clone)]
pub struct WeatherView {
    pub region: &'static str,
    pub base: Option<BaseDateTime>,
    pub notices: Vec<Notice>,
    pub current: Option<CurrentConditions>,
    pub table: ForecastTable,
}

impl WeatherView {
    fn new(region: &'static Region) -> Self {
        Self {
            region: region.name,
            base: None,
            notices: Vec::new(),
            current: None,
            table: ForecastTable::empty(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.notices.iter().any(Notice::is_error)
    }
}

pub struct WeatherDashboard {
    provider: ForecastProvider,
    clock: Box<dyn Clock>,
    region: &'static Region,
}

impl WeatherDashboard {
    /// Create the dashboard with `default_region` preselected.
    ///
    /// An unknown region name falls back to the first region in the selector.
    pub fn new(provider: ForecastProvider, default_region: &str) -> Self {
        let region = match outfit_weather::find_region(default_region) {
            Some(region) => region,
            None => {
                tracing::warn!(
                    "Unknown default region {:?}, using {}",
                    default_region,
                    REGIONS[0].name
                );
                &REGIONS[0]
            }
        };

        Self {
            provider,
            clock: Box::new(SystemClock),
            region,
        }
    }

    /// Replace the wall clock used to resolve the forecast issue time
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn selected_region(&self) -> &'static Region {
        self.region
    }

    pub async fn handle(&mut self, command: WeatherCommand) -> WeatherView {
        match command {
            WeatherCommand::SelectRegion(name) => {
                let mut view = WeatherView::new(self.region);
                if let Err(e) = self.select_region(&name) {
                    let app_err = AppError::from(e);
                    tracing::warn!("{}", app_err);
                    view.notices.push(Notice::warning(app_err.user_message()));
                }
                view.region = self.region.name;
                view
            }
            WeatherCommand::Fetch => self.fetch().await,
        }
    }

    fn select_region(&mut self, name: &str) -> Result<(), DashboardError> {
        let region = outfit_weather::find_region(name)
            .ok_or_else(|| DashboardError::UnknownRegion(name.to_string()))?;
        tracing::debug!("Selected region {}", region.name);
        self.region = region;
        Ok(())
    }

    async fn fetch(&self) -> WeatherView {
        let region = self.region;
        let mut view = WeatherView::new(region);

        let base = resolve_base_datetime(self.clock.now());
        view.base = Some(base);
        tracing::info!("Fetching forecast for {} issued {}", region.name, base);

        let body = match self.provider.fetch(&base, region.grid).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Forecast request failed: {}", e);
                view.notices
                    .push(Notice::error(format!("API 요청 중 오류가 발생했습니다: {}", e)));
                view.notices
                    .push(Notice::info(e.into_app_error().user_message()));
                return view;
            }
        };

        let table = match ForecastTable::from_response(&body) {
            Ok(table) => table,
            Err(e) => {
                tracing::error!("Forecast response rejected: {}", e);
                let message = match &e {
                    WeatherError::Api { message, .. } => message.clone(),
                    other => other.to_string(),
                };
                view.notices
                    .push(Notice::error(format!("잘못된 응답을 받았습니다: {}", message)));
                return view;
            }
        };

        let Some(nearest) = table.nearest() else {
            tracing::warn!("Forecast for {} has no rows", region.name);
            return view;
        };

        let current = CurrentConditions::from_row(nearest);
        view.notices.push(Notice::success(format!(
            "{} 지역의 날씨 예보입니다. (데이터 기준: {} {})",
            region.name,
            base.base_date(),
            base.base_time()
        )));
        view.notices
            .push(Notice::info(format!("👕 옷차림 추천: {}", current.clothing.message())));

        view.current = Some(current);
        view.table = table;
        view
    }
}
