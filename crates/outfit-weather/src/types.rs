use serde::{Deserialize, Serialize};

/// Result code the forecast API uses for a successful response
pub const RESULT_OK: &str = "00";

/// Grid index used by the forecast API (not latitude/longitude)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPoint {
    pub nx: u16,
    pub ny: u16,
}

impl GridPoint {
    pub const fn new(nx: u16, ny: u16) -> Self {
        Self { nx, ny }
    }
}

/// One forecast value for a (date, time, category) triple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRecord {
    #[serde(rename = "fcstDate")]
    pub fcst_date: String,
    #[serde(rename = "fcstTime")]
    pub fcst_time: String,
    pub category: String,
    #[serde(rename = "fcstValue")]
    pub fcst_value: String,
}

/// Sky state mapped from the `SKY` category code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkyCondition {
    Clear,
    MostlyCloudy,
    Overcast,
}

impl SkyCondition {
    /// Map a `SKY` code; codes outside the table stay unmapped
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Self::Clear),
            "3" => Some(Self::MostlyCloudy),
            "4" => Some(Self::Overcast),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "맑음 ☀️",
            Self::MostlyCloudy => "구름많음 ☁️",
            Self::Overcast => "흐림 🌥️",
        }
    }
}

/// Precipitation type mapped from the `PTY` category code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PrecipitationType {
    #[default]
    NoPrecipitation,
    Rain,
    RainSnow,
    Snow,
    Shower,
}

impl PrecipitationType {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(Self::NoPrecipitation),
            "1" => Some(Self::Rain),
            "2" => Some(Self::RainSnow),
            "3" => Some(Self::Snow),
            "4" => Some(Self::Shower),
            _ => None,
        }
    }

    /// Map a `PTY` code, treating missing or unknown codes as no precipitation
    pub fn from_code_or_default(code: Option<&str>) -> Self {
        code.and_then(Self::from_code).unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NoPrecipitation => "강수 없음",
            Self::Rain => "비 🌧️",
            Self::RainSnow => "비/눈 🌨️",
            Self::Snow => "눈 ❄️",
            Self::Shower => "소나기 🌦️",
        }
    }
}

/// Top level of the forecast API response
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastEnvelope {
    pub response: Option<ForecastResponse>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub header: Option<ResponseHeader>,
    pub body: Option<ResponseBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseHeader {
    #[serde(rename = "resultCode")]
    pub result_code: String,
    #[serde(rename = "resultMsg")]
    pub result_msg: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseBody {
    pub items: ResponseItems,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseItems {
    #[serde(default)]
    pub item: Vec<ForecastRecord>,
}

/// Forecast service errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Forecast API returned {code}: {message}")]
    Api { code: String, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
}
