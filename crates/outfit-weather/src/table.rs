//! Pivot of flat forecast records into one row per forecast time.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{
    ForecastEnvelope, ForecastRecord, PrecipitationType, SkyCondition, WeatherError, RESULT_OK,
};

/// Message reported when the API gives no usable result header
const UNKNOWN_ERROR_MESSAGE: &str = "알 수 없는 오류";

pub const CATEGORY_TEMPERATURE: &str = "TMP";
pub const CATEGORY_SKY: &str = "SKY";
pub const CATEGORY_PRECIPITATION_TYPE: &str = "PTY";
pub const CATEGORY_PRECIPITATION_CHANCE: &str = "POP";
pub const CATEGORY_WIND_SPEED: &str = "WSD";
pub const CATEGORY_HUMIDITY: &str = "REH";

/// Forecast values for a single (date, time)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRow {
    pub fcst_date: String,
    pub fcst_time: String,
    values: BTreeMap<String, String>,
    /// Present only when the `SKY` code maps to a known label
    pub sky_status: Option<SkyCondition>,
    /// Present whenever the table has a `PTY` column
    pub pty_status: Option<PrecipitationType>,
}

impl ForecastRow {
    /// Raw value of a category at this time, if the API sent one
    pub fn get(&self, category: &str) -> Option<&str> {
        self.values.get(category).map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn temperature(&self) -> Option<&str> {
        self.get(CATEGORY_TEMPERATURE)
    }

    pub fn precipitation_chance(&self) -> Option<&str> {
        self.get(CATEGORY_PRECIPITATION_CHANCE)
    }

    pub fn wind_speed(&self) -> Option<&str> {
        self.get(CATEGORY_WIND_SPEED)
    }

    pub fn humidity(&self) -> Option<&str> {
        self.get(CATEGORY_HUMIDITY)
    }
}

/// Wide forecast table: one row per forecast time, one column per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastTable {
    categories: BTreeSet<String>,
    rows: Vec<ForecastRow>,
}

impl ForecastTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate a decoded API response and pivot its records.
    ///
    /// A result code other than `"00"` is returned as [`WeatherError::Api`]
    /// carrying the API's own message; no partial table is produced.
    pub fn from_response(body: &Value) -> Result<Self, WeatherError> {
        let envelope = ForecastEnvelope::deserialize(body)
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        let response = envelope.response.ok_or_else(|| unknown_error(""))?;

        match &response.header {
            Some(header) if header.result_code == RESULT_OK => {}
            Some(header) => {
                return Err(WeatherError::Api {
                    code: header.result_code.clone(),
                    message: header
                        .result_msg
                        .clone()
                        .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
                })
            }
            None => return Err(unknown_error("")),
        }

        let body = response
            .body
            .ok_or_else(|| WeatherError::Parse("response body is missing".to_string()))?;

        tracing::debug!("Pivoting {} forecast records", body.items.item.len());
        Ok(Self::from_records(body.items.item))
    }

    /// Group records by (date, time); the first value seen for a category wins
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ForecastRecord>,
    {
        let mut categories = BTreeSet::new();
        let mut grouped: BTreeMap<(String, String), BTreeMap<String, String>> = BTreeMap::new();

        for record in records {
            categories.insert(record.category.clone());
            grouped
                .entry((record.fcst_date, record.fcst_time))
                .or_default()
                .entry(record.category)
                .or_insert(record.fcst_value);
        }

        let has_sky = categories.contains(CATEGORY_SKY);
        let has_pty = categories.contains(CATEGORY_PRECIPITATION_TYPE);

        let rows = grouped
            .into_iter()
            .map(|((fcst_date, fcst_time), values)| {
                let sky_status = if has_sky {
                    values
                        .get(CATEGORY_SKY)
                        .and_then(|code| SkyCondition::from_code(code))
                } else {
                    None
                };
                let pty_status = has_pty.then(|| {
                    PrecipitationType::from_code_or_default(
                        values.get(CATEGORY_PRECIPITATION_TYPE).map(String::as_str),
                    )
                });

                ForecastRow {
                    fcst_date,
                    fcst_time,
                    values,
                    sky_status,
                    pty_status,
                }
            })
            .collect();

        Self { categories, rows }
    }

    pub fn rows(&self) -> &[ForecastRow] {
        &self.rows
    }

    /// Earliest forecast time, treated as the current conditions
    pub fn nearest(&self) -> Option<&ForecastRow> {
        self.rows.first()
    }

    /// Every category observed in the input, sorted
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn unknown_error(code: &str) -> WeatherError {
    WeatherError::Api {
        code: code.to_string(),
        message: UNKNOWN_ERROR_MESSAGE.to_string(),
    }
}
