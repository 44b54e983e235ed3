//! Keyword search API types.

use serde::{Deserialize, Serialize};

use crate::error::PlacesError;

/// A place returned by the keyword search API; coordinates arrive as strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub place_name: String,
    #[serde(default)]
    pub road_address_name: String,
    #[serde(default)]
    pub place_url: String,
    /// Longitude
    pub x: String,
    /// Latitude
    pub y: String,
}

impl Place {
    pub fn coordinate(&self) -> Result<Coordinate, PlacesError> {
        let invalid = || PlacesError::InvalidCoordinate {
            place: self.place_name.clone(),
            x: self.x.clone(),
            y: self.y.clone(),
        };
        let lon: f64 = self.x.trim().parse().map_err(|_| invalid())?;
        let lat: f64 = self.y.trim().parse().map_err(|_| invalid())?;
        Coordinate::new(lat, lon).ok_or_else(invalid)
    }
}

/// WGS84 position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Returns `None` outside the valid latitude/longitude range
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) {
            Some(Self { lat, lon })
        } else {
            None
        }
    }
}

/// Parameters of a keyword search around a center point
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub center: Coordinate,
    /// Meters
    pub radius: u32,
    pub size: u32,
}

impl SearchRequest {
    pub const DEFAULT_RADIUS: u32 = 20_000;
    pub const MAX_SIZE: u32 = 15;

    pub fn new(query: impl Into<String>, center: Coordinate) -> Self {
        Self {
            query: query.into(),
            center,
            radius: Self::DEFAULT_RADIUS,
            size: Self::MAX_SIZE,
        }
    }

    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size.clamp(1, Self::MAX_SIZE);
        self
    }
}

/// Keyword search response
#[derive(Debug, Deserialize)]
pub(crate) struct KeywordSearchResponse {
    #[serde(default)]
    pub documents: Vec<Place>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(x: &str, y: &str) -> Place {
        Place {
            id: "1".into(),
            place_name: "옷가게".into(),
            road_address_name: "충남 천안시 동남구".into(),
            place_url: "http://place.map.kakao.com/1".into(),
            x: x.into(),
            y: y.into(),
        }
    }

    #[test]
    fn test_coordinate_from_strings() {
        let coordinate = place("127.1139", "36.8151").coordinate().unwrap();
        assert_eq!(coordinate.lat, 36.8151);
        assert_eq!(coordinate.lon, 127.1139);
    }

    #[test]
    fn test_invalid_coordinate() {
        assert!(place("abc", "36.8").coordinate().is_err());
        assert!(place("127.1", "95.0").coordinate().is_err());
    }

    #[test]
    fn test_search_request_defaults() {
        let center = Coordinate::new(36.8151, 127.1139).unwrap();
        let request = SearchRequest::new("천안 옷가게", center);
        assert_eq!(request.radius, 20_000);
        assert_eq!(request.size, 15);
        assert_eq!(request.with_size(40).size, 15);
    }

    #[test]
    fn test_place_ignores_extra_fields() {
        let place: Place = serde_json::from_value(serde_json::json!({
            "id": "26338954",
            "place_name": "스타일 옷가게",
            "category_name": "가정,생활 > 의류판매",
            "phone": "041-000-0000",
            "road_address_name": "충남 천안시 서북구 불당대로 1",
            "place_url": "http://place.map.kakao.com/26338954",
            "distance": "1200",
            "x": "127.1",
            "y": "36.8"
        }))
        .unwrap();
        assert_eq!(place.id, "26338954");
        assert_eq!(place.x, "127.1");
    }
}
