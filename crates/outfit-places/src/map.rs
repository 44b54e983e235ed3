//! Map view of the searched stores.
//!
//! The view centres on the selected store and marks every store that has a
//! usable position. `to_html` renders a standalone Leaflet page through an
//! autoescaping tera template.

use serde::Serialize;
use tera::{Context, Tera};
use url::Url;

use crate::error::PlacesError;
use crate::types::{Coordinate, Place};

const MAP_TEMPLATE_NAME: &str = "map.html";

const MAP_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>천안시 옷가게 지도</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map { height: 100%; margin: 0; }</style>
</head>
<body>
<div id="map" data-view="{{ view | json_encode }}"></div>
<div hidden>
{%- for marker in view.markers %}
<div id="popup-{{ loop.index0 }}"><b>{{ marker.tooltip }}</b><br>{{ marker.address }}
{%- if marker.link %}<br><a href="{{ marker.link }}" target="_blank" rel="noopener">카카오맵에서 보기</a>{% endif %}</div>
{%- endfor %}
</div>
<script>
const view = JSON.parse(document.getElementById('map').dataset.view);
const map = L.map('map').setView([view.center.lat, view.center.lon], view.zoom);
L.tileLayer('https://tile.openstreetmap.org/{z}/{x}/{y}.png', {
  attribution: '&copy; OpenStreetMap contributors'
}).addTo(map);
view.markers.forEach((m, i) => {
  const label = document.createElement('span');
  label.textContent = m.tooltip;
  L.circleMarker([m.position.lat, m.position.lon], {
    color: m.color,
    radius: m.color === 'blue' ? 10 : 7
  })
    .bindTooltip(label)
    .bindPopup(document.getElementById('popup-' + i).cloneNode(true), { maxWidth: 200 })
    .addTo(map);
});
</script>
</body>
</html>
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    /// The selected store
    Blue,
    Gray,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub place_id: String,
    pub position: Coordinate,
    pub tooltip: String,
    pub address: String,
    /// Place page, only kept for http(s) URLs
    pub link: Option<String>,
    pub color: MarkerColor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: Coordinate,
    pub zoom: u8,
    pub markers: Vec<Marker>,
}

impl MapView {
    /// Build the map for `stores` with `selected` highlighted.
    ///
    /// The selected store must have a valid position; other stores without
    /// one are left off the map.
    pub fn for_selection(
        stores: &[Place],
        selected: &Place,
        zoom: u8,
    ) -> Result<Self, PlacesError> {
        let center = selected.coordinate()?;

        let markers = stores
            .iter()
            .filter_map(|store| match store.coordinate() {
                Ok(position) => Some(Marker {
                    place_id: store.id.clone(),
                    position,
                    tooltip: store.place_name.clone(),
                    address: store.road_address_name.clone(),
                    link: web_link(&store.place_url),
                    color: if store.id == selected.id {
                        MarkerColor::Blue
                    } else {
                        MarkerColor::Gray
                    },
                }),
                Err(e) => {
                    tracing::warn!("Skipping marker: {}", e);
                    None
                }
            })
            .collect();

        Ok(Self {
            center,
            zoom,
            markers,
        })
    }

    /// Standalone HTML page showing this view
    pub fn to_html(&self) -> Result<String, PlacesError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);
        tera.add_raw_template(MAP_TEMPLATE_NAME, MAP_TEMPLATE)?;

        let mut context = Context::new();
        context.insert("view", self);

        Ok(tera.render(MAP_TEMPLATE_NAME, &context)?)
    }
}

/// `raw` as a link target if it is an http(s) URL
fn web_link(raw: &str) -> Option<String> {
    match Url::parse(raw.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url.into()),
        Ok(url) => {
            tracing::warn!("Dropping place link with scheme {}", url.scheme());
            None
        }
        Err(_) => None,
    }
}
