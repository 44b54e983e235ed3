//! Clothing store search for Outfit.
//!
//! Provides the keyword search client, an API-key keyed result cache and the
//! map view shown next to the store list.

pub mod cache;
pub mod client;
pub mod error;
pub mod map;
pub mod select;
pub mod types;

pub use cache::SearchCache;
pub use client::{PlaceClient, PlacesSettings};
pub use error::PlacesError;
pub use map::{MapView, Marker, MarkerColor};
pub use select::{select_store, store_labels};
pub use types::{Coordinate, Place, SearchRequest};
