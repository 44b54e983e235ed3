//! In-memory search results keyed by API key.
//!
//! Entries live for the whole process unless invalidated explicitly.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::types::Place;

#[derive(Debug, Default)]
pub struct SearchCache {
    entries: RwLock<HashMap<String, Vec<Place>>>,
}

impl SearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached results for an API key
    pub fn get(&self, api_key: &str) -> Option<Vec<Place>> {
        self.entries.read().get(api_key).cloned()
    }

    pub fn insert(&self, api_key: &str, places: Vec<Place>) {
        self.entries.write().insert(api_key.to_string(), places);
    }

    /// Drop the entry for one key; returns whether there was one
    pub fn invalidate(&self, api_key: &str) -> bool {
        self.entries.write().remove(api_key).is_some()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: &str) -> Place {
        Place {
            id: id.into(),
            place_name: format!("가게 {}", id),
            road_address_name: String::new(),
            place_url: String::new(),
            x: "127.1".into(),
            y: "36.8".into(),
        }
    }

    #[test]
    fn test_get_after_insert() {
        let cache = SearchCache::new();
        assert!(cache.get("key").is_none());

        cache.insert("key", vec![place("1"), place("2")]);
        let cached = cache.get("key").unwrap();
        assert_eq!(cached.len(), 2);
        assert_eq!(cached[0].id, "1");
    }

    #[test]
    fn test_empty_result_is_cached() {
        let cache = SearchCache::new();
        cache.insert("key", Vec::new());
        assert_eq!(cache.get("key"), Some(Vec::new()));
    }

    #[test]
    fn test_keys_are_independent() {
        let cache = SearchCache::new();
        cache.insert("a", vec![place("1")]);
        cache.insert("b", vec![place("2")]);

        assert!(cache.invalidate("a"));
        assert!(!cache.invalidate("a"));
        assert!(cache.get("a").is_none());
        assert_eq!(cache.get("b").unwrap()[0].id, "2");
    }

    #[test]
    fn test_clear() {
        let cache = SearchCache::new();
        cache.insert("a", vec![place("1")]);
        cache.insert("b", vec![place("2")]);
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }
}
