use crate::types::Place;

/// Numbered labels for the store list, e.g. `"1. 가게 이름"`
pub fn store_labels(stores: &[Place]) -> Vec<String> {
    stores
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {}", i + 1, s.place_name))
        .collect()
}

/// Store at a zero-based list index
pub fn select_store(stores: &[Place], index: usize) -> Option<&Place> {
    stores.get(index)
}
