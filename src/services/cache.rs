use std::collections::HashMap;
use std::sync::Mutex;

use sha2::{Digest, Sha256};

use crate::models::itinerary::{Itinerary, ItineraryRequest};

/// Create a cache key: hash of the trimmed, lowercased request fields.
/// Requests that differ only in case or surrounding whitespace collide.
/// Each field is length-prefixed so content cannot shift across field
/// boundaries, whatever characters it contains.
pub fn make_cache_key(req: &ItineraryRequest) -> String {
    let mut hasher = Sha256::new();
    hash_field(&mut hasher, req.destination.as_deref().unwrap_or(""));
    hash_field(&mut hasher, &req.vibes);
    hash_field(&mut hasher, &req.free_time);
    format!("{:x}", hasher.finalize())
}

fn hash_field(hasher: &mut Sha256, field: &str) {
    let normalized = field.trim().to_lowercase();
    hasher.update((normalized.len() as u64).to_le_bytes());
    hasher.update(normalized);
}

/// In-memory cache of generated itineraries. Entries live for the process
/// lifetime; there is no expiry or eviction (accepted limitation, the map
/// grows with the number of distinct requests). Created once at startup and
/// injected into the dispatch layer.
#[derive(Default)]
pub struct ItineraryCache {
    entries: Mutex<HashMap<String, Itinerary>>,
}

impl ItineraryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Itinerary> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    /// Idempotent; two racing misses for the same key resolve last-writer-wins.
    pub fn insert(&self, key: String, itinerary: Itinerary) {
        self.entries.lock().unwrap().insert(key, itinerary);
    }
}
