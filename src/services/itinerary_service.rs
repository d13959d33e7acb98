use std::sync::Arc;

use crate::models::itinerary::{Itinerary, ItineraryRequest};
use crate::services::cache::{make_cache_key, ItineraryCache};
use crate::services::generation::{GenerationBackend, GenerationError};

/// Cache-fronted dispatch to the generation backend. A backend run takes
/// seconds to tens of seconds, which is the whole reason this layer exists:
/// repeated identical requests are a map lookup.
pub struct ItineraryService {
    cache: Arc<ItineraryCache>,
    backend: Arc<dyn GenerationBackend>,
}

impl ItineraryService {
    pub fn new(cache: Arc<ItineraryCache>, backend: Arc<dyn GenerationBackend>) -> Self {
        Self { cache, backend }
    }

    /// Validate, serve from cache, or run the generator exactly once (no
    /// retries). Only successful results are cached; failures pass through
    /// to the caller unchanged.
    pub async fn generate(
        &self,
        request: &ItineraryRequest,
    ) -> Result<Itinerary, GenerationError> {
        if request.vibes.trim().is_empty() {
            return Err(GenerationError::InvalidRequest("vibes".to_string()));
        }
        if request.free_time.trim().is_empty() {
            return Err(GenerationError::InvalidRequest("freeTime".to_string()));
        }

        let key = make_cache_key(request);
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit);
        }

        let itinerary = self.backend.invoke(request).await?;

        // Reached only after the await completes: a cancelled request never
        // writes the cache.
        self.cache.insert(key, itinerary.clone());
        Ok(itinerary)
    }
}
