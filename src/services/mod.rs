pub mod cache;
pub mod generation;
pub mod itinerary_service;
