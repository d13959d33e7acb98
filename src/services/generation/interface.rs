use async_trait::async_trait;
use thiserror::Error;

use crate::models::itinerary::{Itinerary, ItineraryRequest};

/// How a generation attempt fails. All variants are terminal for the
/// request; nothing here is retried.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    /// A required request field was missing or empty. Never reaches the backend.
    #[error("missing required field: {0}")]
    InvalidRequest(String),

    /// The generator exited non-zero (status is `None` when killed by a signal).
    #[error("AI service exited with status {status:?}")]
    ProcessFailed { status: Option<i32> },

    /// Exit zero but stdout was not a JSON document of the expected shape.
    /// `raw` is kept for operator logs and must never be sent to clients.
    #[error("AI service produced output that is not valid JSON")]
    MalformedOutput { raw: String },

    /// Valid JSON whose `error` field flags a failure inside the generator.
    #[error("AI service reported an error: {message}")]
    BackendReportedError { message: String },
}

impl GenerationError {
    /// The message safe to put in an HTTP `{"error": ...}` body. Raw
    /// generator output stays out of it.
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidRequest(field) => format!("{} is required", field),
            Self::ProcessFailed { .. } => "Failed to generate itinerary".to_string(),
            Self::MalformedOutput { .. } => "Invalid response from AI service".to_string(),
            Self::BackendReportedError { message } => message.clone(),
        }
    }
}

/// Port over the out-of-process generator. One method, one invocation; the
/// dispatch layer holds it as a trait object so tests can substitute a fake
/// backend without spawning real processes.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn invoke(&self, request: &ItineraryRequest) -> Result<Itinerary, GenerationError>;
}
