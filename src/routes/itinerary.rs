use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use serde_json::json;

use crate::models::itinerary::ItineraryRequest;
use crate::services::generation::GenerationError;
use crate::services::itinerary_service::ItineraryService;

/*
    /api/itinerary
*/
pub async fn generate(
    payload: web::Json<ItineraryRequest>,
    service: web::Data<ItineraryService>,
) -> impl Responder {
    match service.generate(&payload).await {
        Ok(itinerary) => HttpResponse::Ok().json(itinerary),
        Err(err) => {
            match &err {
                // Raw generator output goes to the operator logs only.
                GenerationError::MalformedOutput { raw } => {
                    eprintln!("JSON Parse Error: {}", raw)
                }
                other => eprintln!("Failed to generate itinerary: {}", other),
            }

            let status = match &err {
                GenerationError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
                GenerationError::BackendReportedError { .. } => StatusCode::BAD_GATEWAY,
                GenerationError::ProcessFailed { .. }
                | GenerationError::MalformedOutput { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            };

            HttpResponse::build(status).json(json!({ "error": err.client_message() }))
        }
    }
}
