use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use async_trait::async_trait;

use tourtrack_api::models::itinerary::{DayPlan, Itinerary, ItineraryRequest};
use tourtrack_api::routes;
use tourtrack_api::services::cache::ItineraryCache;
use tourtrack_api::services::generation::{GenerationBackend, GenerationError};
use tourtrack_api::services::itinerary_service::ItineraryService;

/// Backend stand-in: counts invocations and returns a canned outcome, so
/// route tests never spawn real processes.
pub struct FakeBackend {
    calls: AtomicUsize,
    outcome: Result<Itinerary, GenerationError>,
}

impl FakeBackend {
    pub fn ok(itinerary: Itinerary) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            outcome: Ok(itinerary),
        })
    }

    pub fn err(error: GenerationError) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            outcome: Err(error),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GenerationBackend for FakeBackend {
    async fn invoke(&self, _request: &ItineraryRequest) -> Result<Itinerary, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

pub fn sylhet_itinerary() -> Itinerary {
    Itinerary {
        destination: "Sylhet".to_string(),
        weather_summary: "Rainy".to_string(),
        vibe_match_score: 82,
        itinerary: vec![DayPlan {
            day: 1,
            plan: "Visit tea gardens".to_string(),
        }],
        packing_list: vec!["umbrella".to_string()],
        local_tip: Some("Bring cash".to_string()),
    }
}

pub struct TestApp {
    pub cache: Arc<ItineraryCache>,
    pub backend: Arc<FakeBackend>,
}

impl TestApp {
    pub fn new(backend: Arc<FakeBackend>) -> Self {
        Self {
            cache: Arc::new(ItineraryCache::new()),
            backend,
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            // Logger and Cors each rewrite the body type, so the response
            // body is left opaque here.
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let backend: Arc<dyn GenerationBackend> = self.backend.clone();
        let service = ItineraryService::new(self.cache.clone(), backend);

        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(web::Data::new(service))
            .service(
                web::scope("/api")
                    .route("/itinerary", web::post().to(routes::itinerary::generate)),
            )
    }
}
