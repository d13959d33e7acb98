use std::env;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use tourtrack_api::db;
use tourtrack_api::routes;
use tourtrack_api::services::cache::ItineraryCache;
use tourtrack_api::services::generation::{GenerationBackend, SubprocessBackend};
use tourtrack_api::services::itinerary_service::ItineraryService;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 5000;
const MONGODB_URI: &str = "mongodb://127.0.0.1:27017/tourTrack";

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    // The request path never reads or writes MongoDB; a missing database only
    // degrades /health, it must not block startup.
    let mongo_uri = env::var("MONGODB_URI").unwrap_or_else(|_| MONGODB_URI.to_string());
    let mongo_client = db::mongo::create_mongo_client(&mongo_uri).await;

    let cache = Arc::new(ItineraryCache::new());
    let backend: Arc<dyn GenerationBackend> = Arc::new(SubprocessBackend::from_env());
    let service = web::Data::new(ItineraryService::new(cache, backend));

    println!("Attempting to bind to {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(service.clone())
            .app_data(web::Data::new(mongo_client.clone()))
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .route("/itinerary", web::post().to(routes::itinerary::generate)),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
