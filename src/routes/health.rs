use actix_web::{web, HttpResponse, Responder};
use bson::doc;
use mongodb::Client;
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(client: web::Data<Option<Arc<Client>>>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    // Check MongoDB connection (referenced but unused by the request path)
    let mongo_result = check_mongodb(client.get_ref()).await;
    health
        .services
        .insert("mongodb".to_string(), mongo_result.clone());

    // Check that the local model service is reachable
    let ollama_result = check_ollama().await;
    health
        .services
        .insert("ollama".to_string(), ollama_result.clone());

    // Overall status is degraded as soon as any service is not ok
    if mongo_result.status != "ok" || ollama_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

async fn check_mongodb(client: &Option<Arc<Client>>) -> ServiceStatus {
    let Some(client) = client else {
        return ServiceStatus {
            status: "unavailable".to_string(),
            details: Some("MongoDB not connected (functionality limited)".to_string()),
        };
    };

    match client
        .database("tourTrack")
        .run_command(doc! {"ping": 1})
        .await
    {
        Ok(_) => ServiceStatus {
            status: "ok".to_string(),
            details: None,
        },
        Err(e) => ServiceStatus {
            status: "error".to_string(),
            details: Some(format!("Failed to ping MongoDB: {}", e)),
        },
    }
}

async fn check_ollama() -> ServiceStatus {
    let hosts = match env::var("OLLAMA_HOST") {
        Ok(host) => vec![host],
        Err(_) => vec![
            "http://localhost:11434".to_string(),
            "http://127.0.0.1:11434".to_string(),
        ],
    };

    for host in &hosts {
        if let Ok(resp) = reqwest::get(format!("{}/api/tags", host)).await {
            if resp.status().is_success() {
                return ServiceStatus {
                    status: "ok".to_string(),
                    details: Some(format!("reachable at {}", host)),
                };
            }
        }
    }

    ServiceStatus {
        status: "error".to_string(),
        details: Some(format!(
            "Ollama is not reachable ({}); is \"ollama serve\" running?",
            hosts.join(", ")
        )),
    }
}
