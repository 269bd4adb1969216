use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

impl ServiceStatus {
    fn ok(details: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            details: Some(details.into()),
        }
    }

    fn error(details: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            details: Some(details.into()),
        }
    }

    fn disabled(details: impl Into<String>) -> Self {
        Self {
            status: "disabled".to_string(),
            details: Some(details.into()),
        }
    }
}

const PING_TIMEOUT: Duration = Duration::from_secs(3);

pub async fn health() -> impl Responder {
    "OK"
}

pub async fn health_details(state: web::Data<AppState>) -> impl Responder {
    let mut services = HashMap::new();

    let mongo = match tokio::time::timeout(PING_TIMEOUT, state.db.ping()).await {
        Ok(Ok(())) => ServiceStatus::ok("Connected to MongoDB"),
        Ok(Err(e)) => {
            log::warn!("MongoDB health check failed: {}", e);
            ServiceStatus::error(format!("Failed to connect: {}", e))
        }
        Err(_) => {
            log::warn!("MongoDB health check timed out");
            ServiceStatus::error(format!("No ping reply within {}s", PING_TIMEOUT.as_secs()))
        }
    };
    services.insert("mongodb".to_string(), mongo);

    let google = if state.google.is_some() {
        ServiceStatus::ok("Google sign-in configured")
    } else {
        ServiceStatus::disabled("GOOGLE_CLIENT_ID, GOOGLE_CLIENT_SECRET or GOOGLE_REDIRECT_URI not set")
    };
    services.insert("google_auth".to_string(), google);

    let storage = match (&state.avatars, &state.settings.avatar_bucket) {
        (Some(_), Some(bucket)) => ServiceStatus::ok(format!("Avatar bucket '{}'", bucket)),
        (None, Some(bucket)) => ServiceStatus::error(format!("Avatar bucket '{}' unavailable", bucket)),
        (_, None) => ServiceStatus::disabled("AVATAR_BUCKET not set"),
    };
    services.insert("cloud_storage".to_string(), storage);

    let degraded = services.values().any(|service| service.status == "error");

    HttpResponse::Ok().json(HealthStatus {
        status: if degraded { "degraded" } else { "ok" }.to_string(),
        services,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
