//! Health Check Endpoint
//!
//! Deep health check: a plain 200 only says the process is alive, so this
//! also pings the store and the address-lookup dependency. Load balancers
//! and probes can route traffic away when either goes dark.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: DatabaseStatus,
    pub services: ExternalServices,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct DatabaseStatus {
    pub connected: bool,
    pub latency_ms: Option<u64>,
}

#[derive(Serialize)]
pub struct ExternalServices {
    pub viacep: bool,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_start = std::time::Instant::now();
    let database = match state.db.health_check().await {
        Ok(_) => DatabaseStatus {
            connected: true,
            latency_ms: Some(db_start.elapsed().as_millis() as u64),
        },
        Err(_) => DatabaseStatus {
            connected: false,
            latency_ms: None,
        },
    };

    let viacep = state.address_lookup.health_check().await;

    let status = if database.connected && viacep {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
        services: ExternalServices { viacep },
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
