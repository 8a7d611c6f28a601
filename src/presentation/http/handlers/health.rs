//! Health Check Handlers
//!
//! Provides health check endpoints for liveness and readiness probes.
//!
//! # Endpoints
//! - `GET /health` - Basic health check
//! - `GET /health/live` - Liveness probe (is the server running?)
//! - `GET /health/ready` - Readiness probe (is the store reachable?)

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::time::Instant;

use crate::infrastructure::database;
use crate::startup::AppState;

/// Server start time for uptime calculation
static SERVER_START: Lazy<Instant> = Lazy::new(Instant::now);
static SERVER_START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Initialize the server start time (call during startup)
pub fn init_server_start() {
    Lazy::force(&SERVER_START);
    Lazy::force(&SERVER_START_TIME);
}

/// Basic health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Detailed readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub started_at: String,
    pub storage: StorageHealth,
}

/// Health of the backing store
#[derive(Debug, Serialize)]
pub struct StorageHealth {
    pub backend: &'static str,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Overall health status
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Simple liveness response
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: &'static str,
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Liveness probe - always 200 while the process is serving
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse { status: "alive" })
}

/// Readiness probe - 503 when the store cannot be reached
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let storage = check_storage(&state).await;

    let response = ReadinessResponse {
        status: storage.status,
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: SERVER_START.elapsed().as_secs(),
        started_at: SERVER_START_TIME.to_rfc3339(),
        storage,
    };

    let status_code = match response.status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Check store connectivity and latency
async fn check_storage(state: &AppState) -> StorageHealth {
    let Some(pool) = &state.db else {
        return StorageHealth {
            backend: "memory",
            status: HealthStatus::Healthy,
            latency_ms: None,
            message: None,
        };
    };

    let start = Instant::now();
    match database::ping(pool).await {
        Ok(()) => {
            let latency = start.elapsed().as_millis() as u64;
            StorageHealth {
                backend: "postgres",
                status: latency_status(latency),
                latency_ms: Some(latency),
                message: None,
            }
        }
        Err(e) => StorageHealth {
            backend: "postgres",
            status: HealthStatus::Unhealthy,
            latency_ms: None,
            message: Some(format!("Database connection failed: {}", e)),
        },
    }
}

/// Slow but successful round trips count as degraded
fn latency_status(latency_ms: u64) -> HealthStatus {
    if latency_ms < 100 {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    }
}
