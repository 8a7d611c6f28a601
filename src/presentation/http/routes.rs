//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(course_routes())
        // Student roster
        .route("/api/stud", get(handlers::student::list_students))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .layer(middleware::from_fn(metrics::track_http_metrics))
        .with_state(state)
}

/// Course catalog and enrollment routes
fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", get(handlers::course::list_courses))
        .route("/courses/enrolled", get(handlers::course::list_enrollments))
        .route(
            "/courses/enrolled/register",
            post(handlers::course::register),
        )
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> Result<impl IntoResponse, AppError> {
    let metrics = metrics::gather_metrics()?;
    Ok((
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    ))
}
