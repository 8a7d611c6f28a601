//! Course Handlers
//!
//! Catalog listing and enrollment endpoints.

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::response::{
    CourseResponse, EnrollmentConfirmationResponse, EnrollmentResponse,
};
use crate::infrastructure::metrics;
use crate::presentation::http::extractors::EnrollmentParams;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List every course in the catalog
pub async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseResponse>>, AppError> {
    let courses = state.course_service.list_courses().await?;

    Ok(Json(courses.into_iter().map(CourseResponse::from).collect()))
}

/// List every enrollment
pub async fn list_enrollments(
    State(state): State<AppState>,
) -> Result<Json<Vec<EnrollmentResponse>>, AppError> {
    let enrollments = state.course_service.list_enrollments().await?;

    Ok(Json(
        enrollments
            .into_iter()
            .map(EnrollmentResponse::from)
            .collect(),
    ))
}

/// Register a student for a course
pub async fn register(
    State(state): State<AppState>,
    EnrollmentParams(params): EnrollmentParams,
) -> Result<(StatusCode, Json<EnrollmentConfirmationResponse>), AppError> {
    let receipt = state.course_service.enroll(params.into()).await?;
    metrics::record_enrollment();

    Ok((StatusCode::CREATED, Json(receipt.into())))
}
