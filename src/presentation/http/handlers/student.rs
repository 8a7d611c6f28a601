//! Student Handlers

use axum::{extract::State, Json};

use crate::application::dto::response::StudentResponse;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// List every student on the roster
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let students = state.student_service.list_students().await?;

    Ok(Json(students.into_iter().map(StudentResponse::from).collect()))
}
