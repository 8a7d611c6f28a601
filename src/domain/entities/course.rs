//! Course entity and repository trait.
//!
//! Maps to the `course` table in the database schema.

use async_trait::async_trait;
use serde::Deserialize;

use crate::shared::error::AppError;

/// A catalog entry for a course offering.
///
/// Maps to the `course` table:
/// - course_id: VARCHAR(64) PRIMARY KEY
/// - course_name: TEXT NOT NULL
/// - trainer: TEXT NOT NULL
/// - duration_in_week: INTEGER NOT NULL
///
/// Courses are only ever created and read; there is no update path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Course {
    /// Course identifier (primary key)
    pub course_id: String,

    /// Display name, e.g. "Full Stack Java"
    pub course_name: String,

    /// Trainer running the course
    pub trainer: String,

    /// Length of the course in weeks
    pub duration_in_week: i32,
}

impl Course {
    pub fn new(
        course_id: impl Into<String>,
        course_name: impl Into<String>,
        trainer: impl Into<String>,
        duration_in_week: i32,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            course_name: course_name.into(),
            trainer: trainer.into(),
            duration_in_week,
        }
    }
}

/// Repository trait for Course data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Insert a new course. Fails with `AppError::Conflict` if the id exists.
    async fn insert(&self, course: &Course) -> Result<Course, AppError>;

    /// Return every course, ordered by id.
    async fn find_all(&self) -> Result<Vec<Course>, AppError>;
}
