//! Course Repository Implementation
//!
//! PostgreSQL implementation of the CourseRepository trait.

use async_trait::async_trait;
use sqlx::PgPool;

use super::map_insert_error;
use crate::domain::{Course, CourseRepository};
use crate::shared::error::AppError;

/// Database row representation of the `course` table.
#[derive(Debug, sqlx::FromRow)]
struct CourseRow {
    course_id: String,
    course_name: String,
    trainer: String,
    duration_in_week: i32,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Self {
            course_id: row.course_id,
            course_name: row.course_name,
            trainer: row.trainer,
            duration_in_week: row.duration_in_week,
        }
    }
}

/// PostgreSQL course repository implementation.
#[derive(Clone)]
pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    /// Create a new PgCourseRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn insert(&self, course: &Course) -> Result<Course, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            INSERT INTO course (course_id, course_name, trainer, duration_in_week)
            VALUES ($1, $2, $3, $4)
            RETURNING course_id, course_name, trainer, duration_in_week
            "#,
        )
        .bind(&course.course_id)
        .bind(&course.course_name)
        .bind(&course.trainer)
        .bind(course.duration_in_week)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_insert_error(e, || format!("Course with id {} already exists", course.course_id))
        })?;

        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<Course>, AppError> {
        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT course_id, course_name, trainer, duration_in_week
            FROM course
            ORDER BY course_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Course::from).collect())
    }
}
