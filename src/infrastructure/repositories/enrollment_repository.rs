//! Enrollment Repository Implementation
//!
//! PostgreSQL implementation of the EnrollmentRepository trait, backed by the
//! `course_registry` table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Enrollment, EnrollmentRepository, NewEnrollment};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct EnrollmentRow {
    id: i64,
    name: String,
    email_id: String,
    course_name: String,
    created_at: DateTime<Utc>,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(row: EnrollmentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email_id: row.email_id,
            course_name: row.course_name,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL enrollment repository implementation.
#[derive(Clone)]
pub struct PgEnrollmentRepository {
    pool: PgPool,
}

impl PgEnrollmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentRepository for PgEnrollmentRepository {
    /// Insert a row; `id` and `created_at` come from column defaults.
    async fn insert(&self, enrollment: &NewEnrollment) -> Result<Enrollment, AppError> {
        let row = sqlx::query_as::<_, EnrollmentRow>(
            r#"
            INSERT INTO course_registry (name, email_id, course_name)
            VALUES ($1, $2, $3)
            RETURNING id, name, email_id, course_name, created_at
            "#,
        )
        .bind(&enrollment.name)
        .bind(&enrollment.email_id)
        .bind(&enrollment.course_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<Enrollment>, AppError> {
        let rows = sqlx::query_as::<_, EnrollmentRow>(
            r#"
            SELECT id, name, email_id, course_name, created_at
            FROM course_registry
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Enrollment::from).collect())
    }
}
