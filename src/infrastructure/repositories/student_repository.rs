//! Student Repository Implementation

use async_trait::async_trait;
use sqlx::PgPool;

use super::map_insert_error;
use crate::domain::{Student, StudentRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct StudentRow {
    roll_no: i64,
    name: String,
    last_name: String,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Self {
            roll_no: row.roll_no,
            name: row.name,
            last_name: row.last_name,
        }
    }
}

/// PostgreSQL student repository implementation.
#[derive(Clone)]
pub struct PgStudentRepository {
    pool: PgPool,
}

impl PgStudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn insert(&self, student: &Student) -> Result<Student, AppError> {
        let row = sqlx::query_as::<_, StudentRow>(
            r#"
            INSERT INTO student (roll_no, name, last_name)
            VALUES ($1, $2, $3)
            RETURNING roll_no, name, last_name
            "#,
        )
        .bind(student.roll_no)
        .bind(&student.name)
        .bind(&student.last_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_insert_error(e, || format!("Student with roll number {} already exists", student.roll_no))
        })?;

        Ok(row.into())
    }

    async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        let rows = sqlx::query_as::<_, StudentRow>(
            "SELECT roll_no, name, last_name FROM student ORDER BY roll_no",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Student::from).collect())
    }
}
