//! Student entity and repository trait.

use async_trait::async_trait;
use serde::Deserialize;

use crate::shared::error::AppError;

/// A roster row.
///
/// Maps to the `student` table:
/// - roll_no: BIGINT PRIMARY KEY
/// - name: TEXT NOT NULL
/// - last_name: TEXT NOT NULL
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Student {
    pub roll_no: i64,
    pub name: String,
    pub last_name: String,
}

impl Student {
    pub fn new(roll_no: i64, name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            roll_no,
            name: name.into(),
            last_name: last_name.into(),
        }
    }
}

/// Repository trait for Student data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Insert a student. Fails with `AppError::Conflict` if the roll number exists.
    async fn insert(&self, student: &Student) -> Result<Student, AppError>;

    /// Return every student, ordered by roll number.
    async fn find_all(&self) -> Result<Vec<Student>, AppError>;
}
