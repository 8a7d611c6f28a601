//! Student Service
//!
//! Read access to the student roster.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Student, StudentRepository};
use crate::shared::error::AppError;

/// Student service trait
#[async_trait]
pub trait StudentService: Send + Sync {
    /// List every student on the roster
    async fn list_students(&self) -> Result<Vec<Student>, StudentError>;

    /// Add a student to the roster
    async fn add_student(&self, student: Student) -> Result<Student, StudentError>;
}

/// Student service errors
#[derive(Debug, thiserror::Error)]
pub enum StudentError {
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<AppError> for StudentError {
    fn from(e: AppError) -> Self {
        match e {
            AppError::Conflict(msg) => StudentError::Conflict(msg),
            e => StudentError::Store(e.to_string()),
        }
    }
}

impl From<StudentError> for AppError {
    fn from(e: StudentError) -> Self {
        match e {
            StudentError::Conflict(msg) => AppError::Conflict(msg),
            StudentError::Store(msg) => AppError::Internal(msg),
        }
    }
}

/// StudentService implementation
pub struct StudentServiceImpl<R: StudentRepository> {
    student_repo: Arc<R>,
}

impl<R: StudentRepository> StudentServiceImpl<R> {
    pub fn new(student_repo: Arc<R>) -> Self {
        Self { student_repo }
    }
}

#[async_trait]
impl<R: StudentRepository + 'static> StudentService for StudentServiceImpl<R> {
    async fn list_students(&self) -> Result<Vec<Student>, StudentError> {
        Ok(self.student_repo.find_all().await?)
    }

    async fn add_student(&self, student: Student) -> Result<Student, StudentError> {
        Ok(self.student_repo.insert(&student).await?)
    }
}
