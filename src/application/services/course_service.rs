//! Course Service
//!
//! Catalog listing and course enrollment.
//!
//! Enrollment is permissive: the course name is stored as given
//! without checking it against the catalog, and repeated identical requests
//! each create a new record.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Course, CourseRepository, Enrollment, EnrollmentRepository, NewEnrollment};
use crate::shared::error::AppError;

/// Course service trait
#[async_trait]
pub trait CourseService: Send + Sync {
    /// List every course in the catalog
    async fn list_courses(&self) -> Result<Vec<Course>, CourseError>;

    /// List every recorded enrollment
    async fn list_enrollments(&self) -> Result<Vec<Enrollment>, CourseError>;

    /// Record a new enrollment and build its confirmation
    async fn enroll(&self, enrollment: NewEnrollment) -> Result<EnrollmentReceipt, CourseError>;

    /// Add a course to the catalog
    async fn add_course(&self, course: Course) -> Result<Course, CourseError>;
}

/// Result of a successful enrollment
#[derive(Debug, Clone)]
pub struct EnrollmentReceipt {
    pub enrollment: Enrollment,
    pub message: String,
}

/// Human-readable confirmation for an enrollment. Both values are embedded verbatim.
pub fn confirmation_message(name: &str, course_name: &str) -> String {
    format!("Congratulation {} Enrollment Successfully For {}", name, course_name)
}

/// Course service errors
#[derive(Debug, thiserror::Error)]
pub enum CourseError {
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<AppError> for CourseError {
    fn from(e: AppError) -> Self {
        match e {
            AppError::Conflict(msg) => CourseError::Conflict(msg),
            e => CourseError::Store(e.to_string()),
        }
    }
}

impl From<CourseError> for AppError {
    fn from(e: CourseError) -> Self {
        match e {
            CourseError::Conflict(msg) => AppError::Conflict(msg),
            CourseError::Store(msg) => AppError::Internal(msg),
        }
    }
}

/// CourseService implementation
pub struct CourseServiceImpl<C, E>
where
    C: CourseRepository,
    E: EnrollmentRepository,
{
    course_repo: Arc<C>,
    enrollment_repo: Arc<E>,
}

impl<C, E> CourseServiceImpl<C, E>
where
    C: CourseRepository,
    E: EnrollmentRepository,
{
    pub fn new(course_repo: Arc<C>, enrollment_repo: Arc<E>) -> Self {
        Self {
            course_repo,
            enrollment_repo,
        }
    }
}

#[async_trait]
impl<C, E> CourseService for CourseServiceImpl<C, E>
where
    C: CourseRepository + 'static,
    E: EnrollmentRepository + 'static,
{
    async fn list_courses(&self) -> Result<Vec<Course>, CourseError> {
        Ok(self.course_repo.find_all().await?)
    }

    async fn list_enrollments(&self) -> Result<Vec<Enrollment>, CourseError> {
        Ok(self.enrollment_repo.find_all().await?)
    }

    async fn enroll(&self, enrollment: NewEnrollment) -> Result<EnrollmentReceipt, CourseError> {
        let stored = self.enrollment_repo.insert(&enrollment).await?;

        tracing::info!(
            enrollment_id = stored.id,
            course_name = %stored.course_name,
            "Enrollment recorded"
        );

        let message = confirmation_message(&stored.name, &stored.course_name);
        Ok(EnrollmentReceipt {
            enrollment: stored,
            message,
        })
    }

    async fn add_course(&self, course: Course) -> Result<Course, CourseError> {
        let stored = self.course_repo.insert(&course).await?;
        tracing::debug!(course_id = %stored.course_id, "Course added to catalog");
        Ok(stored)
    }
}
