//! Enrollment entity and repository trait.
//!
//! Maps to the `course_registry` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::shared::error::AppError;

/// A student's registration for a named course.
///
/// Maps to the `course_registry` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - name: TEXT NOT NULL
/// - email_id: TEXT NOT NULL
/// - course_name: TEXT NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
///
/// `course_name` is free text. It is not a foreign key into `course` and is
/// never checked against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    /// Store-generated identifier
    pub id: i64,

    /// Student name
    pub name: String,

    /// Student email address
    pub email_id: String,

    /// Name of the course the student registered for
    pub course_name: String,

    /// When the store recorded the enrollment
    pub created_at: DateTime<Utc>,
}

/// Enrollment fields supplied by the caller; the store assigns `id` and
/// `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEnrollment {
    pub name: String,
    pub email_id: String,
    pub course_name: String,
}

impl NewEnrollment {
    pub fn new(
        name: impl Into<String>,
        email_id: impl Into<String>,
        course_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email_id: email_id.into(),
            course_name: course_name.into(),
        }
    }
}

#[cfg(test)]
impl Enrollment {
    /// Whether this record carries exactly the given caller-supplied fields.
    pub fn matches(&self, new: &NewEnrollment) -> bool {
        self.name == new.name && self.email_id == new.email_id && self.course_name == new.course_name
    }
}

/// Repository trait for Enrollment data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Persist a new enrollment and return it with its generated id.
    async fn insert(&self, enrollment: &NewEnrollment) -> Result<Enrollment, AppError>;

    /// Return every enrollment in insertion order.
    async fn find_all(&self) -> Result<Vec<Enrollment>, AppError>;
}
