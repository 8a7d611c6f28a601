//! Repository Implementations
//!
//! Concrete implementations of the repository traits defined in the domain
//! layer. Every trait has two implementations:
//!
//! - **PostgreSQL** (`Pg*Repository`) - production storage via sqlx
//! - **In-memory** (`InMemory*Repository`) - tests and the `memory` backend
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgCourseRepository, PgEnrollmentRepository};
//!
//! fn setup_repositories(pool: PgPool) {
//!     let course_repo = PgCourseRepository::new(pool.clone());
//!     let enrollment_repo = PgEnrollmentRepository::new(pool);
//! }
//! ```

pub mod course_repository;
pub mod enrollment_repository;
pub mod memory;
pub mod student_repository;

pub use course_repository::PgCourseRepository;
pub use enrollment_repository::PgEnrollmentRepository;
pub use memory::{
    InMemoryCourseRepository, InMemoryEnrollmentRepository, InMemoryStudentRepository,
};
pub use student_repository::PgStudentRepository;

use crate::shared::error::AppError;

/// Map a unique-constraint violation to a conflict, anything else to a database error.
pub(crate) fn map_insert_error(e: sqlx::Error, conflict: impl FnOnce() -> String) -> AppError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(conflict())
        }
        _ => AppError::Database(e),
    }
}
