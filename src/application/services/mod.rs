//! Application Services
//!
//! Business logic services that coordinate repository operations. Each
//! service receives its repositories at construction.
//!
//! ## Available Services
//!
//! - **CourseService**: Course catalog listing and enrollment
//! - **StudentService**: Student roster listing

pub mod course_service;
pub mod student_service;

// Re-export course service types
pub use course_service::{
    confirmation_message, CourseError, CourseService, CourseServiceImpl, EnrollmentReceipt,
};

// Re-export student service types
pub use student_service::{StudentError, StudentService, StudentServiceImpl};
