//! # Domain Entities
//!
//! Each entity maps directly to its database table:
//!
//! - **Course**: catalog entry (`course` table)
//! - **Enrollment**: a student's registration for a named course (`course_registry` table)
//! - **Student**: roster row (`student` table)
//!
//! ## Repository Traits
//!
//! Each entity has an explicit repository trait exposing `insert` and
//! `find_all`. These traits are implemented in the infrastructure layer.

mod course;
mod enrollment;
mod student;

pub use course::{Course, CourseRepository};
pub use enrollment::{Enrollment, EnrollmentRepository, NewEnrollment};
pub use student::{Student, StudentRepository};

#[cfg(test)]
pub use course::MockCourseRepository;
#[cfg(test)]
pub use enrollment::MockEnrollmentRepository;
#[cfg(test)]
pub use student::MockStudentRepository;
