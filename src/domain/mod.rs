//! # Domain Layer
//!
//! Core business objects of the course registration service. Independent of
//! the HTTP framework and of any particular store.
//!
//! ## Structure
//!
//! - **entities**: Course, Enrollment, Student and their repository traits
//!
//! Repository traits define the data access contracts; the infrastructure
//! layer provides PostgreSQL and in-memory implementations.

pub mod entities;

// Re-export commonly used types
pub use entities::*;
