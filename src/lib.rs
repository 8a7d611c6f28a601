//! # Course Registration Library
//!
//! This crate provides a course catalog and enrollment service with:
//! - RESTful HTTP API endpoints for courses, enrollments and students
//! - PostgreSQL for persistent storage, or an in-memory store
//! - Structured logging and Prometheus metrics
//!
//! ## Architecture
//!
//! Requests flow handler → service → repository → store:
//!
//! - **Domain Layer**: Entities and repository traits
//! - **Application Layer**: Services and DTOs
//! - **Infrastructure Layer**: PostgreSQL and in-memory repositories, metrics
//! - **Presentation Layer**: HTTP handlers, routes and middleware
//!
//! ## Module Structure
//!
//! ```text
//! course_registration/
//! +-- config/         Configuration management
//! +-- domain/         Entities and repository traits
//! +-- application/    Services and DTOs
//! +-- infrastructure/ Database, repositories and metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Error types
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
