//! Application Startup
//!
//! Storage selection, service composition and server initialization.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::signal;

use crate::application::services::{
    CourseError, CourseService, CourseServiceImpl, StudentError, StudentService,
    StudentServiceImpl,
};
use crate::config::{Settings, StorageBackend, StorageSettings};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    InMemoryCourseRepository, InMemoryEnrollmentRepository, InMemoryStudentRepository,
    PgCourseRepository, PgEnrollmentRepository, PgStudentRepository,
};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub course_service: Arc<dyn CourseService>,
    pub student_service: Arc<dyn StudentService>,
    /// Connection pool, present only for the postgres backend
    pub db: Option<PgPool>,
}

impl AppState {
    /// Services backed by PostgreSQL repositories sharing one pool
    pub fn postgres(pool: PgPool) -> Self {
        let course_service = CourseServiceImpl::new(
            Arc::new(PgCourseRepository::new(pool.clone())),
            Arc::new(PgEnrollmentRepository::new(pool.clone())),
        );
        let student_service =
            StudentServiceImpl::new(Arc::new(PgStudentRepository::new(pool.clone())));

        Self {
            course_service: Arc::new(course_service),
            student_service: Arc::new(student_service),
            db: Some(pool),
        }
    }

    /// Services backed by empty in-memory repositories
    pub fn in_memory() -> Self {
        let course_service = CourseServiceImpl::new(
            Arc::new(InMemoryCourseRepository::new()),
            Arc::new(InMemoryEnrollmentRepository::new()),
        );
        let student_service =
            StudentServiceImpl::new(Arc::new(InMemoryStudentRepository::new()));

        Self {
            course_service: Arc::new(course_service),
            student_service: Arc::new(student_service),
            db: None,
        }
    }
}

/// Insert configured seed rows. Rows whose key already exists are skipped so
/// a persistent store can be restarted with the same configuration.
pub async fn seed(state: &AppState, storage: &StorageSettings) -> Result<()> {
    for course in &storage.courses {
        match state.course_service.add_course(course.clone()).await {
            Ok(_) => {}
            Err(CourseError::Conflict(_)) => {
                tracing::debug!(course_id = %course.course_id, "Seed course already present");
            }
            Err(e) => return Err(e).context("Failed to seed courses"),
        }
    }

    for student in &storage.students {
        match state.student_service.add_student(student.clone()).await {
            Ok(_) => {}
            Err(StudentError::Conflict(_)) => {
                tracing::debug!(roll_no = student.roll_no, "Seed student already present");
            }
            Err(e) => return Err(e).context("Failed to seed students"),
        }
    }

    Ok(())
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let state = match settings.storage.backend {
            StorageBackend::Postgres => {
                let url = settings
                    .database
                    .url
                    .as_deref()
                    .context("database.url is not configured")?;

                let pool = database::create_pool(&settings.database, url).await?;
                tracing::info!("Database connection pool created");

                if settings.database.run_migrations {
                    database::run_migrations(&pool).await?;
                    tracing::info!("Database migrations applied");
                }

                AppState::postgres(pool)
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data is lost on shutdown");
                AppState::in_memory()
            }
        };

        seed(&state, &settings.storage).await?;
        tracing::info!(
            courses = settings.storage.courses.len(),
            students = settings.storage.students.len(),
            "Seed data applied"
        );

        handlers::health::init_server_start();

        // Build router with middleware
        let router = routes::create_router(state)
            .layer(logging::create_trace_layer())
            .layer(cors::create_cors_layer(&settings.cors));

        let listener = TcpListener::bind(settings.server_addr())
            .await
            .with_context(|| format!("Failed to bind {}", settings.server_addr()))?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until a shutdown signal arrives
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Server shut down gracefully");
        Ok(())
    }
}

/// Waits for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
