//! # Course Registration Server
//!
//! Application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Storage backend (PostgreSQL pool or in-memory)
//! - HTTP server

use anyhow::Result;
use tracing::info;

use course_registration::config::Settings;
use course_registration::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before tracing so RUST_LOG and LOG_FORMAT from the file apply
    let _ = dotenvy::dotenv();

    // Initialize tracing subscriber for structured logging
    course_registration::telemetry::init_tracing();

    info!("Starting Course Registration server...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        backend = %settings.storage.backend,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
