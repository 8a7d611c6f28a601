//! Application settings and configuration structures.

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::{Course, Student};

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Database configuration (PostgreSQL)
    pub database: DatabaseSettings,

    /// Storage backend selection and seed data
    pub storage: StorageSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// PostgreSQL database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Database connection URL (required for the postgres backend)
    pub url: Option<String>,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,

    /// Apply pending migrations at startup
    pub run_migrations: bool,
}

/// Where courses, enrollments and students are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Postgres => write!(f, "postgres"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub backend: StorageBackend,

    /// Courses inserted into the catalog at startup
    #[serde(default)]
    pub courses: Vec<Course>,

    /// Students inserted into the roster at startup
    #[serde(default)]
    pub students: Vec<Student>,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins; empty allows any origin
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. Built-in defaults
    /// 2. config/default.toml (base configuration)
    /// 3. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 4. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if the postgres backend is selected without a database URL.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        // Determine the running environment
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        let builder = Self::defaults(Config::builder(), &environment)?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Load from environment variables
            // APP__SERVER__PORT=3000 -> server.port = 3000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("storage.backend", std::env::var("STORAGE_BACKEND").ok())?;

        Self::build(builder)
    }

    /// Built-in default values, lowest priority.
    pub fn defaults(
        builder: ConfigBuilder<DefaultState>,
        environment: &str,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        builder
            .set_default("environment", environment)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("database.run_migrations", true)?
            .set_default("storage.backend", "postgres")?
            .set_default(
                "cors.allowed_origins",
                vec!["http://127.0.0.1:5500", "http://localhost:3000"],
            )
    }

    /// Deserialize and validate the merged configuration.
    pub fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .build()?
            .try_deserialize()
            .and_then(Self::validate)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.storage.backend == StorageBackend::Postgres && self.database.url.is_none() {
            return Err(ConfigError::Message(
                "database.url (or DATABASE_URL) is required when storage.backend is postgres"
                    .into(),
            ));
        }
        Ok(self)
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
