//! Telemetry and Observability
//!
//! Structured logging setup. Set `LOG_FORMAT=json` for JSON lines output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,course_registration=debug,sqlx=warn,tower_http=debug";

/// Initialize tracing subscriber
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let json = json_format_requested(std::env::var("LOG_FORMAT").ok().as_deref());

    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    }

    tracing::info!("Tracing initialized");
}

fn json_format_requested(log_format: Option<&str>) -> bool {
    log_format.is_some_and(|v| v.trim().eq_ignore_ascii_case("json"))
}
