//! # Structured Logging Module
//!
//! Environment-aware structured logging for registry activity. Handlers run
//! concurrently, so every event carries structured fields instead of being
//! baked into the message.

use crate::config::RegistryConfig;
use crate::constants::env;
use chrono::Utc;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging from environment configuration
pub fn init_structured_logging() {
    let config = RegistryConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Falling back to default logging configuration: {e}");
        RegistryConfig::default()
    });
    init_structured_logging_with(&config);
}

/// Initialize structured logging with an explicit configuration.
///
/// Only the first call installs a subscriber; later calls are no-ops.
pub fn init_structured_logging_with(config: &RegistryConfig) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = build_filter(&config.log_level);

        let layer = if config.json_logs() {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_ansi(false)
                .json()
                .with_filter(filter)
                .boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_ansi(true)
                .with_filter(filter)
                .boxed()
        };

        // An embedding application may already own the global subscriber
        if tracing_subscriber::registry().with(layer).try_init().is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        }

        tracing::info!(
            pid = std::process::id(),
            environment = %config.environment,
            log_level = %config.log_level,
            log_format = %config.log_format,
            "STRUCTURED LOGGING: Initialized"
        );
    });
}

/// `RUST_LOG` wins over the configured level
fn build_filter(log_level: &str) -> EnvFilter {
    match std::env::var(env::RUST_LOG) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(log_level),
    }
}

/// Log structured data for registry operations
pub fn log_registry_operation(
    operation: &str,
    name: Option<&str>,
    status: &str,
    details: Option<&str>,
) {
    tracing::info!(
        operation = %operation,
        name = name,
        status = %status,
        details = details,
        timestamp = %Utc::now().to_rfc3339(),
        "REGISTRY_OPERATION"
    );
}

/// Debug-level variant for high-frequency operations
pub fn trace_registry_operation(
    operation: &str,
    name: Option<&str>,
    status: &str,
    details: Option<&str>,
) {
    tracing::debug!(
        operation = %operation,
        name = name,
        status = %status,
        details = details,
        "REGISTRY_OPERATION"
    );
}

/// Log error with full context
pub fn log_error(component: &str, operation: &str, error: &str, context: Option<&str>) {
    tracing::error!(
        component = %component,
        operation = %operation,
        error = %error,
        context = context,
        timestamp = %Utc::now().to_rfc3339(),
        "ERROR"
    );
}
