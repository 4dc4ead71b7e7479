//! # System Constants
//!
//! Environment variable names, defaults, and the operation labels used in
//! structured registry log events.

/// Environment variable names read by configuration and logging
pub mod env {
    /// Prefix for layered configuration (`HANDLER_REGISTRY_LOG_LEVEL`, ...)
    pub const CONFIG_PREFIX: &str = "HANDLER_REGISTRY";
    pub const ENVIRONMENT: &str = "HANDLER_REGISTRY_ENV";
    pub const FALLBACK_ENVIRONMENT: &str = "APP_ENV";
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Configuration defaults
pub mod defaults {
    pub const ENVIRONMENT: &str = "development";
    pub const LOG_LEVEL: &str = "debug";
    pub const PRODUCTION_LOG_LEVEL: &str = "info";
    pub const LOG_FORMAT: &str = "pretty";
}

/// Accepted values for `log_format`
pub mod log_formats {
    pub const PRETTY: &str = "pretty";
    pub const JSON: &str = "json";

    pub const ALL: &[&str] = &[PRETTY, JSON];
}

/// Operation labels attached to registry log events
pub mod operations {
    pub const REGISTER: &str = "register";
    pub const LOOKUP: &str = "lookup";
    pub const EXECUTE: &str = "execute";
    pub const BOOTSTRAP: &str = "bootstrap";
}

/// Status labels attached to registry log events
pub mod status {
    pub const REGISTERED: &str = "registered";
    pub const NOT_FOUND: &str = "not_found";
    pub const STARTED: &str = "started";
    pub const SUCCEEDED: &str = "succeeded";
    pub const FAILED: &str = "failed";
    pub const COMPLETED: &str = "completed";
}
