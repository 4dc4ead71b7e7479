//! Error types for the handler registry.
//!
//! Only recoverable conditions live here. Duplicate registration is a
//! programmer error and aborts via panic inside
//! [`Registry::register`](crate::registry::Registry::register) instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// No handler is registered under the requested name
    #[error("handler {name} not found")]
    HandlerNotFound { name: String },

    /// The handler ran and failed. The inner error is the handler's own,
    /// untouched.
    #[error(transparent)]
    Handler(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl RegistryError {
    pub fn not_found(name: impl Into<String>) -> Self {
        RegistryError::HandlerNotFound { name: name.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::HandlerNotFound { .. })
    }

    /// The name that failed to resolve, if this is a not-found error
    pub fn missing_name(&self) -> Option<&str> {
        match self {
            RegistryError::HandlerNotFound { name } => Some(name),
            _ => None,
        }
    }

    /// Unwrap the error a handler returned from `execute`.
    ///
    /// Returns `Err(self)` for errors raised by the registry itself.
    pub fn into_handler_error(self) -> Result<anyhow::Error, Self> {
        match self {
            RegistryError::Handler(err) => Ok(err),
            other => Err(other),
        }
    }
}

impl From<config::ConfigError> for RegistryError {
    fn from(err: config::ConfigError) -> Self {
        RegistryError::Configuration(err.to_string())
    }
}

pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// What a handler's `execute` produces
pub type HandlerResult = anyhow::Result<serde_json::Value>;
