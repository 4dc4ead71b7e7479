//! # Global Registry
//!
//! The single process-wide registry, created lazily on first use and never
//! torn down. The free functions here address it directly so callers need no
//! handle of their own.

use super::handler_registry::Registry;
use crate::client::ClientHandle;
use crate::config::RegistryConfig;
use crate::context::ExecutionContext;
use crate::error::RegistryResult;
use crate::handler::Handler;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tracing::{info, warn};

static GLOBAL_REGISTRY: OnceLock<Registry<ClientHandle>> = OnceLock::new();

/// The process-wide registry
pub fn global() -> &'static Registry<ClientHandle> {
    GLOBAL_REGISTRY.get_or_init(|| {
        let config = RegistryConfig::from_env().unwrap_or_else(|e| {
            warn!(error = %e, "Invalid registry configuration, using defaults");
            RegistryConfig::default()
        });
        info!(
            environment = %config.environment,
            "GLOBAL REGISTRY: Creating process-wide handler registry"
        );
        Registry::with_config(&config)
    })
}

/// Register a handler with the global registry.
///
/// # Panics
///
/// Panics on an empty or duplicate handler name, see [`Registry::register`].
pub fn register(handler: Arc<dyn Handler<ClientHandle>>) {
    global().register(handler);
}

pub fn lookup(name: &str) -> RegistryResult<Arc<dyn Handler<ClientHandle>>> {
    global().lookup(name)
}

pub fn list() -> HashMap<String, String> {
    global().list()
}

pub async fn execute_by_name(
    ctx: &ExecutionContext,
    name: &str,
    client: &ClientHandle,
    namespace: &str,
) -> RegistryResult<serde_json::Value> {
    global().execute_by_name(ctx, name, client, namespace).await
}
