//! # Handler Registry
//!
//! Thread-safe name → handler map with register, lookup, list and
//! execute-by-name.
//!
//! ## Locking
//!
//! A single `parking_lot::RwLock` guards the map. `register` holds the write
//! lock for one check-and-insert. `lookup` and `list` take the read lock.
//! `execute_by_name` resolves the handler, releases the lock, and only then
//! awaits the handler, so a slow handler never blocks other callers.
//!
//! ## Append-only
//!
//! Handlers are never removed or replaced. Registering a name twice is a
//! programmer error and panics.

use crate::config::RegistryConfig;
use crate::constants::{operations, status};
use crate::context::ExecutionContext;
use crate::error::{RegistryError, RegistryResult};
use crate::handler::Handler;
use crate::logging::{log_error, log_registry_operation, trace_registry_operation};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

/// Registry statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    pub total_handlers: usize,
    /// Sorted handler names
    pub names: Vec<String>,
}

/// Name → handler registry, generic over the client handle type `C`
pub struct Registry<C> {
    handlers: RwLock<HashMap<String, Arc<dyn Handler<C>>>>,
    log_registrations: bool,
}

impl<C> Registry<C>
where
    C: Send + Sync + 'static,
{
    /// Create an empty registry
    pub fn new() -> Self {
        Self::with_config(&RegistryConfig::default())
    }

    /// Create an empty registry honouring the logging settings in `config`
    pub fn with_config(config: &RegistryConfig) -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            log_registrations: config.log_registrations,
        }
    }

    /// Register a handler under its own name.
    ///
    /// # Panics
    ///
    /// Panics if the handler's name is empty or already registered. Both mean
    /// two handler packages were wired up wrongly, which no caller can recover
    /// from. The existing registration is left untouched.
    pub fn register(&self, handler: Arc<dyn Handler<C>>) {
        let name = handler.name().to_string();
        if name.is_empty() {
            log_error(
                "Registry",
                operations::REGISTER,
                "handler name must not be empty",
                Some(handler.description()),
            );
            panic!("cannot register a handler with an empty name");
        }

        let inserted = {
            let mut handlers = self.handlers.write();
            match handlers.entry(name.clone()) {
                Entry::Occupied(_) => false,
                Entry::Vacant(slot) => {
                    slot.insert(Arc::clone(&handler));
                    true
                }
            }
        };

        if !inserted {
            log_error(
                "Registry",
                operations::REGISTER,
                "duplicate handler name",
                Some(&name),
            );
            panic!("handler {name} already registered");
        }

        if self.log_registrations {
            log_registry_operation(
                operations::REGISTER,
                Some(&name),
                status::REGISTERED,
                Some(handler.description()),
            );
        } else {
            trace_registry_operation(
                operations::REGISTER,
                Some(&name),
                status::REGISTERED,
                Some(handler.description()),
            );
        }
    }

    /// Resolve a handler by name.
    ///
    /// Every successful lookup of the same name returns the same `Arc`.
    pub fn lookup(&self, name: &str) -> RegistryResult<Arc<dyn Handler<C>>> {
        let found = self.handlers.read().get(name).cloned();

        found.ok_or_else(|| {
            trace_registry_operation(operations::LOOKUP, Some(name), status::NOT_FOUND, None);
            RegistryError::not_found(name)
        })
    }

    /// Snapshot of every registered name and its description
    pub fn list(&self) -> HashMap<String, String> {
        let handlers = self.handlers.read();
        handlers
            .iter()
            .map(|(name, handler)| (name.clone(), handler.description().to_string()))
            .collect()
    }

    /// Look up `name` and run it with the given arguments.
    ///
    /// A missing handler yields [`RegistryError::HandlerNotFound`] and nothing
    /// runs. Otherwise the handler's value is returned as-is and its error is
    /// carried unchanged in [`RegistryError::Handler`]. No timeout, retry or
    /// caching is applied.
    #[instrument(
        level = "debug",
        name = "execute_handler",
        skip(self, ctx, client),
        fields(execution_id = %ctx.execution_id())
    )]
    pub async fn execute_by_name(
        &self,
        ctx: &ExecutionContext,
        name: &str,
        client: &C,
        namespace: &str,
    ) -> RegistryResult<serde_json::Value> {
        let handler = self.lookup(name)?;
        let target = format!("namespace={namespace}");
        trace_registry_operation(operations::EXECUTE, Some(name), status::STARTED, Some(&target));

        match handler.execute(ctx, client, namespace).await {
            Ok(value) => {
                trace_registry_operation(operations::EXECUTE, Some(name), status::SUCCEEDED, None);
                Ok(value)
            }
            Err(err) => {
                let details = err.to_string();
                trace_registry_operation(
                    operations::EXECUTE,
                    Some(name),
                    status::FAILED,
                    Some(&details),
                );
                Err(RegistryError::Handler(err))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }

    /// Check if a handler is registered with this name
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.read().contains_key(name)
    }

    /// All registered handler names, sorted
    pub fn handler_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.handlers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn stats(&self) -> RegistryStats {
        let names = self.handler_names();
        RegistryStats {
            total_handlers: names.len(),
            names,
        }
    }
}

impl<C> Default for Registry<C>
where
    C: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Debug for Registry<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let handlers = self.handlers.read();
        let mut names: Vec<&String> = handlers.keys().collect();
        names.sort();
        f.debug_struct("Registry")
            .field("handlers", &names)
            .field("log_registrations", &self.log_registrations)
            .finish()
    }
}
