//! # Handler Bootstrap
//!
//! Explicit, ordered installation of handlers at process start. Callers list
//! every handler once, then install the whole set into a registry in one step.
//!
//! ```rust
//! use async_trait::async_trait;
//! use handler_registry::bootstrap::Bootstrap;
//! use handler_registry::registry::Registry;
//! use handler_registry::{ExecutionContext, Handler, HandlerResult};
//! use std::sync::Arc;
//!
//! struct Noop(&'static str);
//!
//! #[async_trait]
//! impl Handler<()> for Noop {
//!     fn name(&self) -> &str {
//!         self.0
//!     }
//!
//!     fn description(&self) -> &str {
//!         "Does nothing"
//!     }
//!
//!     async fn execute(&self, _ctx: &ExecutionContext, _client: &(), _ns: &str) -> HandlerResult {
//!         Ok(serde_json::Value::Null)
//!     }
//! }
//!
//! let registry: Registry<()> = Registry::new();
//! let report = Bootstrap::<()>::new()
//!     .with_handler(Arc::new(Noop("first")))
//!     .with_handler(Arc::new(Noop("second")))
//!     .install(&registry);
//!
//! assert_eq!(report.installed, vec!["first", "second"]);
//! assert_eq!(registry.len(), 2);
//! ```

use crate::client::ClientHandle;
use crate::constants::{operations, status};
use crate::handler::Handler;
use crate::logging::log_registry_operation;
use crate::registry::{self, Registry};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Ordered set of handlers waiting to be installed
pub struct Bootstrap<C> {
    handlers: Vec<Arc<dyn Handler<C>>>,
}

/// Outcome of a bootstrap run
#[derive(Debug, Clone)]
pub struct BootstrapReport {
    /// Handler names in installation order
    pub installed: Vec<String>,
    pub elapsed: Duration,
}

impl<C> Bootstrap<C>
where
    C: Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn with_handler(mut self, handler: Arc<dyn Handler<C>>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn with_handlers<I>(mut self, handlers: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Handler<C>>>,
    {
        self.handlers.extend(handlers);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Register every handler, in the order added.
    ///
    /// # Panics
    ///
    /// Panics on the first empty or duplicate name, exactly as
    /// [`Registry::register`] does. Handlers before it stay registered.
    pub fn install(self, registry: &Registry<C>) -> BootstrapReport {
        let started = Instant::now();
        let mut installed = Vec::with_capacity(self.handlers.len());

        for handler in self.handlers {
            let name = handler.name().to_string();
            registry.register(handler);
            installed.push(name);
        }

        let report = BootstrapReport {
            installed,
            elapsed: started.elapsed(),
        };

        let details = format!(
            "{} handlers in {}us",
            report.installed.len(),
            report.elapsed.as_micros()
        );
        log_registry_operation(operations::BOOTSTRAP, None, status::COMPLETED, Some(&details));

        report
    }
}

impl<C> Default for Bootstrap<C>
where
    C: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Install a bootstrap set into the process-wide registry
pub fn install_global(bootstrap: Bootstrap<ClientHandle>) -> BootstrapReport {
    bootstrap.install(registry::global())
}
