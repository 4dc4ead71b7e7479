//! # Registry Infrastructure
//!
//! Name-addressed handler registry and its process-wide instance.
//!
//! ## Architecture
//!
//! ```text
//! Registry Infrastructure
//! ├── Registry<C>        (RwLock-guarded name → handler map)
//! └── global             (lazily created Registry<ClientHandle>)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use async_trait::async_trait;
//! use handler_registry::registry::Registry;
//! use handler_registry::{ExecutionContext, Handler, HandlerResult};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! struct NodeCount;
//!
//! #[async_trait]
//! impl Handler<()> for NodeCount {
//!     fn name(&self) -> &str {
//!         "node-count"
//!     }
//!
//!     fn description(&self) -> &str {
//!         "Count cluster nodes"
//!     }
//!
//!     async fn execute(&self, _ctx: &ExecutionContext, _client: &(), _ns: &str) -> HandlerResult {
//!         Ok(json!(3))
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry: Registry<()> = Registry::new();
//! registry.register(Arc::new(NodeCount));
//!
//! let listing = registry.list();
//! assert_eq!(listing["node-count"], "Count cluster nodes");
//!
//! let value = registry
//!     .execute_by_name(&ExecutionContext::new(), "node-count", &(), "default")
//!     .await?;
//! assert_eq!(value, json!(3));
//! # Ok(())
//! # }
//! ```

pub mod global;
pub mod handler_registry;

// Re-export main types for easy access
pub use global::{execute_by_name, global, list, lookup, register};
pub use handler_registry::{Registry, RegistryStats};
