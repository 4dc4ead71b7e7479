//! # Handler Trait
//!
//! The capability set every registered unit of work provides. The registry
//! only ever sees handlers through this trait; concrete handler types live in
//! the packages that implement them.
//!
//! ## Usage
//!
//! ```rust
//! use async_trait::async_trait;
//! use handler_registry::{ExecutionContext, Handler, HandlerResult};
//! use serde_json::json;
//!
//! struct ListPods;
//!
//! #[async_trait]
//! impl Handler<String> for ListPods {
//!     fn name(&self) -> &str {
//!         "list-pods"
//!     }
//!
//!     fn description(&self) -> &str {
//!         "List pods in a namespace"
//!     }
//!
//!     async fn execute(
//!         &self,
//!         _ctx: &ExecutionContext,
//!         client: &String,
//!         namespace: &str,
//!     ) -> HandlerResult {
//!         Ok(json!({ "endpoint": client, "namespace": namespace, "pods": [] }))
//!     }
//! }
//! ```

use crate::context::ExecutionContext;
use crate::error::HandlerResult;
use async_trait::async_trait;

/// A named, executable unit of work.
///
/// `C` is the external client handle type. The registry never inspects it;
/// it is handed to [`execute`](Self::execute) exactly as the caller supplied it.
///
/// ## Thread Safety
///
/// Handlers are shared across threads behind `Arc` and may run concurrently,
/// so implementations must be `Send + Sync`.
#[async_trait]
pub trait Handler<C>: Send + Sync + 'static {
    /// Stable, non-empty identifier. Must be unique within a registry.
    fn name(&self) -> &str;

    /// Human-readable summary shown in listings
    fn description(&self) -> &str;

    /// Perform the handler's work.
    ///
    /// Cancellation and deadlines arrive through `ctx`; honouring them is the
    /// handler's job.
    async fn execute(&self, ctx: &ExecutionContext, client: &C, namespace: &str)
        -> HandlerResult;
}
