//! # Cluster Client Handle
//!
//! The registry passes a client handle through to handlers without looking
//! inside it. Construction and authentication happen elsewhere; this module
//! only defines the shape of the handle used by the global registry.

use std::any::Any;
use std::sync::Arc;

/// An externally constructed connection to the cluster-management API.
///
/// Handlers recover their concrete client type through [`as_any`](Self::as_any).
pub trait ClusterClient: Send + Sync + 'static {
    /// Where the client points, for log context
    fn endpoint(&self) -> &str;

    fn as_any(&self) -> &dyn Any;
}

/// Client handle type used by the global registry
pub type ClientHandle = Arc<dyn ClusterClient>;

impl dyn ClusterClient {
    /// Borrow the concrete client, if it is a `T`
    pub fn downcast_ref<T: ClusterClient>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}
