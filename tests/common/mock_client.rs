//! Mock cluster client for exercising handler dispatch without a cluster.

use handler_registry::{ClientHandle, ClusterClient};
use std::any::Any;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockClusterClient {
    pub endpoint: String,
    pub token: String,
}

impl MockClusterClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: "test-token".to_string(),
        }
    }

    pub fn handle(endpoint: impl Into<String>) -> ClientHandle {
        Arc::new(Self::new(endpoint))
    }
}

impl ClusterClient for MockClusterClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
