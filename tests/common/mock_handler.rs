//! Mock Handler Implementation for Testing
//!
//! Records every invocation and replays a configured outcome so tests can
//! check exactly what the registry passed through and returned.

use async_trait::async_trait;
use handler_registry::{ClientHandle, ExecutionContext, Handler, HandlerResult};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

/// One recorded call to `execute`
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub execution_id: Uuid,
    pub endpoint: String,
    pub client: ClientHandleId,
    pub namespace: String,
}

/// Pointer identity of the client handle a handler received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientHandleId(pub usize);

impl ClientHandleId {
    pub fn of(client: &ClientHandle) -> Self {
        Self(Arc::as_ptr(client) as *const () as usize)
    }
}

#[derive(Debug, Clone)]
pub enum MockOutcome {
    Value(Value),
    Failure(String),
}

pub struct MockHandler {
    name: String,
    description: String,
    outcome: MockOutcome,
    /// Simulated work; aborted early if the context is cancelled
    delay: Option<Duration>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockHandler {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            outcome: MockOutcome::Value(json!({ "handled_by": name.clone() })),
            name,
            description: description.into(),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn returning(mut self, value: Value) -> Self {
        self.outcome = MockOutcome::Value(value);
        self
    }

    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.outcome = MockOutcome::Failure(message.into());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Handler<ClientHandle> for MockHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn execute(
        &self,
        ctx: &ExecutionContext,
        client: &ClientHandle,
        namespace: &str,
    ) -> HandlerResult {
        self.calls.lock().unwrap().push(RecordedCall {
            execution_id: ctx.execution_id(),
            endpoint: client.endpoint().to_string(),
            client: ClientHandleId::of(client),
            namespace: namespace.to_string(),
        });

        if let Some(delay) = self.delay {
            tokio::select! {
                _ = ctx.cancelled() => anyhow::bail!("{} cancelled", self.name),
                _ = tokio::time::sleep(delay) => {}
            }
        }

        match &self.outcome {
            MockOutcome::Value(value) => Ok(value.clone()),
            MockOutcome::Failure(message) => Err(anyhow::anyhow!(message.clone())),
        }
    }
}

/// Build `count` handlers named `{prefix}-{i}`
pub fn numbered_handlers(prefix: &str, count: usize) -> Vec<Arc<MockHandler>> {
    (0..count)
        .map(|i| {
            MockHandler::new(format!("{prefix}-{i}"), format!("{prefix} handler number {i}"))
                .shared()
        })
        .collect()
}
