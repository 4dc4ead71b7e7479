//! # Execution Context
//!
//! Cancellation and deadline carrier handed to every handler invocation.
//!
//! The registry forwards the context untouched: it never checks for
//! cancellation and never enforces the deadline. Both are for handlers and
//! their callers to honour.

use std::time::{Duration, Instant};
use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ExecutionContext {
    execution_id: Uuid,
    cancellation: CancellationToken,
    deadline: Option<Instant>,
}

impl ExecutionContext {
    /// A context that is never cancelled unless `cancel` is called
    pub fn new() -> Self {
        Self {
            execution_id: Uuid::new_v4(),
            cancellation: CancellationToken::new(),
            deadline: None,
        }
    }

    /// A context whose deadline is `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new().with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Wrap an existing token, e.g. one tied to process shutdown
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Derive a context that is cancelled whenever this one is.
    ///
    /// The child gets its own execution id and inherits the deadline.
    /// Cancelling the child does not cancel the parent.
    pub fn child(&self) -> Self {
        Self {
            execution_id: Uuid::new_v4(),
            cancellation: self.cancellation.child_token(),
            deadline: self.deadline,
        }
    }

    pub fn execution_id(&self) -> Uuid {
        self.execution_id
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline; `None` when no deadline is set
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    pub fn is_expired(&self) -> bool {
        matches!(self.remaining(), Some(left) if left.is_zero())
    }

    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Resolves once the context is cancelled
    pub fn cancelled(&self) -> WaitForCancellationFuture<'_> {
        self.cancellation.cancelled()
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new()
    }
}
