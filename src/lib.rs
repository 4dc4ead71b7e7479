#![allow(clippy::doc_markdown)] // Allow technical terms in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Handler Registry
//!
//! Process-wide, thread-safe registry mapping unique names to pluggable
//! handlers, with discovery, enumeration, and invocation by name.
//!
//! ## Overview
//!
//! Handlers perform operations against an external cluster-management API.
//! The registry knows nothing about what they do: it tracks their identity and
//! dispatches to them, passing an execution context, a client handle, and a
//! namespace straight through.
//!
//! ## Module Organization
//!
//! - [`registry`] - The registry and its process-wide instance
//! - [`handler`] - The handler capability trait
//! - [`bootstrap`] - Explicit, ordered handler installation
//! - [`context`] - Cancellation and deadline carrier
//! - [`client`] - Opaque cluster client handle
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging setup and helpers
//!
//! ## Failure Categories
//!
//! - Unknown handler names are ordinary errors ([`RegistryError::HandlerNotFound`]).
//! - Registering a name twice is a wiring bug and panics.
//! - Handler failures pass through untouched ([`RegistryError::Handler`]).
//!
//! ## Testing
//!
//! ```bash
//! cargo test --lib    # Unit tests
//! cargo test          # All tests
//! ```

pub mod bootstrap;
pub mod client;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod handler;
pub mod logging;
pub mod registry;

pub use bootstrap::{Bootstrap, BootstrapReport};
pub use client::{ClientHandle, ClusterClient};
pub use config::RegistryConfig;
pub use context::ExecutionContext;
pub use error::{HandlerResult, RegistryError, RegistryResult};
pub use handler::Handler;
pub use registry::{Registry, RegistryStats};
