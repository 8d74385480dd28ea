//! # rev-service
//!
//! HTTP/JSON transport for the risk evaluator: request validation at the
//! boundary, baggage extraction, the `Evaluate` span, and server lifecycle.
//! Exposed as a library so integration tests can drive the router directly.

pub mod error;
pub mod server;

pub use error::ServiceError;
pub use server::{evaluator_router, run_server, serve};
