//! HTTP server module.
//!
//! Binds the listener, serves the router with `axum-server`, and drains
//! in-flight requests on SIGTERM/SIGINT before returning.

mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};
