//! echo-api: a JSON health and echo HTTP service.
//!
//! `GET /health` reports liveness and `POST /echo` returns the posted JSON
//! document inside an `{"echoed": ...}` envelope.

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
