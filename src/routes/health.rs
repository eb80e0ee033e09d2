//! Health check endpoint for container orchestration.
//!
//! A liveness probe: it answers 200 whenever the process can serve HTTP and
//! checks nothing else.

use axum::Json;
use serde::Serialize;

pub const HEALTHY_STATUS: &str = "healthy";
pub const HEALTHY_MESSAGE: &str = "API is running";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTHY_STATUS,
        message: HEALTHY_MESSAGE,
    })
}
