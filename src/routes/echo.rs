//! JSON echo endpoint.
//!
//! The body is parsed into a `serde_json::Value` and returned inside an
//! `{"echoed": ...}` envelope. `Content-Type` is not checked. What happens
//! to a body that is not JSON depends on [`InvalidBodyPolicy`].
//!
//! serde_json is built with `arbitrary_precision`, so numbers are carried as
//! their source text: `-0`, `1e400` and integers wider than 64 bits come
//! back exactly as sent.

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::config::InvalidBodyPolicy;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub echoed: Value,
}

/// Echo handler.
pub async fn echo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<EchoResponse>, AppError> {
    let echoed = match parse_body(&body) {
        Ok(value) => value,
        Err(err) => match state.invalid_body_policy() {
            InvalidBodyPolicy::Reject => return Err(err),
            InvalidBodyPolicy::EchoNull => {
                tracing::debug!(error = %err, "Echoing null for unparseable body");
                Value::Null
            }
        },
    };

    Ok(Json(EchoResponse { echoed }))
}

fn parse_body(body: &[u8]) -> Result<Value, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::MalformedBody("request body is empty".to_string()));
    }
    serde_json::from_slice(body).map_err(|e| AppError::MalformedBody(e.to_string()))
}
