use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON body of every error response produced by the handlers.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match &self {
            AppError::MalformedBody(detail) => {
                tracing::debug!(detail = %detail, "Rejected request body");
                "invalid JSON"
            }
            AppError::Internal(_) => {
                tracing::error!("Internal error: {:?}", self);
                "internal server error"
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
