//! HTTP route handlers.
//!
//! Two routes are registered: `GET /health` and `POST /echo`. Anything else
//! gets the router's default 404, or 405 when only the method is wrong.
//!
//! Every response passes through the request ID middleware, and handler
//! panics are turned into a JSON 500 instead of dropping the connection.

pub mod echo;
pub mod health;

use std::any::Any;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use axum::http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_API;
use crate::error::AppError;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and layers.
pub fn create_router(state: AppState) -> Router {
    let max_body_bytes = state.config.echo.max_body_bytes;

    let api_routes = Router::new()
        .route("/health", get(health::health))
        .route("/echo", post(echo::echo))
        .route_layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_API),
        ))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state);

    with_middleware(api_routes)
}

/// Wrap a router in the layers shared by every response.
///
/// The request ID layer goes on last so its span is the outermost one.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(request_id_layer))
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(format!("handler panicked: {}", detail)).into_response()
}
