//! Request ID middleware for correlating logs with requests.
//!
//! The echo service keeps no per-request state, so the request ID is the
//! only thing tying a client's call to the server's log lines. Every
//! request, including 404/405 fallbacks and caught panics, runs inside a
//! `request` span carrying the ID, method, path and duration, and the ID is
//! returned in the `x-request-id` response header.
//!
//! When a proxy in front of the service already assigned a UUID in
//! `x-request-id`, that ID is kept so logs on both sides line up. Anything
//! else in the header is ignored and a fresh UUID v4 is generated.

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::config::REQUEST_ID_HEADER;

/// Request ID, available to handlers through request extensions.
#[derive(Clone, Copy, Debug)]
pub struct RequestId(pub Uuid);

/// Middleware that assigns a request ID and runs the request inside a span.
///
/// Must be the outermost layer so the span also covers the other layers.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let request_id = inbound_request_id(request.headers()).unwrap_or_else(Uuid::new_v4);

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();
    request.extensions_mut().insert(RequestId(request_id));

    async move {
        let mut response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        // A hyphenated UUID is always a valid header value
        if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }

        response
    }
    .instrument(span)
    .await
}

/// A UUID supplied by the caller in `x-request-id`, if there is one.
fn inbound_request_id(headers: &HeaderMap) -> Option<Uuid> {
    let value = headers.get(REQUEST_ID_HEADER)?.to_str().ok()?;
    Uuid::parse_str(value.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, routing::get, Extension, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn response_carries_the_id_seen_by_the_handler() {
        let app = Router::new()
            .route(
                "/",
                get(|Extension(RequestId(id)): Extension<RequestId>| async move { id.to_string() }),
            )
            .layer(axum::middleware::from_fn(request_id_layer));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let header = response.headers()[REQUEST_ID_HEADER].to_str().unwrap().to_string();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(header.as_bytes(), &body[..]);
        assert!(Uuid::parse_str(&header).is_ok());
    }

    #[tokio::test]
    async fn unmatched_requests_also_get_an_id() {
        let app = Router::new().layer(axum::middleware::from_fn(request_id_layer));

        let response = app
            .oneshot(Request::builder().uri("/nowhere").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn inbound_uuid_is_propagated() {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn(request_id_layer));
        let inbound = "6f1c1c7e-2f4b-4a8e-9d3a-0b5e2a9c4d11";

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(REQUEST_ID_HEADER, inbound)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[REQUEST_ID_HEADER], inbound);
    }

    #[tokio::test]
    async fn malformed_inbound_id_is_replaced() {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn(request_id_layer));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(REQUEST_ID_HEADER, "abc; DROP TABLE")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let header = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
        assert_ne!(header, "abc; DROP TABLE");
        assert!(Uuid::parse_str(header).is_ok());
    }
}
