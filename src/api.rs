//! Unified API router for the calendar service
//!
//! Merges the events router with a root health probe and wraps the whole
//! application in the middleware stack: request-id assignment/propagation,
//! per-request tracing, and CORS.
//!
//! ## Endpoint Map
//!
//! | Path                | Module | Description                        |
//! |---------------------|--------|------------------------------------|
//! | `/health`           | —      | Load balancer health probe         |
//! | `/create_event`     | events | Create an event                    |
//! | `/update_event`     | events | Replace an event                   |
//! | `/delete_event`     | events | Delete an event by id              |
//! | `/events_for_day`   | events | Events on the current day          |
//! | `/events_for_week`  | events | Events in the current week         |
//! | `/events_for_month` | events | Events in the current month        |
//! | `/events_for_all`   | events | Every stored event                 |

use crate::events::{events_router, EventsState};
use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

/// Build the complete calendar HTTP application
///
/// Returns a single `Router` ready to be served by `axum::serve`.
pub fn build_app(events_state: EventsState) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            let request_id = request
                .headers()
                .get("x-request-id")
                .and_then(|value| value.to_str().ok())
                .unwrap_or("unknown");
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                %request_id,
            )
        })
        .on_request(|_request: &Request<Body>, _span: &tracing::Span| {
            tracing::info!("started");
        })
        .on_response(
            |response: &Response, latency: Duration, _span: &tracing::Span| {
                tracing::info!(
                    status_code = response.status().as_u16(),
                    latency_ms = latency.as_millis() as u64,
                    "completed"
                );
            },
        );

    // Set runs outermost so the trace span and the handlers see the id;
    // propagate copies it onto the response.
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(RequestUuid))
        .layer(trace)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(build_cors());

    Router::new()
        .route("/health", get(health_check))
        .merge(events_router(events_state))
        .layer(middleware)
}

/// Request-id maker: a fresh UUID per request.
///
/// `SetRequestIdLayer` only consults this when the client did not already
/// supply an `X-Request-ID` header, so caller-chosen ids survive.
#[derive(Clone, Copy, Default)]
struct RequestUuid;

impl MakeRequestId for RequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = uuid::Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventStore;
    use axum::http::StatusCode;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn make_app() -> Router {
        build_app(EventsState {
            store: Arc::new(EventStore::new()),
        })
    }

    #[tokio::test]
    async fn test_health_check() {
        let resp = make_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = axum::body::to_bytes(resp.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_request_id_is_generated() {
        let resp = make_app()
            .oneshot(
                Request::builder()
                    .uri("/events_for_all")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let id = resp
            .headers()
            .get("x-request-id")
            .and_then(|value| value.to_str().ok())
            .expect("response carries a generated request id");
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }

    #[tokio::test]
    async fn test_request_id_is_preserved() {
        let resp = make_app()
            .oneshot(
                Request::builder()
                    .uri("/events_for_all")
                    .header("x-request-id", "caller-chosen-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            resp.headers().get("x-request-id").unwrap(),
            "caller-chosen-id"
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let resp = make_app()
            .oneshot(
                Request::builder()
                    .uri("/events_for_year")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
