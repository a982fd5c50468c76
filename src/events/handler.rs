//! HTTP handlers for the calendar API
//!
//! Maps the store contract onto 7 endpoints:
//! - POST /create_event      — submit a new event body
//! - POST /update_event      — resubmit a full event body (id embedded)
//! - POST /delete_event?id=  — remove an event by id
//! - GET  /events_for_day    — events on the current day
//! - GET  /events_for_week   — events in the current Monday-started week
//! - GET  /events_for_month  — events in the current month
//! - GET  /events_for_all    — every stored event
//!
//! Mutation bodies are passed to the store as raw bytes; the store owns
//! decoding and validation. Store errors map to 400 (bad input on
//! create/update) or 404 (delete miss) with an `{"error": ...}` body.

use crate::events::store::{EventStore, StoreError};
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Shared state for event handlers
#[derive(Clone)]
pub struct EventsState {
    pub store: Arc<EventStore>,
}

/// Create the events router with all calendar endpoints
pub fn events_router(state: EventsState) -> Router {
    Router::new()
        .route("/create_event", post(create_event))
        .route("/update_event", post(update_event))
        .route("/delete_event", post(delete_event))
        .route("/events_for_day", get(events_for_day))
        .route("/events_for_week", get(events_for_week))
        .route("/events_for_month", get(events_for_month))
        .route("/events_for_all", get(events_for_all))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct DeleteQuery {
    /// Absent id behaves as an empty id: lookup miss, not a request error
    #[serde(default)]
    id: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /create_event
async fn create_event(State(state): State<EventsState>, body: Bytes) -> impl IntoResponse {
    match state.store.create(&body).await {
        Ok(()) => success(),
        Err(err) => error_response(StatusCode::BAD_REQUEST, &err),
    }
}

/// POST /update_event
async fn update_event(State(state): State<EventsState>, body: Bytes) -> impl IntoResponse {
    match state.store.update(&body).await {
        Ok(()) => success(),
        Err(err) => error_response(StatusCode::BAD_REQUEST, &err),
    }
}

/// POST /delete_event?id=
async fn delete_event(
    State(state): State<EventsState>,
    Query(params): Query<DeleteQuery>,
) -> impl IntoResponse {
    match state.store.delete(&params.id).await {
        Ok(()) => success(),
        Err(err) => error_response(StatusCode::NOT_FOUND, &err),
    }
}

/// GET /events_for_day
async fn events_for_day(State(state): State<EventsState>) -> impl IntoResponse {
    Json(state.store.events_today().await)
}

/// GET /events_for_week
async fn events_for_week(State(state): State<EventsState>) -> impl IntoResponse {
    Json(state.store.events_week().await)
}

/// GET /events_for_month
async fn events_for_month(State(state): State<EventsState>) -> impl IntoResponse {
    Json(state.store.events_month().await)
}

/// GET /events_for_all
async fn events_for_all(State(state): State<EventsState>) -> impl IntoResponse {
    Json(state.store.all_events().await)
}

// =============================================================================
// Response helpers
// =============================================================================

fn success() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::CREATED,
        Json(serde_json::json!({"result": "success"})),
    )
}

fn error_response(code: StatusCode, err: &StoreError) -> (StatusCode, Json<serde_json::Value>) {
    tracing::error!(error = %err, "request failed");
    (code, Json(serde_json::json!({"error": err.to_string()})))
}
