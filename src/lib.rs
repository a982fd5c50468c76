//! Calendar event service
//!
//! An HTTP service for calendar events: clients submit, modify, remove, and
//! query events (title, date, description, owner). All state lives in a
//! concurrent in-memory store; nothing is persisted, and a restart starts
//! from an empty store.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                  HTTP layer (axum)                │
//! │  request-id / tracing / CORS middleware           │
//! │  /create_event /update_event /delete_event        │
//! │  /events_for_{day,week,month,all}  /health        │
//! └────────────────────────┬─────────────────────────┘
//!                          │ raw event bytes in,
//!                          │ status codes + JSON out
//! ┌────────────────────────▼─────────────────────────┐
//! │                EventStore (core)                  │
//! │  RwLock<Vec<Event>> — decode, validate, CRUD,     │
//! │  inclusive day/week/month interval queries        │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`events`]: the event store and its HTTP handlers
//! - [`api`]: merged router and middleware stack
//! - [`config`]: YAML configuration
//! - [`error`]: service-level error types

pub mod api;
pub mod config;
pub mod error;
pub mod events;

pub use config::CalendarConfig;
pub use error::{Error, Result};
