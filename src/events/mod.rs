//! Events module — the in-memory event store and its HTTP surface
//!
//! The store holds all event state behind a single readers-writer lock and
//! answers CRUD plus day/week/month/all time-window queries. The handler
//! layer only marshals request bytes in and maps store errors to status
//! codes on the way out.

pub mod handler;
pub mod store;
pub mod types;

pub use handler::{events_router, EventsState};
pub use store::{EventStore, StoreError};
pub use types::Event;
