//! Concurrent in-memory event store
//!
//! The store owns every event held by the service: an insertion-ordered
//! `Vec<Event>` behind a single readers-writer lock. Mutations take the
//! write guard; reads and time-window queries take the read guard and may
//! run concurrently with each other. Nothing is persisted; a restart
//! starts from an empty store.

use crate::events::types::Event;
use chrono::{Datelike, Days, Local, Months, NaiveDate};
use thiserror::Error;
use tokio::sync::RwLock;

/// Event store error kinds
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input bytes are not a well-formed event object
    #[error("malformed event payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Well-formed but semantically invalid event
    #[error("invalid event: {0}")]
    Validation(String),

    /// Create with an id that is already taken
    #[error("event with id `{0}` already exists")]
    AlreadyExists(String),

    /// Lookup miss on read/update/delete
    #[error("event `{0}` not found")]
    NotFound(String),
}

/// In-memory event collection guarded by a single readers-writer lock
#[derive(Default)]
pub struct EventStore {
    events: RwLock<Vec<Event>>,
}

impl EventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode, validate, and append a new event.
    ///
    /// The duplicate-id scan and the append happen under one write-lock
    /// acquisition, so two concurrent creates for the same id can never
    /// both succeed.
    pub async fn create(&self, payload: &[u8]) -> Result<(), StoreError> {
        let event = decode_event(payload)?;
        let mut events = self.events.write().await;
        if events.iter().any(|e| e.id == event.id) {
            return Err(StoreError::AlreadyExists(event.id));
        }
        events.push(event);
        Ok(())
    }

    /// Serialize the event with the given id back to JSON bytes
    pub async fn read(&self, id: &str) -> Result<Vec<u8>, StoreError> {
        let events = self.events.read().await;
        let event = events
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(serde_json::to_vec(event)?)
    }

    /// Decode, validate, and fully replace the stored event whose id matches
    /// the payload's embedded id. No partial-merge semantics: callers resend
    /// the complete event.
    pub async fn update(&self, payload: &[u8]) -> Result<(), StoreError> {
        let event = decode_event(payload)?;
        let mut events = self.events.write().await;
        match events.iter_mut().find(|e| e.id == event.id) {
            Some(slot) => {
                *slot = event;
                Ok(())
            }
            None => Err(StoreError::NotFound(event.id)),
        }
    }

    /// Remove the event with the given id
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut events = self.events.write().await;
        match events.iter().position(|e| e.id == id) {
            Some(index) => {
                events.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    /// Every event whose date falls within `[start, end]`, inclusive on both
    /// ends, in insertion order. Events whose stored date fails to parse are
    /// skipped; validation on write keeps that from happening, but the query
    /// path must not fail because of it.
    pub async fn events_interval(&self, start: NaiveDate, end: NaiveDate) -> Vec<Event> {
        let events = self.events.read().await;
        events
            .iter()
            .filter(|e| e.day().map_or(false, |day| start <= day && day <= end))
            .cloned()
            .collect()
    }

    /// Events on the current calendar day
    pub async fn events_today(&self) -> Vec<Event> {
        let today = Local::now().date_naive();
        self.events_interval(today, today).await
    }

    /// Events in the current Monday-started week
    pub async fn events_week(&self) -> Vec<Event> {
        let (start, end) = week_bounds(Local::now().date_naive());
        self.events_interval(start, end).await
    }

    /// Events in the current calendar month
    pub async fn events_month(&self) -> Vec<Event> {
        let (start, end) = month_bounds(Local::now().date_naive());
        self.events_interval(start, end).await
    }

    /// Every stored event in insertion order; empty when the store is empty
    pub async fn all_events(&self) -> Vec<Event> {
        self.events.read().await.clone()
    }
}

fn decode_event(payload: &[u8]) -> Result<Event, StoreError> {
    let event: Event = serde_json::from_slice(payload)?;
    event.validate().map_err(StoreError::Validation)?;
    Ok(event)
}

/// Monday through Sunday of the week containing `day`.
///
/// Sunday counts as day 7 of the current week, not day 0 of the next.
pub fn week_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = Days::new(u64::from(day.weekday().num_days_from_monday()));
    let start = day.checked_sub_days(offset).unwrap_or(day);
    let end = start.checked_add_days(Days::new(6)).unwrap_or(start);
    (start, end)
}

/// First through last calendar day of the month containing `day`
pub fn month_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = day.with_day(1).unwrap_or(day);
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
        .unwrap_or(day);
    (start, end)
}
