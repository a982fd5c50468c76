//! Event wire type and validation
//!
//! Defines the flat JSON event object exchanged with clients. All fields use
//! snake_case serialization; `date` is a calendar day in `YYYY-MM-DD` form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed format for the `date` field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single calendar event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    pub owner_id: String,
}

impl Event {
    /// Check the validation invariant: `id`, `title`, `date`, `owner_id`
    /// non-empty and `date` parsable as a calendar day.
    ///
    /// Returns the rejection reason so callers can surface it verbatim.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("event id must not be empty".to_string());
        }
        if self.title.is_empty() {
            return Err("event title must not be empty".to_string());
        }
        if self.owner_id.is_empty() {
            return Err("event owner_id must not be empty".to_string());
        }
        if self.date.is_empty() {
            return Err("event date must not be empty".to_string());
        }
        match NaiveDate::parse_from_str(&self.date, DATE_FORMAT) {
            Ok(_) => Ok(()),
            Err(_) => Err(format!(
                "event date `{}` is not a valid YYYY-MM-DD day",
                self.date
            )),
        }
    }

    /// Parse the event's calendar day. `None` when the stored string does not
    /// parse; validated events always return `Some`.
    pub fn day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }
}
