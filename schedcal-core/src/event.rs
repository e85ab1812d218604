//! Canonical calendar event type.

use chrono::DateTime;
use chrono_tz::Tz;
use uuid::Uuid;

/// A validated calendar entry with timezone-aware start and end instants.
///
/// Events are created only by the admission pipeline, after schema validation
/// and time resolution, and are never mutated afterwards. Naive timestamps do
/// not appear here: both instants carry their zone from creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Stable identifier, assigned at creation (becomes the ICS UID).
    pub uid: String,
    pub title: String,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl Event {
    pub fn new(title: String, start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        Self {
            uid: Uuid::new_v4().to_string(),
            title,
            start,
            end,
        }
    }
}
