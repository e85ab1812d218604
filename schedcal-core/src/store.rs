//! Session-scoped event storage.

use crate::event::Event;

/// Append-only collection of admitted events for one session.
///
/// Insertion order is preserved and is also the export order; the store does
/// not re-sort chronologically. Events are dropped with the store when the
/// session ends.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one validated event, preserving call order.
    pub fn append(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Read-only view of all events appended so far.
    pub fn snapshot(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
