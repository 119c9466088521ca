//! Domain events and the per-aggregate event buffer.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::EventId;

/// Something that happened in the domain. Events carry their own identity,
/// an occurrence timestamp and a human-readable name used for deduplication
/// inside [`DomainEvents`].
pub trait DomainEvent: fmt::Debug {
    fn event_id(&self) -> EventId;

    fn occurred_at(&self) -> DateTime<Utc>;

    /// Name compared trimmed and case-insensitively when buffering.
    fn event_name(&self) -> &str;
}

/// Ready-made event carrier for callers that do not need a bespoke type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    event_id: EventId,
    occurred_at: DateTime<Utc>,
    name: String,
}

impl EventRecord {
    /// Stamp a fresh id and the current UTC instant. Blank names are
    /// rejected since the buffer keys on the name.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("event name cannot be blank"));
        }
        Ok(Self {
            event_id: EventId::new(),
            occurred_at: Utc::now(),
            name,
        })
    }
}

impl DomainEvent for EventRecord {
    fn event_id(&self) -> EventId {
        self.event_id
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_name(&self) -> &str {
        &self.name
    }
}

/// Insertion-ordered buffer of pending events, at most one per trimmed,
/// case-insensitive name.
///
/// The buffer only collects; publication is the job of whatever dispatch
/// layer drains it.
#[derive(Debug, Default)]
pub struct DomainEvents {
    events: Vec<Box<dyn DomainEvent>>,
}

impl DomainEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer `event` unless one with the same name is already pending.
    /// Returns whether the event was inserted.
    pub fn add(&mut self, event: Box<dyn DomainEvent>) -> bool {
        if self.contains(event.event_name()) {
            tracing::debug!(name = event.event_name(), "duplicate domain event ignored");
            return false;
        }
        tracing::debug!(name = event.event_name(), "domain event buffered");
        self.events.push(event);
        true
    }

    /// Drop the first pending event with the given name. Returns whether
    /// one was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.events.iter().position(|e| same_name(e.event_name(), name)) {
            Some(index) => {
                self.events.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Replace the whole buffer with `history`, preserving its order.
    pub fn load(&mut self, history: Vec<Box<dyn DomainEvent>>) {
        self.events = history;
    }

    pub fn contains(&self, name: &str) -> bool {
        self.events.iter().any(|e| same_name(e.event_name(), name))
    }

    pub fn events(&self) -> &[Box<dyn DomainEvent>] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
