//! Aggregate root: an entity plus an event buffer and a version counter.

use std::ops::{Deref, DerefMut};

use crate::domain_event::{DomainEvent, DomainEvents};
use crate::entity::{Entity, EntityDefinition};
use crate::id::EntityId;

/// Consistency boundary around an [`Entity`]. Derefs to the inner entity,
/// so every entity operation is available directly on the root.
///
/// The version counts buffered work: +1 per accepted event, -1 per removed
/// one. Rejected duplicates and misses leave it untouched.
pub struct AggregateRoot<D: EntityDefinition> {
    entity: Entity<D>,
    events: DomainEvents,
    version: i32,
}

impl<D: EntityDefinition> AggregateRoot<D> {
    pub fn create(props: D::Props) -> Self {
        Self::from_entity(Entity::create(props))
    }

    pub fn load(id: EntityId, props: D::Props) -> Self {
        Self::from_entity(Entity::load(id, props))
    }

    fn from_entity(entity: Entity<D>) -> Self {
        Self {
            entity,
            events: DomainEvents::new(),
            version: 0,
        }
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    /// Overwrite the version, typically after a save. Non-positive values
    /// are ignored.
    pub fn set_version(&mut self, version: i32) {
        if version <= 0 {
            return;
        }
        self.version = version;
    }

    pub fn domain_events(&self) -> &[Box<dyn DomainEvent>] {
        self.events.events()
    }

    /// Buffer an event. A duplicate name leaves both the buffer and the
    /// version unchanged. Returns whether the event was accepted.
    pub fn add_domain_event(&mut self, event: Box<dyn DomainEvent>) -> bool {
        let added = self.events.add(event);
        if added {
            self.version += 1;
        }
        added
    }

    /// Drop the pending event with the given name, decrementing the version
    /// when something was actually removed.
    pub fn remove_domain_event(&mut self, name: &str) -> bool {
        let removed = self.events.remove(name);
        if removed {
            self.version -= 1;
        }
        removed
    }

    /// Empty the buffer without touching the version, e.g. after dispatch.
    pub fn clear_domain_events(&mut self) {
        self.events.clear();
    }

    /// Replace the buffer with `history`. The version is left alone; use
    /// [`AggregateRoot::set_version`] alongside when rehydrating.
    pub fn load_domain_events(&mut self, history: Vec<Box<dyn DomainEvent>>) {
        self.events.load(history);
    }

    /// Re-apply historical events to the props via
    /// [`EntityDefinition::apply`], bumping the version once per event.
    /// Replayed events are not buffered.
    pub fn replay(&mut self, history: &[Box<dyn DomainEvent>]) {
        for event in history {
            D::apply(self.entity.props_mut(), event.as_ref());
            self.version += 1;
        }
        tracing::debug!(
            entity_id = %self.entity.id(),
            replayed = history.len(),
            version = self.version,
            "aggregate replayed"
        );
    }
}

impl<D: EntityDefinition> core::fmt::Debug for AggregateRoot<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AggregateRoot")
            .field("entity", &self.entity)
            .field("events", &self.events)
            .field("version", &self.version)
            .finish()
    }
}

impl<D: EntityDefinition> Deref for AggregateRoot<D> {
    type Target = Entity<D>;

    fn deref(&self) -> &Entity<D> {
        &self.entity
    }
}

impl<D: EntityDefinition> DerefMut for AggregateRoot<D> {
    fn deref_mut(&mut self) -> &mut Entity<D> {
        &mut self.entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_event::EventRecord;
    use crate::props::Props;

    #[derive(Debug, Clone, Default)]
    struct CounterProps {
        count: i64,
    }

    impl Props for CounterProps {}

    struct CounterDef;

    impl EntityDefinition for CounterDef {
        type Props = CounterProps;

        fn apply(props: &mut CounterProps, event: &dyn DomainEvent) {
            if event.event_name() == "Incremented" {
                props.count += 1;
            }
        }
    }

    type Counter = AggregateRoot<CounterDef>;

    fn event(name: &str) -> Box<dyn DomainEvent> {
        Box::new(EventRecord::new(name).unwrap())
    }

    #[test]
    fn starts_at_version_zero_with_no_events() {
        let counter = Counter::create(CounterProps::default());
        assert_eq!(counter.version(), 0);
        assert!(counter.domain_events().is_empty());
        assert!(counter.is_new());
    }

    #[test]
    fn accepted_events_bump_the_version() {
        let mut counter = Counter::create(CounterProps::default());
        assert!(counter.add_domain_event(event("Incremented")));
        assert!(counter.add_domain_event(event("Renamed")));
        assert_eq!(counter.version(), 2);
    }

    #[test]
    fn rejected_duplicates_leave_the_version_alone() {
        let mut counter = Counter::create(CounterProps::default());
        counter.add_domain_event(event("Incremented"));
        assert!(!counter.add_domain_event(event(" INCREMENTED ")));
        assert_eq!(counter.version(), 1);
        assert_eq!(counter.domain_events().len(), 1);
    }

    #[test]
    fn removal_decrements_only_on_a_hit() {
        let mut counter = Counter::create(CounterProps::default());
        counter.add_domain_event(event("Incremented"));
        assert!(!counter.remove_domain_event("Missing"));
        assert_eq!(counter.version(), 1);
        assert!(counter.remove_domain_event("incremented"));
        assert_eq!(counter.version(), 0);
    }

    #[test]
    fn clear_keeps_the_version() {
        let mut counter = Counter::create(CounterProps::default());
        counter.add_domain_event(event("Incremented"));
        counter.clear_domain_events();
        assert!(counter.domain_events().is_empty());
        assert_eq!(counter.version(), 1);
    }

    #[test]
    fn set_version_ignores_non_positive_values() {
        let mut counter = Counter::create(CounterProps::default());
        counter.set_version(7);
        assert_eq!(counter.version(), 7);
        counter.set_version(0);
        counter.set_version(-3);
        assert_eq!(counter.version(), 7);
    }

    #[test]
    fn load_domain_events_replaces_the_buffer_without_versioning() {
        let mut counter = Counter::create(CounterProps::default());
        counter.add_domain_event(event("Stale"));
        counter.load_domain_events(vec![event("First"), event("Second")]);
        assert_eq!(counter.domain_events().len(), 2);
        assert_eq!(counter.version(), 1);
    }

    #[test]
    fn replay_applies_history_and_bumps_the_version_per_event() {
        let mut counter = Counter::load(EntityId::new(), CounterProps::default());
        let history = vec![event("Incremented"), event("Incremented"), event("Ignored")];
        counter.replay(&history);
        assert_eq!(counter.props().count, 2);
        assert_eq!(counter.version(), 3);
        assert!(counter.domain_events().is_empty());
    }

    #[test]
    fn entity_operations_are_reachable_through_deref() {
        let mut counter = Counter::create(CounterProps::default());
        counter.mark_as_clean();
        assert!(counter.tracking().is_clean());
        counter.self_delete();
        assert!(counter.is_deleted());
    }
}
