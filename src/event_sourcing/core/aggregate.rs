use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::event::DomainEvent;

// ============================================================================
// Aggregate Root Pattern - Event Sourcing Core
// ============================================================================
//
// Key Principles:
// 1. All state changes flow through events
// 2. Events represent facts that have already happened
// 3. Raised events stay buffered on the aggregate until a persistence
//    collaborator drains them
// 4. Identity is assigned once at construction and never changes
//
// This is the GENERIC recorder that works for ANY domain aggregate:
// concrete aggregates embed an AggregateRoot and delegate to it.
//
// ============================================================================

/// Identity of an event-sourced aggregate.
///
/// Assigned once when the aggregate is constructed, immutable afterwards,
/// and stamped onto every event the aggregate raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AggregateId(Uuid);

impl AggregateId {
    /// Generate a fresh, globally unique identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AggregateId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AggregateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Generic Aggregate trait - all event-sourced aggregates implement this
///
/// Type Parameters:
/// - `Event`: The domain event type for this aggregate
pub trait Aggregate: Send + Sync {
    type Event: DomainEvent;

    /// Get aggregate ID
    fn aggregate_id(&self) -> AggregateId;

    /// Ordered view of every event raised but not yet committed
    fn uncommitted_events(&self) -> &[Self::Event];

    /// Hand the pending events over for persistence, emptying the buffer
    fn take_uncommitted_events(&mut self) -> Vec<Self::Event>;
}

/// Event recorder embedded by concrete aggregates.
///
/// Owns the aggregate identity and the uncommitted-event buffer. The
/// embedding aggregate mutates its own state in lock-step with every
/// `raise` call, so the buffer always explains how the current state
/// came to be.
#[derive(Debug, Clone)]
pub struct AggregateRoot<E> {
    id: AggregateId,
    uncommitted_events: Vec<E>,
}

impl<E: DomainEvent> AggregateRoot<E> {
    /// Fresh recorder with a new identity and no pending events.
    pub fn new() -> Self {
        Self {
            id: AggregateId::new(),
            uncommitted_events: Vec::new(),
        }
    }

    pub fn id(&self) -> AggregateId {
        self.id
    }

    /// Append an event to the uncommitted buffer in call order.
    pub fn raise(&mut self, event: E) {
        tracing::debug!(
            aggregate_id = %self.id,
            event_type = event.event_type(),
            "Raised domain event"
        );
        self.uncommitted_events.push(event);
    }

    /// Read-only view of the buffer, oldest first.
    pub fn uncommitted_events(&self) -> &[E] {
        &self.uncommitted_events
    }

    /// Drain the buffer, transferring ownership of the pending events to
    /// the caller in raise order.
    pub fn take_uncommitted_events(&mut self) -> Vec<E> {
        let events = std::mem::take(&mut self.uncommitted_events);
        tracing::debug!(
            aggregate_id = %self.id,
            event_count = events.len(),
            "Drained uncommitted events"
        );
        events
    }
}

impl<E: DomainEvent> Default for AggregateRoot<E> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    struct TestEvent {
        aggregate_id: AggregateId,
        label: String,
    }

    impl DomainEvent for TestEvent {
        fn event_type(&self) -> &'static str {
            "TestEvent"
        }

        fn aggregate_id(&self) -> AggregateId {
            self.aggregate_id
        }
    }

    fn raise_labelled(root: &mut AggregateRoot<TestEvent>, label: &str) {
        let event = TestEvent {
            aggregate_id: root.id(),
            label: label.to_string(),
        };
        root.raise(event);
    }

    #[test]
    fn test_new_recorder_has_empty_buffer() {
        let root: AggregateRoot<TestEvent> = AggregateRoot::new();
        assert!(root.uncommitted_events().is_empty());
    }

    #[test]
    fn test_each_recorder_gets_a_unique_identity() {
        let first: AggregateRoot<TestEvent> = AggregateRoot::new();
        let second: AggregateRoot<TestEvent> = AggregateRoot::new();
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_raise_appends_in_call_order() {
        let mut root = AggregateRoot::new();
        raise_labelled(&mut root, "first");
        raise_labelled(&mut root, "second");
        raise_labelled(&mut root, "third");

        let labels: Vec<&str> = root
            .uncommitted_events()
            .iter()
            .map(|event| event.label.as_str())
            .collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_take_uncommitted_events_drains_in_order() {
        let mut root = AggregateRoot::new();
        raise_labelled(&mut root, "first");
        raise_labelled(&mut root, "second");

        let drained = root.take_uncommitted_events();

        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].label, "first");
        assert_eq!(drained[1].label, "second");
        assert!(root.uncommitted_events().is_empty());
    }

    #[test]
    fn test_raises_after_a_drain_start_a_fresh_batch() {
        let mut root = AggregateRoot::new();
        raise_labelled(&mut root, "first");
        root.take_uncommitted_events();

        raise_labelled(&mut root, "second");

        assert_eq!(root.uncommitted_events().len(), 1);
        assert_eq!(root.uncommitted_events()[0].label, "second");
    }

    #[test]
    fn test_identity_is_stable_across_raise_and_drain() {
        let mut root = AggregateRoot::new();
        let id = root.id();

        raise_labelled(&mut root, "first");
        root.take_uncommitted_events();

        assert_eq!(root.id(), id);
    }
}
