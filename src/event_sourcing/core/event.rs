use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::aggregate::AggregateId;

// ============================================================================
// Domain Event Trait
// ============================================================================
//
// Contract every domain event satisfies before an aggregate recorder
// will buffer it. Events are immutable facts: once raised they are never
// edited, only inspected and serialized for a persistence collaborator.
//
// ============================================================================

/// Generic Domain Event trait
///
/// All domain events must implement this trait to be raised through an
/// aggregate recorder.
pub trait DomainEvent: Serialize + for<'de> Deserialize<'de> + Clone + Send + Sync {
    /// Name of the concrete event kind, e.g. "ComboBookingStationAdded"
    fn event_type(&self) -> &'static str;

    /// Identity of the aggregate this event occurred on
    fn aggregate_id(&self) -> AggregateId;
}

// ============================================================================
// Event Serialization Helpers
// ============================================================================

pub fn serialize_event<E: Serialize>(event: &E) -> Result<String> {
    Ok(serde_json::to_string(event)?)
}

pub fn deserialize_event<E: for<'de> Deserialize<'de>>(json: &str) -> Result<E> {
    Ok(serde_json::from_str(json)?)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    struct TestEvent {
        aggregate_id: AggregateId,
        data: String,
    }

    impl DomainEvent for TestEvent {
        fn event_type(&self) -> &'static str {
            "TestEvent"
        }

        fn aggregate_id(&self) -> AggregateId {
            self.aggregate_id
        }
    }

    #[test]
    fn test_event_exposes_kind_and_aggregate_identity() {
        let aggregate_id = AggregateId::new();
        let event = TestEvent {
            aggregate_id,
            data: "test".to_string(),
        };

        assert_eq!(event.event_type(), "TestEvent");
        assert_eq!(DomainEvent::aggregate_id(&event), aggregate_id);
    }

    #[test]
    fn test_event_serialization() {
        let event = TestEvent {
            aggregate_id: AggregateId::new(),
            data: "test data".to_string(),
        };

        let json = serialize_event(&event).unwrap();
        let deserialized: TestEvent = deserialize_event(&json).unwrap();

        assert_eq!(event, deserialized);
    }
}
