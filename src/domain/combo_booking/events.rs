use serde::{Deserialize, Serialize};

use super::value_objects::StationId;
use crate::event_sourcing::core::{AggregateId, DomainEvent};

// ============================================================================
// Combo Booking Domain Events
// ============================================================================

/// Union type for all combo booking events
///
/// Equality is structural: two events are equal when they have the same
/// kind, the same aggregate identity and the same station payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ComboBookingEvent {
    StationAdded(ComboBookingStationAdded),
    StationRemoved(ComboBookingStationRemoved),
}

impl ComboBookingEvent {
    /// The station this event is about
    pub fn station(&self) -> StationId {
        match self {
            ComboBookingEvent::StationAdded(event) => event.station,
            ComboBookingEvent::StationRemoved(event) => event.station,
        }
    }
}

impl DomainEvent for ComboBookingEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ComboBookingEvent::StationAdded(_) => "ComboBookingStationAdded",
            ComboBookingEvent::StationRemoved(_) => "ComboBookingStationRemoved",
        }
    }

    fn aggregate_id(&self) -> AggregateId {
        match self {
            ComboBookingEvent::StationAdded(event) => event.aggregate_id,
            ComboBookingEvent::StationRemoved(event) => event.aggregate_id,
        }
    }
}

// Individual event types

/// A station joined the booking's membership
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboBookingStationAdded {
    pub aggregate_id: AggregateId,
    pub station: StationId,
}

/// A station left the booking's membership
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboBookingStationRemoved {
    pub aggregate_id: AggregateId,
    pub station: StationId,
}

// ============================================================================
// Unit Tests
// ============================================================================
