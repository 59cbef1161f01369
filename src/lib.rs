//! # Combo Booking
//!
//! Event-sourced combo booking aggregate. A booking owns a description
//! and an ordered set of station identities; it mutates that membership
//! only by raising domain events, which stay in an uncommitted buffer
//! until a persistence collaborator drains them.
//!
//! ## Architecture
//!
//! - **event_sourcing**: generic infrastructure (aggregate identity, the
//!   embedded event recorder, the domain event contract)
//! - **domain**: the combo booking aggregate with its events and value
//!   objects

pub mod domain;
pub mod event_sourcing;

pub use domain::combo_booking::{
    ComboBookingAggregate, ComboBookingEvent, ComboBookingStationAdded,
    ComboBookingStationRemoved, StationId,
};
pub use event_sourcing::core::{
    deserialize_event, serialize_event, Aggregate, AggregateId, AggregateRoot, DomainEvent,
};
