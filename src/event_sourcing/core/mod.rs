// ============================================================================
// Event Sourcing Core - Generic Infrastructure Abstractions
// ============================================================================
//
// This module contains GENERIC, reusable event sourcing infrastructure
// that works with ANY domain aggregate.
//
// Key Principles:
// - No domain-specific code (no ComboBooking, Station, etc.)
// - Generic over aggregate and event types
// - Reusable across all aggregates
//
// ============================================================================

pub mod aggregate;
pub mod event;

// Re-export core types for convenience
pub use aggregate::{Aggregate, AggregateId, AggregateRoot};
pub use event::{deserialize_event, serialize_event, DomainEvent};
