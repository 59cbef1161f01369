// ============================================================================
// Combo Booking Domain - Business Logic for the ComboBooking Aggregate
// ============================================================================
//
// This module contains ALL ComboBooking-specific code:
// - Value objects (StationId)
// - Events (ComboBookingStationAdded, ComboBookingStationRemoved)
// - Aggregate (ComboBookingAggregate with the station reconciliation logic)
//
// This is completely separate from the generic event sourcing infrastructure.
//
// ============================================================================

pub mod aggregate;
pub mod events;
pub mod value_objects;

// Re-export for convenience
pub use aggregate::*;
pub use events::*;
pub use value_objects::*;
