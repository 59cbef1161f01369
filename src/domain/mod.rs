// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// This module contains domain-specific aggregates and business logic.
// Each aggregate has its own subdirectory with:
// - Value objects
// - Events
// - Aggregate implementation
//
// This layer is completely separate from the event sourcing infrastructure.
//
// ============================================================================

pub mod combo_booking;

// Future aggregates can be added here:
// pub mod station;
