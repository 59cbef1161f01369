use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use combo_booking::event_sourcing::serialize_event;
use combo_booking::{Aggregate, ComboBookingAggregate, DomainEvent, StationId};

fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,combo_booking=debug")),
        )
        .init();

    tracing::info!("🚀 Starting combo booking demo");

    // === 1. Create a booking spanning two stations ===
    let north = StationId::new();
    let south = StationId::new();
    let mut booking = ComboBookingAggregate::new("Drive time North+South", [north, south]);

    tracing::info!(
        aggregate_id = %booking.id(),
        station_count = booking.stations().count(),
        "✅ Booking created"
    );

    // === 2. Inspect the pending events ===
    for event in booking.uncommitted_events() {
        let payload = serialize_event(event)?;
        tracing::info!(
            event_type = event.event_type(),
            payload = %payload,
            "Pending event"
        );
    }

    // === 3. Hand the events off for persistence ===
    let committed = booking.take_uncommitted_events();
    tracing::info!(event_count = committed.len(), "✅ Events committed");

    // === 4. Change the station line-up ===
    let east = StationId::new();
    booking.change_stations("Drive time North+East", [north, east]);

    tracing::info!(
        description = booking.description(),
        stations = ?booking.stations().collect::<Vec<_>>(),
        "✅ Booking reconciled"
    );

    // === 5. Drain the second batch ===
    for event in booking.take_uncommitted_events() {
        let payload = serialize_event(&event)?;
        tracing::info!(
            event_type = event.event_type(),
            payload = %payload,
            "Committing event"
        );
    }

    tracing::info!("🎉 Demo complete");

    Ok(())
}
