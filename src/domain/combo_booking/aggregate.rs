use indexmap::IndexSet;

use super::events::*;
use super::value_objects::StationId;
use crate::event_sourcing::core::{Aggregate, AggregateId, AggregateRoot};

// ============================================================================
// ComboBooking Aggregate - Business Logic
// ============================================================================

/// A combo booking: one description plus the ordered set of stations the
/// booking currently spans.
///
/// Membership never changes silently. Every addition and removal is
/// raised as a domain event through the embedded recorder, so the
/// uncommitted buffer always explains how the current membership came to
/// be.
#[derive(Debug, Clone)]
pub struct ComboBookingAggregate {
    root: AggregateRoot<ComboBookingEvent>,
    description: String,
    stations: IndexSet<StationId>,
}

impl ComboBookingAggregate {
    /// Create a booking and bring its membership up to `stations`.
    ///
    /// Raises one `StationAdded` event per distinct input station, in
    /// input order. Duplicates in the input collapse to a single
    /// membership entry and a single event. Any description is valid,
    /// including the empty string, and an empty station collection
    /// yields a booking with no pending events.
    pub fn new(
        description: impl Into<String>,
        stations: impl IntoIterator<Item = StationId>,
    ) -> Self {
        let mut booking = Self {
            root: AggregateRoot::new(),
            description: description.into(),
            stations: IndexSet::new(),
        };
        booking.set_stations(stations);
        booking
    }

    pub fn id(&self) -> AggregateId {
        self.root.id()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Current station membership, in insertion order.
    pub fn stations(&self) -> impl Iterator<Item = StationId> + '_ {
        self.stations.iter().copied()
    }

    /// Replace the description and reconcile the membership toward
    /// `new_stations`, raising events only for actual changes.
    pub fn change_stations(
        &mut self,
        new_description: impl Into<String>,
        new_stations: impl IntoIterator<Item = StationId>,
    ) {
        self.description = new_description.into();
        self.set_stations(new_stations);
    }

    /// Two-pass reconciliation toward the desired set.
    ///
    /// The add pass inserts every desired station not yet a member and
    /// raises `StationAdded`, in desired-set order. The remove pass then
    /// drops every member absent from the desired set and raises
    /// `StationRemoved`, in membership order. Stations present on both
    /// sides are untouched and raise nothing, so the raised events are
    /// always the minimal diff, with all adds preceding all removes.
    fn set_stations(&mut self, stations: impl IntoIterator<Item = StationId>) {
        let desired: IndexSet<StationId> = stations.into_iter().collect();

        for &station in &desired {
            if self.stations.insert(station) {
                self.root
                    .raise(ComboBookingEvent::StationAdded(ComboBookingStationAdded {
                        aggregate_id: self.root.id(),
                        station,
                    }));
            }
        }

        // The remove pass walks a stable snapshot taken before any
        // removal; shift_remove keeps the survivors in insertion order.
        let current: Vec<StationId> = self.stations.iter().copied().collect();
        for station in current {
            if !desired.contains(&station) {
                self.stations.shift_remove(&station);
                self.root.raise(ComboBookingEvent::StationRemoved(
                    ComboBookingStationRemoved {
                        aggregate_id: self.root.id(),
                        station,
                    },
                ));
            }
        }
    }
}

impl Aggregate for ComboBookingAggregate {
    type Event = ComboBookingEvent;

    fn aggregate_id(&self) -> AggregateId {
        self.root.id()
    }

    fn uncommitted_events(&self) -> &[ComboBookingEvent] {
        self.root.uncommitted_events()
    }

    fn take_uncommitted_events(&mut self) -> Vec<ComboBookingEvent> {
        self.root.take_uncommitted_events()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
