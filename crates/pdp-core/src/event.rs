//! Scenario events: typed, timestamped occurrences the engine replays.
//!
//! A scenario is, at heart, an ordered list of [`EventRecord`]s.  Each record
//! carries a tag ([`EventType`]), a timestamp, and a payload whose shape
//! depends on the tag.  The record constructors (`EventRecord::parcel` and
//! friends) keep tag and payload consistent; [`EventRecord::new`] is the
//! escape hatch for callers assembling records generically.
//!
//! Records are plain immutable values.  The scenario that owns them decides
//! which tags are admissible (its supported-type set) — an `EventRecord` on
//! its own makes no such promise.

use std::fmt;

use crate::{Duration, Point, Time, TimeWindow, VehicleProfile};

// ── EventType ─────────────────────────────────────────────────────────────────

/// The closed set of event tags a pickup-and-delivery scenario can carry.
///
/// `Ord` so tags can live in a `BTreeSet` with deterministic iteration order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventType {
    /// A parcel becomes known and available for pickup.
    AddParcel,
    /// A vehicle becomes available for duty.
    AddVehicle,
    /// A depot location is announced.
    AddDepot,
    /// The scenario's time horizon is reached.
    TimeOut,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventType::AddParcel  => "add-parcel",
            EventType::AddVehicle => "add-vehicle",
            EventType::AddDepot   => "add-depot",
            EventType::TimeOut    => "time-out",
        };
        f.write_str(s)
    }
}

// ── ParcelDetails ─────────────────────────────────────────────────────────────

/// Everything a pickup-and-delivery engine needs to know about one parcel.
///
/// The two time windows constrain when pickup and delivery are *on time*;
/// under a tardy-allowed policy, actions outside them are accepted late
/// rather than rejected.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParcelDetails {
    pub pickup_location:   Point,
    pub delivery_location: Point,
    pub pickup_window:     TimeWindow,
    pub delivery_window:   TimeWindow,
    /// Service time spent at the pickup location.
    pub pickup_duration:   Duration,
    /// Service time spent at the delivery location.
    pub delivery_duration: Duration,
    /// Load this parcel occupies, in the same units as vehicle capacity.
    pub demand: u32,
}

// ── EventPayload ──────────────────────────────────────────────────────────────

/// Tag-dependent event data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventPayload {
    Parcel(ParcelDetails),
    Vehicle(VehicleProfile),
    Depot(Point),
    /// For events that are pure signals (e.g. `TimeOut`).
    None,
}

// ── EventRecord ───────────────────────────────────────────────────────────────

/// One typed, timestamped occurrence in a scenario's event list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventRecord {
    pub event_type: EventType,
    pub time: Time,
    pub payload: EventPayload,
}

impl EventRecord {
    /// Assemble a record from parts.  Prefer the typed constructors below,
    /// which cannot produce a tag/payload mismatch.
    pub fn new(event_type: EventType, time: Time, payload: EventPayload) -> Self {
        Self { event_type, time, payload }
    }

    /// An `AddParcel` event announcing `details` at `time`.
    pub fn parcel(time: Time, details: ParcelDetails) -> Self {
        Self::new(EventType::AddParcel, time, EventPayload::Parcel(details))
    }

    /// An `AddVehicle` event making a vehicle with `profile` available.
    pub fn vehicle(time: Time, profile: VehicleProfile) -> Self {
        Self::new(EventType::AddVehicle, time, EventPayload::Vehicle(profile))
    }

    /// An `AddDepot` event announcing a depot at `position`.
    pub fn depot(time: Time, position: Point) -> Self {
        Self::new(EventType::AddDepot, time, EventPayload::Depot(position))
    }

    /// A `TimeOut` signal at `time`.
    pub fn time_out(time: Time) -> Self {
        Self::new(EventType::TimeOut, time, EventPayload::None)
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.event_type, self.time)
    }
}
