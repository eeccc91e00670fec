//! Vehicle capability descriptor.

use std::fmt;

use crate::{Point, TimeWindow};

/// Capabilities of a vehicle: how much it can carry, how fast it moves, and
/// (optionally) where and when it becomes available.
///
/// A scenario carries one `VehicleProfile` as the *default* — the profile
/// applied to vehicles whose `AddVehicle` event does not override it.
///
/// Valid iff `capacity > 0` and `speed > 0` (and the availability window,
/// when present, satisfies `start ≤ end`).  The scenario factory enforces
/// this; see [`is_valid`][Self::is_valid].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleProfile {
    /// Maximum load, in scenario demand units (e.g. parcels).
    pub capacity: u32,

    /// Cruise speed, in the scenario's declared speed unit.
    pub speed: f64,

    /// Where the vehicle starts.  `None` means the engine places it at the
    /// scenario's depot.
    pub start_position: Option<Point>,

    /// When the vehicle is available for duty.  `None` means the whole
    /// scenario time window.
    pub availability: Option<TimeWindow>,
}

impl VehicleProfile {
    /// A profile with no start position or availability override.
    pub fn new(capacity: u32, speed: f64) -> Self {
        Self {
            capacity,
            speed,
            start_position: None,
            availability:   None,
        }
    }

    pub fn with_start_position(mut self, p: Point) -> Self {
        self.start_position = Some(p);
        self
    }

    pub fn with_availability(mut self, tw: TimeWindow) -> Self {
        self.availability = Some(tw);
        self
    }

    /// `true` iff capacity and speed are positive and any availability
    /// window is itself valid.
    pub fn is_valid(&self) -> bool {
        self.capacity > 0
            && self.speed > 0.0
            && self.availability.map_or(true, |tw| tw.is_valid())
    }
}

impl fmt::Display for VehicleProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vehicle(cap {}, speed {})", self.capacity, self.speed)
    }
}
