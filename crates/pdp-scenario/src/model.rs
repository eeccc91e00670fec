//! Model specs: declarative configurations for the engine's subsystems.
//!
//! A [`ModelSpec`] names one simulation subsystem and the parameters it must
//! be built with.  The scenario layer only *declares* these; the engine owns
//! the registry that resolves a [`ModelKind`] tag to a concrete model.  That
//! split is what makes a scenario testable without running a simulation.
//!
//! Specs are immutable parameter records, not builders.  Within one scenario
//! there is at most one spec per kind, so subsystem configuration cannot
//! conflict.

use std::fmt;

use pdp_core::{Point, SpatialBounds};

// ── Units ─────────────────────────────────────────────────────────────────────

/// Time unit a time-progression model ticks in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TimeUnit {
    Minute,
    Hour,
}

/// Distance unit positions are interpreted in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum DistanceUnit {
    Kilometer,
    Meter,
}

/// Speed unit vehicle speeds are interpreted in.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum SpeedUnit {
    KilometerPerMinute,
    KilometerPerHour,
}

/// How a pickup-delivery model treats actions outside their time window.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TimeWindowPolicy {
    /// Windows are advisory; any time is accepted without bookkeeping.
    Liberal,
    /// Actions outside their window are rejected.
    Strict,
    /// Late actions are accepted but flagged tardy.
    TardyAllowed,
}

// ── ModelKind ─────────────────────────────────────────────────────────────────

/// Subsystem tag — the key the engine's model registry resolves.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ModelKind {
    TimeProgression,
    PlanarMovement,
    PickupDeliveryPolicy,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ModelKind::TimeProgression      => "time-progression",
            ModelKind::PlanarMovement       => "planar-movement",
            ModelKind::PickupDeliveryPolicy => "pickup-delivery-policy",
        };
        f.write_str(s)
    }
}

// ── ModelSpec ─────────────────────────────────────────────────────────────────

/// Declarative configuration for one simulation subsystem.
///
/// A closed set of parameter records rather than a stringly-typed map: the
/// engine matches on the variant, and a scenario cannot declare parameters
/// that make no sense for the kind.
#[derive(Clone, Debug, PartialEq)]
pub enum ModelSpec {
    /// Discrete time progression.
    TimeProgression {
        /// Ticks advance in multiples of this many `time_unit`s.
        tick_length: u64,
        time_unit: TimeUnit,
    },

    /// Unconstrained planar (crow-flight) movement inside a rectangle.
    PlanarMovement {
        min: Point,
        max: Point,
        distance_unit: DistanceUnit,
        speed_unit: SpeedUnit,
        /// Upper bound on any vehicle's speed, in `speed_unit`s.
        max_speed: f64,
    },

    /// Pickup-and-delivery bookkeeping and its lateness policy.
    PickupDeliveryPolicy { tardy_policy: TimeWindowPolicy },
}

impl ModelSpec {
    /// The registry tag for this spec.
    pub fn kind(&self) -> ModelKind {
        match self {
            ModelSpec::TimeProgression { .. }      => ModelKind::TimeProgression,
            ModelSpec::PlanarMovement { .. }       => ModelKind::PlanarMovement,
            ModelSpec::PickupDeliveryPolicy { .. } => ModelKind::PickupDeliveryPolicy,
        }
    }
}

// ── Assembly ──────────────────────────────────────────────────────────────────

/// Tick granularity of the Fabri–Recht family: one minute.
pub const TICK_LENGTH: u64 = 1;

/// Maximum travel speed of the Fabri–Recht family, in km/min.
pub const MAX_SPEED: f64 = 100.0;

/// The fixed model stack of the Fabri–Recht scenario family.
///
/// Order is load-bearing for engine wiring (time progression must exist
/// before movement) and is preserved: time-progression, movement, policy.
/// Pure — identical output for identical `bounds` on every call.
pub fn assemble(bounds: SpatialBounds) -> Vec<ModelSpec> {
    vec![
        ModelSpec::TimeProgression {
            tick_length: TICK_LENGTH,
            time_unit:   TimeUnit::Minute,
        },
        ModelSpec::PlanarMovement {
            min:           bounds.min,
            max:           bounds.max,
            distance_unit: DistanceUnit::Kilometer,
            speed_unit:    SpeedUnit::KilometerPerMinute,
            max_speed:     MAX_SPEED,
        },
        ModelSpec::PickupDeliveryPolicy {
            tardy_policy: TimeWindowPolicy::TardyAllowed,
        },
    ]
}
