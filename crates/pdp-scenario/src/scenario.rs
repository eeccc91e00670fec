//! The `Scenario` aggregate, its validating factory, and its identity.

use std::collections::BTreeSet;
use std::fmt;

use pdp_core::{EventRecord, EventType, Point, SpatialBounds, TimeWindow, VehicleProfile};

use crate::model::{self, ModelSpec};
use crate::stop::{self, StopPredicate};
use crate::{ScenarioError, ScenarioResult};

// ── ProblemClass ──────────────────────────────────────────────────────────────

/// The closed set of scenario families this crate knows about.
///
/// Each variant carries a fixed family id used for experiment bookkeeping.
/// Currently only the Fabri–Recht benchmark family exists; new families add
/// a variant here rather than mutable registry state.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ProblemClass {
    FabriRecht,
}

impl ProblemClass {
    /// Stable family identifier.
    pub fn id(self) -> &'static str {
        match self {
            ProblemClass::FabriRecht => "fabrirecht",
        }
    }
}

impl fmt::Display for ProblemClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ── ScenarioId ────────────────────────────────────────────────────────────────

/// The experiment-bookkeeping key of a scenario: `(family, instance)`.
///
/// Two scenarios with equal ids are *the same problem instance* regardless
/// of their data — if their event lists differ, something upstream assigned
/// ids incorrectly.  `Scenario` itself deliberately has no structural
/// equality; compare ids instead.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ScenarioId {
    pub class: ProblemClass,
    pub instance: String,
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.class, self.instance)
    }
}

// ── Scenario ──────────────────────────────────────────────────────────────────

/// Instance id used when a caller does not assign one.  The minimal
/// Fabri–Recht family carries a single instance.
pub const DEFAULT_INSTANCE_ID: &str = "1";

/// An immutable, validated pickup-and-delivery problem definition.
///
/// Owns its event list (insertion order preserved — events are *not*
/// re-sorted by timestamp; callers provide a meaningful order), the set of
/// admissible event tags, the feasible region and time horizon, and the
/// default vehicle profile.  From those fields it derives, purely, the
/// model stack and stop conditions an engine needs to run it.
///
/// Construct via [`Scenario::create`]; all fields are frozen afterwards, so
/// a `Scenario` is `Send + Sync` and freely shareable.
#[derive(Clone, Debug)]
pub struct Scenario {
    events:          Vec<EventRecord>,
    supported_types: BTreeSet<EventType>,
    time_window:     TimeWindow,
    bounds:          SpatialBounds,
    default_vehicle: VehicleProfile,
    instance_id:     String,
}

impl Scenario {
    // ── Factory ───────────────────────────────────────────────────────────

    /// Validate and freeze raw inputs into a `Scenario` with the default
    /// instance id.
    ///
    /// Inputs are copied in before the factory returns, so later mutation
    /// of the caller's collections cannot be observed through the scenario.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// 1. every event's tag ∈ `supported_types` — [`ScenarioError::InvalidEventType`]
    /// 2. `min ≤ max` component-wise — [`ScenarioError::InvalidBounds`]
    /// 3. `time_window.start ≤ end` — [`ScenarioError::InvalidTimeWindow`]
    /// 4. vehicle capacity and speed positive — [`ScenarioError::InvalidVehicleProfile`]
    pub fn create<E, T>(
        events: E,
        supported_types: T,
        min: Point,
        max: Point,
        time_window: TimeWindow,
        default_vehicle: VehicleProfile,
    ) -> ScenarioResult<Scenario>
    where
        E: IntoIterator<Item = EventRecord>,
        T: IntoIterator<Item = EventType>,
    {
        Self::create_with_instance(
            events,
            supported_types,
            min,
            max,
            time_window,
            default_vehicle,
            DEFAULT_INSTANCE_ID,
        )
    }

    /// Like [`create`][Self::create], with a caller-assigned instance id.
    ///
    /// Families with many instances (e.g. one per benchmark file) assign a
    /// distinct id per instance; the id must then stay fixed for the
    /// scenario's lifetime.
    pub fn create_with_instance<E, T>(
        events: E,
        supported_types: T,
        min: Point,
        max: Point,
        time_window: TimeWindow,
        default_vehicle: VehicleProfile,
        instance_id: impl Into<String>,
    ) -> ScenarioResult<Scenario>
    where
        E: IntoIterator<Item = EventRecord>,
        T: IntoIterator<Item = EventType>,
    {
        let supported_types: BTreeSet<EventType> = supported_types.into_iter().collect();
        let events: Vec<EventRecord> = events.into_iter().collect();

        for event in &events {
            if !supported_types.contains(&event.event_type) {
                return Err(ScenarioError::InvalidEventType(event.event_type));
            }
        }

        let bounds = SpatialBounds::new(min, max);
        if !bounds.is_valid() {
            return Err(ScenarioError::InvalidBounds { min, max });
        }

        if !time_window.is_valid() {
            return Err(ScenarioError::InvalidTimeWindow(time_window));
        }

        if !default_vehicle.is_valid() {
            return Err(ScenarioError::InvalidVehicleProfile(
                default_vehicle.to_string(),
            ));
        }

        Ok(Scenario {
            events,
            supported_types,
            time_window,
            bounds,
            default_vehicle,
            instance_id: instance_id.into(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// All events, in the order they were supplied to the factory.
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// The set of event tags this scenario admits.
    pub fn supported_types(&self) -> &BTreeSet<EventType> {
        &self.supported_types
    }

    /// The time horizon within which deliveries are feasible.
    pub fn time_window(&self) -> TimeWindow {
        self.time_window
    }

    /// The rectangle bounding all positions.
    pub fn spatial_bounds(&self) -> SpatialBounds {
        self.bounds
    }

    /// The profile applied to vehicles that don't override it.
    pub fn default_vehicle(&self) -> &VehicleProfile {
        &self.default_vehicle
    }

    // ── Derived views ─────────────────────────────────────────────────────

    /// The model stack the engine must instantiate for this scenario, in
    /// wiring order: time progression, planar movement, pickup-delivery
    /// policy.
    ///
    /// Pure function of the scenario's fields — repeated calls return
    /// value-equal sequences.
    pub fn model_specs(&self) -> Vec<ModelSpec> {
        model::assemble(self.bounds)
    }

    /// The conditions under which a run of this scenario ends.  The engine
    /// stops on the first satisfied predicate.
    pub fn stop_predicates(&self) -> Vec<StopPredicate> {
        stop::assemble()
    }

    // ── Identity ──────────────────────────────────────────────────────────

    /// The family this scenario belongs to.
    pub fn problem_class(&self) -> ProblemClass {
        ProblemClass::FabriRecht
    }

    /// The instance id within the family.
    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// The `(family, instance)` bookkeeping key.
    pub fn id(&self) -> ScenarioId {
        ScenarioId {
            class:    self.problem_class(),
            instance: self.instance_id.clone(),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} events, {} types, {})",
            self.id(),
            self.events.len(),
            self.supported_types.len(),
            self.time_window,
        )
    }
}
