//! `pdp-scenario` — immutable problem definitions for pickup-and-delivery
//! simulation.
//!
//! A [`Scenario`] is the contract between static problem data and a live
//! simulation: a validated, frozen bundle of events, bounds, time window,
//! and default vehicle that deterministically derives the set of simulation
//! models an engine must instantiate ([`Scenario::model_specs`]) and the
//! conditions under which a run ends ([`Scenario::stop_predicates`]).
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`scenario`] | `Scenario`, `ProblemClass`, `ScenarioId`, factory       |
//! | [`model`]    | `ModelSpec`, unit enums, model assembly                 |
//! | [`stop`]     | `StopPredicate`, stop-condition assembly                |
//! | [`json`]     | `to_json`/`from_json` and reader/writer variants        |
//! | [`error`]    | `ScenarioError`, `ScenarioResult<T>`                    |
//!
//! # Construction and immutability
//!
//! Scenarios are built exclusively through the validating factory
//! [`Scenario::create`] (or [`Scenario::create_with_instance`]).  Inputs are
//! copied in, checked, and frozen — nothing about a `Scenario` can change
//! after the factory returns, so a scenario may be shared freely across
//! threads without synchronization.
//!
//! # Example
//!
//! ```rust,ignore
//! let scenario = Scenario::create(
//!     events,
//!     [EventType::AddParcel, EventType::AddVehicle, EventType::TimeOut],
//!     Point::new(0.0, 0.0),
//!     Point::new(100.0, 100.0),
//!     TimeWindow::new(Time(0), Time(960)),
//!     VehicleProfile::new(4, 1.0),
//! )?;
//! for spec in scenario.model_specs() {
//!     engine.register(spec)?;
//! }
//! ```

pub mod error;
pub mod json;
pub mod model;
pub mod scenario;
pub mod stop;


pub use error::{ScenarioError, ScenarioResult};
pub use model::{DistanceUnit, ModelKind, ModelSpec, SpeedUnit, TimeUnit, TimeWindowPolicy};
pub use scenario::{DEFAULT_INSTANCE_ID, ProblemClass, Scenario, ScenarioId};
pub use stop::{StopKind, StopPredicate};
