use pdp_core::{EventType, Point, TimeWindow};
use thiserror::Error;

/// Errors surfaced by the scenario factory and the JSON persistence layer.
///
/// The four `Invalid*` variants are construction-time validation failures:
/// non-recoverable at the call site, no partial state — supply corrected
/// inputs and call the factory again.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("event type {0} is not in the scenario's supported set")]
    InvalidEventType(EventType),

    #[error("invalid spatial bounds: min {min} does not precede max {max} component-wise")]
    InvalidBounds { min: Point, max: Point },

    #[error("invalid time window: {0} has start after end")]
    InvalidTimeWindow(TimeWindow),

    #[error("invalid vehicle profile: {0}")]
    InvalidVehicleProfile(String),

    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
