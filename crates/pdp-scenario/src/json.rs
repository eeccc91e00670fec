//! JSON persistence for scenarios.
//!
//! # Format
//!
//! One JSON object per scenario:
//!
//! ```json
//! {
//!   "problem_class": "fabrirecht",
//!   "instance_id": "1",
//!   "supported_types": ["AddParcel", "AddVehicle", "TimeOut"],
//!   "events": [ { "event_type": "TimeOut", "time": 960, "payload": "None" } ],
//!   "min": { "x": 0.0, "y": 0.0 },
//!   "max": { "x": 100.0, "y": 100.0 },
//!   "time_window": { "start": 0, "end": 960 },
//!   "default_vehicle": { "capacity": 4, "speed": 1.0, ... }
//! }
//! ```
//!
//! Decoding goes through the scenario factory, so a document that violates
//! a scenario invariant (inverted bounds, unsupported event tag, …) fails
//! with the same [`ScenarioError`] variant as direct construction — there
//! is no way to smuggle an unvalidated scenario in through JSON.

use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use pdp_core::{EventRecord, EventType, Point, TimeWindow, VehicleProfile};

use crate::scenario::Scenario;
use crate::{ScenarioError, ScenarioResult};

// ── Wire record ───────────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
struct ScenarioRecord {
    problem_class:   String,
    instance_id:     String,
    supported_types: Vec<EventType>,
    events:          Vec<EventRecord>,
    min:             Point,
    max:             Point,
    time_window:     TimeWindow,
    default_vehicle: VehicleProfile,
}

impl ScenarioRecord {
    fn of(scenario: &Scenario) -> Self {
        Self {
            problem_class:   scenario.problem_class().id().to_owned(),
            instance_id:     scenario.instance_id().to_owned(),
            supported_types: scenario.supported_types().iter().copied().collect(),
            events:          scenario.events().to_vec(),
            min:             scenario.spatial_bounds().min,
            max:             scenario.spatial_bounds().max,
            time_window:     scenario.time_window(),
            default_vehicle: scenario.default_vehicle().clone(),
        }
    }

    fn into_scenario(self) -> ScenarioResult<Scenario> {
        let expected = crate::ProblemClass::FabriRecht.id();
        if self.problem_class != expected {
            return Err(ScenarioError::Parse(format!(
                "unknown problem class {:?} (expected {:?})",
                self.problem_class, expected,
            )));
        }
        Scenario::create_with_instance(
            self.events,
            self.supported_types,
            self.min,
            self.max,
            self.time_window,
            self.default_vehicle,
            self.instance_id,
        )
    }
}

/// Split a `serde_json` error into the crate's taxonomy: failures caused by
/// the underlying reader/writer surface as `Io`, malformed or mistyped JSON
/// as `Parse`.
fn codec_error(e: serde_json::Error) -> ScenarioError {
    match e.io_error_kind() {
        Some(kind) => ScenarioError::Io(std::io::Error::new(kind, e)),
        None => ScenarioError::Parse(e.to_string()),
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Serialize `scenario` to a JSON string.
pub fn to_json(scenario: &Scenario) -> ScenarioResult<String> {
    serde_json::to_string(&ScenarioRecord::of(scenario)).map_err(codec_error)
}

/// Serialize `scenario` as JSON to any `Write` sink (file, socket, buffer).
pub fn to_writer<W: Write>(writer: W, scenario: &Scenario) -> ScenarioResult<()> {
    serde_json::to_writer(writer, &ScenarioRecord::of(scenario)).map_err(codec_error)
}

/// Write `scenario` as JSON to a file at `path`, creating or truncating it.
pub fn to_path(path: &Path, scenario: &Scenario) -> ScenarioResult<()> {
    let file = std::fs::File::create(path)?;
    to_writer(BufWriter::new(file), scenario)
}

/// Parse a scenario from a JSON string, re-running factory validation.
pub fn from_json(s: &str) -> ScenarioResult<Scenario> {
    let record: ScenarioRecord = serde_json::from_str(s).map_err(codec_error)?;
    record.into_scenario()
}

/// Like [`from_json`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or streaming from disk.
pub fn from_reader<R: Read>(reader: R) -> ScenarioResult<Scenario> {
    let record: ScenarioRecord = serde_json::from_reader(reader).map_err(codec_error)?;
    record.into_scenario()
}

/// Load a scenario from a JSON file at `path`.
pub fn from_path(path: &Path) -> ScenarioResult<Scenario> {
    let file = std::fs::File::open(path)?;
    from_reader(BufReader::new(file))
}
