//! Stop predicates: declarative run-termination conditions.
//!
//! Like model specs, stop predicates are resolved by the engine: each
//! [`StopKind`] tag names a condition over the engine's accumulated run
//! statistics.  A run stops as soon as ANY predicate of the scenario is
//! satisfied — the OR composition happens in the engine, but the set is
//! declared here so it can be inspected before a run starts.

use std::fmt;

/// Termination-condition tag, resolved by the engine's registry.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum StopKind {
    /// Stop once the scenario's time horizon is reached (the `TimeOut`
    /// event has been dispatched).
    TimeOut,
}

impl fmt::Display for StopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopKind::TimeOut => f.write_str("time-out"),
        }
    }
}

/// A declarative termination condition.
///
/// Currently a closed set with one parameterless member; richer families
/// add variants carrying their thresholds (e.g. a vehicles-idle count).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum StopPredicate {
    TimeOut,
}

impl StopPredicate {
    pub fn kind(&self) -> StopKind {
        match self {
            StopPredicate::TimeOut => StopKind::TimeOut,
        }
    }
}

/// The stop-condition set of the Fabri–Recht family: exactly one
/// `TimeOut` predicate.  Pure; set semantics (order is irrelevant).
pub fn assemble() -> Vec<StopPredicate> {
    vec![StopPredicate::TimeOut]
}
