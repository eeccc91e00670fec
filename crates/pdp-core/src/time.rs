//! Scenario time types.
//!
//! # Design
//!
//! Time is an integer count of abstract time units — the unit itself (one
//! minute for the Fabri–Recht family) is declared by the scenario's
//! time-progression model spec.  Keeping time integral means window
//! comparisons are exact and `Ord` is total, with no floating-point drift.
//!
//! `Time` is signed so "before the scenario origin" is representable;
//! `Duration` is unsigned because service times cannot be negative.

use std::fmt;

// ── Time ─────────────────────────────────────────────────────────────────────

/// An absolute point in simulation time, in scenario time units.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Time(pub i64);

impl Time {
    pub const ZERO: Time = Time(0);

    /// The time `d` units after `self`.
    #[inline]
    pub fn offset(self, d: Duration) -> Time {
        Time(self.0 + d.0 as i64)
    }
}

impl std::ops::Sub for Time {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Time) -> i64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

// ── Duration ─────────────────────────────────────────────────────────────────

/// A non-negative span of simulation time, in scenario time units.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Duration(pub u64);

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}u", self.0)
    }
}

// ── TimeWindow ───────────────────────────────────────────────────────────────

/// A `[start, end)` interval in which an action (pickup, delivery, whole
/// scenario) is considered on time.
///
/// Valid iff `start ≤ end`.  As with [`SpatialBounds`][crate::SpatialBounds],
/// validity is enforced by the scenario factory rather than here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeWindow {
    pub start: Time,
    pub end: Time,
}

impl TimeWindow {
    #[inline]
    pub fn new(start: Time, end: Time) -> Self {
        Self { start, end }
    }

    /// `true` iff `start ≤ end`.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }

    /// `true` if `t` falls inside the half-open interval `[start, end)`.
    #[inline]
    pub fn contains(&self, t: Time) -> bool {
        self.start <= t && t < self.end
    }

    /// Window length in time units.  Negative for invalid windows.
    #[inline]
    pub fn length(&self) -> i64 {
        self.end - self.start
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
