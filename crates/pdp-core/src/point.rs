//! Planar coordinate type and the rectangular bounds used by scenarios.
//!
//! Positions use `f64` x/y in an abstract planar frame — the distance unit
//! those coordinates are measured in is declared by the scenario's movement
//! model spec, not here.

use std::fmt;

/// A 2-D planar coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `true` if both components of `self` are ≤ the corresponding component
    /// of `other`.  This is a partial order: two points can each fail the
    /// test against the other.
    #[inline]
    pub fn le_componentwise(self, other: Point) -> bool {
        self.x <= other.x && self.y <= other.y
    }

    /// Straight-line (Euclidean) distance to `other`, in coordinate units.
    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── SpatialBounds ─────────────────────────────────────────────────────────────

/// An axis-aligned rectangle bounding all feasible positions in a scenario.
///
/// Valid iff `min ≤ max` component-wise.  Construction does not enforce
/// validity — the scenario factory rejects invalid bounds so the error
/// surfaces at the single place all scenario inputs are checked.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpatialBounds {
    pub min: Point,
    pub max: Point,
}

impl SpatialBounds {
    #[inline]
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// `true` iff `min ≤ max` component-wise.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.le_componentwise(self.max)
    }

    /// `true` if `p` lies inside the rectangle (boundary inclusive).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.min.le_componentwise(p) && p.le_componentwise(self.max)
    }

    /// Width and height of the rectangle.  Negative for invalid bounds.
    pub fn extent(&self) -> (f64, f64) {
        (self.max.x - self.min.x, self.max.y - self.min.y)
    }
}

impl fmt::Display for SpatialBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.min, self.max)
    }
}
