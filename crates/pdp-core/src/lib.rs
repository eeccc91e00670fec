//! `pdp-core` — foundational value types for the `pdp` scenario toolkit.
//!
//! This crate is a dependency of every other `pdp-*` crate.  It intentionally
//! has no `pdp-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`point`]   | `Point`, `SpatialBounds`                            |
//! | [`time`]    | `Time`, `Duration`, `TimeWindow`                    |
//! | [`vehicle`] | `VehicleProfile`                                    |
//! | [`event`]   | `EventType`, `EventPayload`, `EventRecord`, `ParcelDetails` |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                                                              |
//! |---------|-----------------------------------------------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. Required by `pdp-scenario`'s JSON persistence. |

pub mod event;
pub mod point;
pub mod time;
pub mod vehicle;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use event::{EventPayload, EventRecord, EventType, ParcelDetails};
pub use point::{Point, SpatialBounds};
pub use time::{Duration, Time, TimeWindow};
pub use vehicle::VehicleProfile;
