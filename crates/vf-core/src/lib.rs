//! `vf-core`: foundational types for the `visitfinder` workspace.
//!
//! This crate is a dependency of every other `vf-*` crate.  It has no `vf-*`
//! dependencies and minimal external ones (only `chrono` and `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`geo`]      | `GeoPoint`, Vincenty ellipsoidal distance                 |
//! | [`point`]    | `TimedPoint`, `HasCoordinates`                            |
//! | [`units`]    | `parse_distance_km` for `"50m"`-style thresholds          |
//! | [`config`]   | `SearchConfig`                                            |
//! | [`error`]    | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod point;
pub mod units;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SearchConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{GeoPoint, vincenty_distance_km};
pub use point::{HasCoordinates, TimedPoint};
pub use units::parse_distance_km;
