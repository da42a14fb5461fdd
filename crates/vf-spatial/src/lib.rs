//! `vf-spatial`: bounding-box solving and spatial pre-filtering.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`bbox`]       | `BoundingBox`, `Direction`, `solve_bounding_box`          |
//! | [`index`]      | `PointIndex` (static R-tree over `[lat, lon]`)            |
//! | [`candidates`] | `CandidateSet`                                            |
//! | [`error`]      | `SpatialError`, `SpatialResult<T>`                        |
//!
//! # Two-stage filtering
//!
//! The box is a cheap, deliberately loose superset of the geodesic disk.
//! `PointIndex::query` returns every point inside the box; callers recover
//! exactness by re-testing candidates with the ellipsoidal metric.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod bbox;
pub mod candidates;
pub mod error;
pub mod index;


pub use bbox::{BoundingBox, Direction, find_extreme, solve_bounding_box};
pub use candidates::CandidateSet;
pub use error::{SpatialError, SpatialResult};
pub use index::PointIndex;
