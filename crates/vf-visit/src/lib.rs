//! `vf-visit`: turning candidate points into visits.
//!
//! # Pipeline
//!
//! ```text
//! SearchConfig
//!   ① solve_bounding_box(target, threshold × box_margin)
//!   ② PointIndex::build(points).query(box)        → CandidateSet
//!   ③ VisitDetector::scan(points, candidates)     → Vec<VisitRecord>
//! ```
//!
//! The algorithm never logs.  Everything worth reporting (box, candidate
//! count, per-point classification, qualifying and dropped runs) is emitted
//! to a [`ScanObserver`]; the application decides how loudly to render it.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`detector`] | `VisitDetector`, `Classification`                      |
//! | [`record`]   | `VisitRecord`                                          |
//! | [`observer`] | `ScanObserver` trait, `NoopObserver`                   |
//! | [`search`]   | `find_visits`                                          |
//! | [`error`]    | `VisitError`, `VisitResult<T>`                         |

pub mod detector;
pub mod error;
pub mod observer;
pub mod record;
pub mod search;


pub use detector::{Classification, VisitDetector};
pub use error::{VisitError, VisitResult};
pub use observer::{NoopObserver, ScanObserver};
pub use record::VisitRecord;
pub use search::find_visits;
