//! Scan observer trait for progress reporting.

use vf_core::TimedPoint;
use vf_spatial::{BoundingBox, CandidateSet};

use crate::{Classification, VisitRecord};

/// Callbacks invoked by [`find_visits`](crate::find_visits) and
/// [`VisitDetector::scan`](crate::VisitDetector::scan) at key points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: visit printer
///
/// ```rust,ignore
/// struct VisitPrinter;
///
/// impl ScanObserver for VisitPrinter {
///     fn on_visit(&mut self, visit: &VisitRecord) {
///         println!("visited for {} from {}", visit.duration(), visit.start);
///     }
/// }
/// ```
pub trait ScanObserver {
    /// Called once the bounding box has been solved.
    fn on_box_solved(&mut self, _bbox: &BoundingBox) {}

    /// Called with the result of the single index query.
    fn on_candidates(&mut self, _candidates: &CandidateSet) {}

    /// Called for every point in the scanned span, in index order.
    fn on_point(&mut self, _idx: usize, _point: &TimedPoint, _class: &Classification) {}

    /// Called when a qualifying run closes.  The same record is also
    /// returned from the scan.
    fn on_visit(&mut self, _visit: &VisitRecord) {}

    /// Called when a run with at least one inside point closes without
    /// qualifying.
    fn on_run_dropped(&mut self, _run: &VisitRecord) {}
}

/// A [`ScanObserver`] that does nothing.
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}
