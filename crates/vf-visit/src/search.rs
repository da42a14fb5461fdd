//! End-to-end search: box → index → candidates → visits.

use vf_core::{SearchConfig, TimedPoint};
use vf_spatial::{PointIndex, solve_bounding_box};

use crate::{ScanObserver, VisitDetector, VisitRecord, VisitResult};

/// Find every visit to `config.target` in `points`.
///
/// `points` must be in the order visits should be read in (normally
/// chronological ascending).  Returns an empty list if no point falls in the
/// bounding box.
///
/// # Errors
/// - [`VisitError::Config`](crate::VisitError::Config) if `config` is invalid.
/// - [`VisitError::BoundingBox`](crate::VisitError::BoundingBox) if the box
///   cannot be solved (pole/antimeridian, or a corner distance that does not
///   converge).
pub fn find_visits<O: ScanObserver + ?Sized>(
    points:   &[TimedPoint],
    config:   &SearchConfig,
    observer: &mut O,
) -> VisitResult<Vec<VisitRecord>> {
    config.validate()?;

    let bbox = solve_bounding_box(config.target, config.box_radius_km())?;
    observer.on_box_solved(&bbox);

    let index = PointIndex::build(points);
    let candidates = index.query(&bbox);
    observer.on_candidates(&candidates);
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    Ok(VisitDetector::new(config).scan(index.points(), &candidates, observer))
}
