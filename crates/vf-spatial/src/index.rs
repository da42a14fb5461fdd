//! Static 2-D range index over location samples.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over `[lat, lon]` treated as a flat plane.  This
//! is acceptable because the query rectangle is itself an approximation; the
//! exact ellipsoidal test happens afterwards.  The tree is bulk-loaded once
//! and never mutated.

use rstar::{AABB, RTree, RTreeObject};

use vf_core::HasCoordinates;

use crate::{BoundingBox, CandidateSet};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a `[lat, lon]` point and its position in the
/// source slice.
#[derive(Clone, Debug)]
struct IndexedPoint {
    point: [f64; 2], // [lat, lon]
    idx:   usize,
}

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

// ── PointIndex ────────────────────────────────────────────────────────────────

/// A read-only range index borrowing the full point sequence.
///
/// Generic over any [`HasCoordinates`] type so it can index `TimedPoint`s
/// and bare `GeoPoint`s alike.
pub struct PointIndex<'a, T: HasCoordinates> {
    points: &'a [T],
    tree:   RTree<IndexedPoint>,
}

impl<'a, T: HasCoordinates> PointIndex<'a, T> {
    /// Bulk-load the R-tree for O(N log N) construction (faster than N
    /// inserts).
    pub fn build(points: &'a [T]) -> Self {
        let entries: Vec<IndexedPoint> = points
            .iter()
            .enumerate()
            .map(|(idx, p)| {
                let c = p.coordinates();
                IndexedPoint { point: [c.lat, c.lon], idx }
            })
            .collect();
        Self { points, tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The indexed sequence.
    pub fn points(&self) -> &'a [T] {
        self.points
    }

    /// Indices of every point inside `bbox` (edges inclusive), in no
    /// particular order.
    pub fn range(&self, bbox: &BoundingBox) -> Vec<usize> {
        let envelope = AABB::from_corners(bbox.min_corner(), bbox.max_corner());
        self.tree
            .locate_in_envelope(&envelope)
            .map(|e| e.idx)
            .collect()
    }

    /// Run one range query and wrap the result as a [`CandidateSet`].
    pub fn query(&self, bbox: &BoundingBox) -> CandidateSet {
        CandidateSet::from_indices(self.range(bbox))
    }
}
