//! Geodesic bounding-box solver.
//!
//! # Algorithm
//!
//! Ellipsoidal iso-distance contours are not axis-aligned, so the box is
//! built from four independent one-dimensional searches, one per cardinal
//! direction.  Each search moves a single coordinate away from the centre:
//!
//! ```text
//! ① Expand:  step by 1e-6°, doubling each time, until the stepped point is
//!             farther than the radius.  Passing ±90° / ±180° first is an
//!             error: the search is undefined beyond the pole or meridian.
//! ② Bisect:  the centre is inside, the expanded point outside.  Halve the
//!             bracket until the midpoint lies in [R, R + 0.1 m).
//! ```
//!
//! Both phases take tens of iterations in practice: expansion is
//! O(log(R / 1e-6°)) and bisection O(log(1 / tolerance)).

use std::fmt;

use vf_core::{GeoPoint, HasCoordinates};

use crate::{SpatialError, SpatialResult};

/// First expansion step, in degrees.
const INITIAL_STEP_DEG: f64 = 1e-6;
/// Bisection stops once the midpoint is within this many km beyond the radius.
const TOLERANCE_KM: f64 = 0.0001;
/// Bisection gives up (returning the known-outside bound) after this many
/// halvings; f64 brackets collapse long before.
const MAX_BISECTION_STEPS: usize = 200;

// ── BoundingBox ───────────────────────────────────────────────────────────────

/// An axis-aligned latitude/longitude rectangle.
///
/// Invariant: `ne.lat >= sw.lat` and `ne.lon >= sw.lon` (no wraparound).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub ne: GeoPoint,
    pub sw: GeoPoint,
}

impl BoundingBox {
    pub fn new(ne: GeoPoint, sw: GeoPoint) -> Self {
        Self { ne, sw }
    }

    /// Inclusive containment test in the lat/lon plane.
    #[inline]
    pub fn contains<P: HasCoordinates>(&self, p: &P) -> bool {
        let c = p.coordinates();
        (self.sw.lat..=self.ne.lat).contains(&c.lat) && (self.sw.lon..=self.ne.lon).contains(&c.lon)
    }

    /// `[min_lat, min_lon]` corner, as used by the R-tree envelope.
    #[inline]
    pub fn min_corner(&self) -> [f64; 2] {
        [self.sw.lat, self.sw.lon]
    }

    /// `[max_lat, max_lon]` corner, as used by the R-tree envelope.
    #[inline]
    pub fn max_corner(&self) -> [f64; 2] {
        [self.ne.lat, self.ne.lon]
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NE {} SW {}", self.ne, self.sw)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four cardinal search directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::North, Direction::South, Direction::East, Direction::West];

    /// +1 for north/east, −1 for south/west.
    #[inline]
    fn sign(self) -> f64 {
        match self {
            Direction::North | Direction::East => 1.0,
            Direction::South | Direction::West => -1.0,
        }
    }

    /// The coordinate value the search may not pass.
    #[inline]
    fn limit(self) -> f64 {
        match self {
            Direction::North => 90.0,
            Direction::South => -90.0,
            Direction::East => 180.0,
            Direction::West => -180.0,
        }
    }

    /// The coordinate this direction moves.
    #[inline]
    fn coord(self, p: GeoPoint) -> f64 {
        match self {
            Direction::North | Direction::South => p.lat,
            Direction::East | Direction::West => p.lon,
        }
    }

    /// `p` with this direction's coordinate replaced by `value`.
    #[inline]
    fn with_coord(self, p: GeoPoint, value: f64) -> GeoPoint {
        match self {
            Direction::North | Direction::South => GeoPoint::new(value, p.lon),
            Direction::East | Direction::West => GeoPoint::new(p.lat, value),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        f.write_str(s)
    }
}

// ── Search state ──────────────────────────────────────────────────────────────

/// Expansion state: the current probe coordinate and the next step size.
#[derive(Copy, Clone, Debug)]
struct Expansion {
    coord: f64,
    step:  f64,
}

impl Expansion {
    fn start(origin: f64) -> Self {
        Self { coord: origin, step: INITIAL_STEP_DEG }
    }

    /// Probe one step further out; the following step is twice as long.
    fn advance(self, dir: Direction) -> Self {
        Self {
            coord: self.coord + self.step * dir.sign(),
            step:  self.step * 2.0,
        }
    }
}

/// A coordinate bracket straddling the radius.
#[derive(Copy, Clone, Debug)]
struct Bracket {
    inside:  f64,
    outside: f64,
}

impl Bracket {
    #[inline]
    fn midpoint(self) -> f64 {
        (self.inside + self.outside) / 2.0
    }

    /// Replace whichever bound lies on the same side of the radius as `mid`.
    #[inline]
    fn narrow(self, mid: f64, mid_is_outside: bool) -> Self {
        if mid_is_outside {
            Self { inside: self.inside, outside: mid }
        } else {
            Self { inside: mid, outside: self.outside }
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Find the coordinate along `dir` from `center` at which the ellipsoidal
/// distance reaches `radius_km`.
///
/// The returned coordinate lies on or just beyond the radius (less than
/// 10 cm beyond it).
///
/// # Errors
/// - [`SpatialError::TooCloseToPoleOrMeridian`] if the expansion passes the
///   direction's limit before leaving the radius.
/// - [`SpatialError::Distance`] if any probe distance fails to converge.
pub fn find_extreme(center: GeoPoint, dir: Direction, radius_km: f64) -> SpatialResult<f64> {
    let origin = dir.coord(center);
    let sign = dir.sign();

    // ── ① Expansion ───────────────────────────────────────────────────────
    let mut probe = Expansion::start(origin);
    let outside = loop {
        probe = probe.advance(dir);
        if probe.coord * sign > dir.limit() * sign {
            return Err(SpatialError::TooCloseToPoleOrMeridian { direction: dir });
        }
        let d = center.distance_km(dir.with_coord(center, probe.coord))?;
        if d > radius_km {
            break probe.coord;
        }
    };

    // ── ② Bisection ───────────────────────────────────────────────────────
    let mut bracket = Bracket { inside: origin, outside };
    for _ in 0..MAX_BISECTION_STEPS {
        let mid = bracket.midpoint();
        let excess = center.distance_km(dir.with_coord(center, mid))? - radius_km;
        // Only a midpoint on or beyond the radius is accepted, never one inside it.
        if (0.0..TOLERANCE_KM).contains(&excess) {
            return Ok(mid);
        }
        bracket = bracket.narrow(mid, excess > 0.0);
    }
    Ok(bracket.outside)
}

/// Solve the bounding box enclosing the geodesic disk of `radius_km` around
/// `center`.
///
/// Directions are searched north, south, east, west; the first failure is
/// returned.
pub fn solve_bounding_box(center: GeoPoint, radius_km: f64) -> SpatialResult<BoundingBox> {
    let north = find_extreme(center, Direction::North, radius_km)?;
    let south = find_extreme(center, Direction::South, radius_km)?;
    let east = find_extreme(center, Direction::East, radius_km)?;
    let west = find_extreme(center, Direction::West, radius_km)?;

    Ok(BoundingBox {
        ne: GeoPoint::new(north, east),
        sw: GeoPoint::new(south, west),
    })
}
