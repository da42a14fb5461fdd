//! Timestamped location samples and the coordinate capability used by the
//! spatial index.

use chrono::{DateTime, Utc};

use crate::GeoPoint;

/// Anything that can be placed on the 2-D `[lat, lon]` plane.
///
/// `vf-spatial`'s `PointIndex` is generic over this trait, so it can index
/// raw `GeoPoint`s as well as `TimedPoint`s.
pub trait HasCoordinates {
    fn coordinates(&self) -> GeoPoint;
}

impl HasCoordinates for GeoPoint {
    #[inline]
    fn coordinates(&self) -> GeoPoint {
        *self
    }
}

/// One location-history pinpoint: a position plus the second it was taken.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimedPoint {
    pub pos:  GeoPoint,
    pub time: DateTime<Utc>,
}

impl TimedPoint {
    #[inline]
    pub fn new(pos: GeoPoint, time: DateTime<Utc>) -> Self {
        Self { pos, time }
    }

    /// Build from raw degrees and Unix seconds.  Returns `None` if `unix_secs`
    /// is outside chrono's representable range.
    pub fn from_unix(lat: f64, lon: f64, unix_secs: i64) -> Option<Self> {
        let time = DateTime::from_timestamp(unix_secs, 0)?;
        Some(Self { pos: GeoPoint::new(lat, lon), time })
    }
}

impl HasCoordinates for TimedPoint {
    #[inline]
    fn coordinates(&self) -> GeoPoint {
        self.pos
    }
}
