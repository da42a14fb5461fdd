//! Chronological ordering of decoded points.
//!
//! Some location-history exports list points newest first.  The visit scan
//! reads index order as time order, so the sequence is normalised before
//! indexing.

use vf_core::TimedPoint;

/// What [`ensure_chronological`] had to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimeOrder {
    /// Already non-decreasing; untouched.
    Ascending,
    /// Non-increasing; reversed in place.
    Reversed,
    /// Mixed; stable-sorted by timestamp.
    Sorted,
}

/// Put `points` in non-decreasing timestamp order.
pub fn ensure_chronological(points: &mut [TimedPoint]) -> TimeOrder {
    if points.windows(2).all(|w| w[0].time <= w[1].time) {
        return TimeOrder::Ascending;
    }
    if points.windows(2).all(|w| w[0].time >= w[1].time) {
        points.reverse();
        return TimeOrder::Reversed;
    }
    points.sort_by_key(|p| p.time);
    TimeOrder::Sorted
}
