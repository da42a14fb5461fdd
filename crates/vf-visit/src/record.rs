//! The output of a scan.

use chrono::{DateTime, TimeDelta, Utc};

/// One closed run of inside points.
///
/// Only runs whose `max_consecutive_inside` reached the minimum run length
/// are returned as visits; shorter runs are reported to the observer as
/// dropped and then discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitRecord {
    /// Timestamp of the first inside point.
    pub start: DateTime<Utc>,
    /// Timestamp of the last inside point.
    pub end: DateTime<Utc>,
    /// Inside points in the run, gaps excluded.
    pub total_inside: usize,
    /// Longest unbroken stretch of inside points.
    pub max_consecutive_inside: usize,
}

impl VisitRecord {
    /// `end - start`.  Negative only if the input was not chronological.
    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}
