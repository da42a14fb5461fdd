//! Run-length visit detection.
//!
//! # Scan
//!
//! The scan covers every index from the smallest to the largest candidate,
//! inclusive, so non-candidates sandwiched between candidates still count as
//! (outside) points and chronological contiguity is preserved.
//!
//! ```text
//! candidate      → exact ellipsoidal distance; no convergence → Skipped
//! non-candidate  → Outside at 2 × threshold (it failed the box test)
//!
//! Inside   → total += 1, consecutive_inside += 1, consecutive_outside = 0
//! Outside  → consecutive_outside += 1, consecutive_inside = 0
//! Skipped  → no counter changes
//!
//! consecutive_outside ≥ min_run_length  or  last index of the span
//!   → close the run: visit if max_consecutive_inside ≥ min_run_length,
//!     otherwise dropped (when it had any inside points)
//! ```
//!
//! A gap of fewer than `min_run_length` outside points therefore does not
//! split a visit, and a visit must contain one unbroken stretch of at least
//! `min_run_length` inside points.

use chrono::{DateTime, Utc};

use vf_core::{CoreError, GeoPoint, SearchConfig, TimedPoint};
use vf_spatial::CandidateSet;

use crate::{ScanObserver, VisitRecord};

// ── Classification ────────────────────────────────────────────────────────────

/// How one point in the scanned span was classified.
#[derive(Debug)]
pub enum Classification {
    /// Strictly closer than the threshold.
    Inside { distance_km: f64 },
    /// At or beyond the threshold.  Non-candidates carry 2 × threshold.
    Outside { distance_km: f64 },
    /// The distance did not converge; the point is ignored.
    Skipped(CoreError),
}

// ── Run tracker ───────────────────────────────────────────────────────────────

/// Counters for the currently open run.  Private to one scan.
#[derive(Debug, Default)]
struct RunTracker {
    start:                  Option<DateTime<Utc>>,
    end:                    Option<DateTime<Utc>>,
    total_inside:           usize,
    consecutive_inside:     usize,
    max_consecutive_inside: usize,
    consecutive_outside:    usize,
}

impl RunTracker {
    fn record_inside(&mut self, time: DateTime<Utc>) {
        if self.total_inside == 0 {
            self.start = Some(time);
        }
        self.end = Some(time);
        self.total_inside += 1;
        self.consecutive_inside += 1;
        self.max_consecutive_inside = self.max_consecutive_inside.max(self.consecutive_inside);
        self.consecutive_outside = 0;
    }

    fn record_outside(&mut self) {
        self.consecutive_outside += 1;
        self.consecutive_inside = 0;
    }

    /// Close the open run, returning it if it had any inside points.
    ///
    /// `total_inside` and `max_consecutive_inside` restart from zero;
    /// `start`/`end` are overwritten by the next inside point.
    fn close(&mut self) -> Option<VisitRecord> {
        let run = match (self.start, self.end) {
            (Some(start), Some(end)) if self.total_inside > 0 => Some(VisitRecord {
                start,
                end,
                total_inside: self.total_inside,
                max_consecutive_inside: self.max_consecutive_inside,
            }),
            _ => None,
        };
        self.total_inside = 0;
        self.max_consecutive_inside = 0;
        run
    }
}

// ── VisitDetector ─────────────────────────────────────────────────────────────

/// Scans an ordered point sequence for sustained presence near a target.
#[derive(Clone, Debug)]
pub struct VisitDetector {
    target:         GeoPoint,
    threshold_km:   f64,
    min_run_length: usize,
}

impl VisitDetector {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            target:         config.target,
            threshold_km:   config.threshold_km,
            min_run_length: config.min_run_length,
        }
    }

    /// Classify a single point.  Only candidates pay for the exact distance.
    pub fn classify(&self, point: &TimedPoint, is_candidate: bool) -> Classification {
        if !is_candidate {
            return Classification::Outside { distance_km: self.threshold_km * 2.0 };
        }
        match point.pos.distance_km(self.target) {
            Ok(d) if d < self.threshold_km => Classification::Inside { distance_km: d },
            Ok(d) => Classification::Outside { distance_km: d },
            Err(e) => Classification::Skipped(e),
        }
    }

    /// Walk the candidate span of `points` in index order and return the
    /// qualifying visits in the order they closed.
    ///
    /// Candidate indices past the end of `points` are ignored.
    pub fn scan<O: ScanObserver + ?Sized>(
        &self,
        points:     &[TimedPoint],
        candidates: &CandidateSet,
        observer:   &mut O,
    ) -> Vec<VisitRecord> {
        let mut visits = Vec::new();
        let Some(span) = candidates.span() else {
            return visits;
        };
        let Some(last_point) = points.len().checked_sub(1) else {
            return visits;
        };
        let first = *span.start();
        let last = (*span.end()).min(last_point);
        if first > last {
            return visits;
        }

        let mut run = RunTracker::default();
        for (idx, point) in points.iter().enumerate().take(last + 1).skip(first) {
            let class = self.classify(point, candidates.contains(idx));
            match class {
                Classification::Inside { .. } => run.record_inside(point.time),
                Classification::Outside { .. } => run.record_outside(),
                Classification::Skipped(_) => {}
            }
            observer.on_point(idx, point, &class);

            // A skipped point at the end of the span still closes the open run.
            if run.consecutive_outside >= self.min_run_length || idx == last {
                if let Some(closed) = run.close() {
                    if closed.max_consecutive_inside >= self.min_run_length {
                        observer.on_visit(&closed);
                        visits.push(closed);
                    } else {
                        observer.on_run_dropped(&closed);
                    }
                }
            }
        }
        visits
    }
}
