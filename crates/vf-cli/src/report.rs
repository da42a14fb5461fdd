//! Renders scan events through `tracing`.
//!
//! Qualifying visits are logged at `info`; everything else (box, candidate
//! count, per-pinpoint distances, skipped pinpoints, dropped runs) at
//! `debug`, so it only shows with `--debug` or `RUST_LOG=debug`.

use chrono::{SecondsFormat, TimeDelta};
use tracing::{debug, info};

use vf_core::TimedPoint;
use vf_spatial::{BoundingBox, CandidateSet};
use vf_visit::{Classification, ScanObserver, VisitRecord};

/// A [`ScanObserver`] that logs and keeps simple tallies.
#[derive(Debug, Default)]
pub struct TracingReporter {
    pub visits:  usize,
    pub dropped: usize,
    pub skipped: usize,
}

impl ScanObserver for TracingReporter {
    fn on_box_solved(&mut self, bbox: &BoundingBox) {
        debug!(%bbox, "bounding box");
    }

    fn on_candidates(&mut self, candidates: &CandidateSet) {
        debug!(candidates = candidates.len(), "pinpoints in bounding box");
    }

    fn on_point(&mut self, idx: usize, point: &TimedPoint, class: &Classification) {
        match class {
            Classification::Inside { distance_km } => {
                debug!("Distance {:.0}m at {}", distance_km * 1_000.0, timestamp(point));
            }
            Classification::Skipped(err) => {
                self.skipped += 1;
                debug!(idx, pos = %point.pos, error = %err, "skipping pinpoint");
            }
            Classification::Outside { .. } => {}
        }
    }

    fn on_visit(&mut self, visit: &VisitRecord) {
        self.visits += 1;
        info!("{}", describe("Visited", visit));
    }

    fn on_run_dropped(&mut self, run: &VisitRecord) {
        self.dropped += 1;
        debug!("{}", describe("Dropped visit", run));
    }
}

/// `"<label> for 1h5m0s starting at 2020-09-13T12:26:40Z (70 pinpoints / 65 max consecutive)"`.
pub fn describe(label: &str, run: &VisitRecord) -> String {
    format!(
        "{label} for {} starting at {} ({} pinpoints / {} max consecutive)",
        format_duration(run.duration()),
        run.start.to_rfc3339_opts(SecondsFormat::Secs, true),
        run.total_inside,
        run.max_consecutive_inside,
    )
}

/// Compact `XhYmZs` form, dropping leading zero units (`0s` when empty).
pub fn format_duration(d: TimeDelta) -> String {
    let total = d.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let secs = total.unsigned_abs();
    let (h, m, s) = (secs / 3_600, (secs % 3_600) / 60, secs % 60);
    if h > 0 {
        format!("{sign}{h}h{m}m{s}s")
    } else if m > 0 {
        format!("{sign}{m}m{s}s")
    } else {
        format!("{sign}{s}s")
    }
}

fn timestamp(point: &TimedPoint) -> String {
    point.time.to_rfc3339_opts(SecondsFormat::Secs, true)
}
