//! Immutable per-run search configuration.
//!
//! Built once at startup by the application crate (from CLI flags or a
//! geocoded address) and passed by reference to every component.

use crate::{CoreError, CoreResult, GeoPoint};

/// Top-level search configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// The place being searched for.
    pub target: GeoPoint,

    /// A pinpoint is "at" the target when its ellipsoidal distance is
    /// strictly below this many kilometres.
    pub threshold_km: f64,

    /// Consecutive inside points needed for a visit to qualify, and
    /// consecutive outside points that end one.  Default: 10.
    pub min_run_length: usize,

    /// The bounding box is solved for `threshold_km * box_margin`.
    /// Must be ≥ [`Self::MIN_BOX_MARGIN`].  Default: 2.0.
    ///
    /// A box solved at exactly the threshold does not enclose the disk away
    /// from the equator: iso-distance contours bulge poleward, past the
    /// longitude reached along the centre's parallel.
    pub box_margin: f64,
}

impl SearchConfig {
    pub const DEFAULT_MIN_RUN_LENGTH: usize = 10;
    pub const DEFAULT_BOX_MARGIN: f64 = 2.0;
    /// Smallest margin for which the solved box still encloses the disk.
    pub const MIN_BOX_MARGIN: f64 = 2.0;

    pub fn new(target: GeoPoint, threshold_km: f64) -> Self {
        Self {
            target,
            threshold_km,
            min_run_length: Self::DEFAULT_MIN_RUN_LENGTH,
            box_margin: Self::DEFAULT_BOX_MARGIN,
        }
    }

    pub fn with_min_run_length(mut self, min_run_length: usize) -> Self {
        self.min_run_length = min_run_length;
        self
    }

    pub fn with_box_margin(mut self, box_margin: f64) -> Self {
        self.box_margin = box_margin;
        self
    }

    /// Radius, in kilometres, handed to the bounding-box solver.
    #[inline]
    pub fn box_radius_km(&self) -> f64 {
        self.threshold_km * self.box_margin
    }

    /// Reject configurations no search can run with.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.target.is_valid() {
            return Err(CoreError::Config(format!("target {} is not a valid coordinate", self.target)));
        }
        if !self.threshold_km.is_finite() || self.threshold_km <= 0.0 {
            return Err(CoreError::Config(format!(
                "threshold must be a positive distance, got {}km",
                self.threshold_km
            )));
        }
        if self.min_run_length == 0 {
            return Err(CoreError::Config("min_run_length must be at least 1".into()));
        }
        if !self.box_margin.is_finite() || self.box_margin < Self::MIN_BOX_MARGIN {
            return Err(CoreError::Config(format!(
                "box_margin must be at least {}, got {}",
                Self::MIN_BOX_MARGIN,
                self.box_margin
            )));
        }
        Ok(())
    }
}
