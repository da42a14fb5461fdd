//! Geographic coordinate type and ellipsoidal distance.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Distances are computed on the
//! WGS-84 ellipsoid with Vincenty's inverse formula, which is accurate to
//! well under a millimetre for all but nearly antipodal point pairs.  For
//! those pairs the iteration may fail to settle and
//! [`CoreError::NoConvergence`] is returned instead of a bogus value.

use crate::{CoreError, CoreResult};

/// WGS-84 semi-major axis, metres.
const WGS84_A: f64 = 6_378_137.0;
/// WGS-84 flattening.
const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// WGS-84 semi-minor axis, metres.
const WGS84_B: f64 = (1.0 - WGS84_F) * WGS84_A;

const MAX_ITERATIONS: usize = 200;
const LAMBDA_TOLERANCE: f64 = 1e-12;

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Ellipsoidal distance to `other` in kilometres.
    ///
    /// See [`vincenty_distance_km`].
    #[inline]
    pub fn distance_km(self, other: GeoPoint) -> CoreResult<f64> {
        vincenty_distance_km(self, other)
    }

    /// `true` if latitude is within ±90° and longitude within ±180°.
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Geodesic distance between `p1` and `p2` on the WGS-84 ellipsoid, in
/// kilometres, using Vincenty's inverse formula.
///
/// Coincident points return `0.0`.  Fails with
/// [`CoreError::NoConvergence`] when λ has not settled to within 1e-12 rad
/// after 200 iterations, which only happens for nearly antipodal pairs.
pub fn vincenty_distance_km(p1: GeoPoint, p2: GeoPoint) -> CoreResult<f64> {
    let l = (p2.lon - p1.lon).to_radians();
    let u1 = ((1.0 - WGS84_F) * p1.lat.to_radians().tan()).atan();
    let u2 = ((1.0 - WGS84_F) * p2.lat.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut converged = false;

    let mut sin_sigma = 0.0;
    let mut cos_sigma = 0.0;
    let mut sigma = 0.0;
    let mut cos_sq_alpha = 0.0;
    let mut cos_2sigma_m = 0.0;

    for _ in 0..MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();

        let t1 = cos_u2 * sin_lambda;
        let t2 = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
        sin_sigma = (t1 * t1 + t2 * t2).sqrt();
        if sin_sigma == 0.0 {
            return Ok(0.0);
        }
        cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        sigma = sin_sigma.atan2(cos_sigma);

        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // Equatorial line: cos²α = 0.
        cos_2sigma_m = if cos_sq_alpha != 0.0 {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        } else {
            0.0
        };

        let c = WGS84_F / 16.0 * cos_sq_alpha * (4.0 + WGS84_F * (4.0 - 3.0 * cos_sq_alpha));
        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * WGS84_F
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        if (lambda - lambda_prev).abs() < LAMBDA_TOLERANCE {
            converged = true;
            break;
        }
    }

    if !converged || !lambda.is_finite() {
        return Err(CoreError::NoConvergence { from: p1, to: p2 });
    }

    let u_sq = cos_sq_alpha * (WGS84_A * WGS84_A - WGS84_B * WGS84_B) / (WGS84_B * WGS84_B);
    let a = 1.0 + u_sq / 16_384.0 * (4_096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let b = u_sq / 1_024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let delta_sigma = b
        * sin_sigma
        * (cos_2sigma_m
            + b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                    - b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

    let metres = WGS84_B * a * (sigma - delta_sigma);
    Ok(metres / 1_000.0)
}
