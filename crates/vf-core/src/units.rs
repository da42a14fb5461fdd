//! Threshold distance parsing.
//!
//! A threshold is a number followed by a unit suffix, e.g. `"50m"`,
//! `"0.2 km"`, `"500ft"`, `"1mi"`.  Case and surrounding whitespace are
//! ignored.

use crate::{CoreError, CoreResult};

/// Recognised suffixes and how many of each make one kilometre.
///
/// Order matters: `km` and `mi` must be tried before `m`.
const UNITS: [(&str, f64); 4] = [
    ("km", 1.0),
    ("ft", 3_280.84),
    ("mi", 0.621_371),
    ("m", 1_000.0),
];

/// Parse a distance string such as `"50m"` into kilometres.
///
/// # Errors
/// - [`CoreError::UnitParse`] if no suffix matches.
/// - [`CoreError::NumberParse`] if the part before the suffix is not a number.
pub fn parse_distance_km(dist: &str) -> CoreResult<f64> {
    let dist = dist.trim().to_lowercase();
    for (suffix, per_km) in UNITS {
        if let Some(count) = dist.strip_suffix(suffix) {
            let count = count.trim();
            let value: f64 = count.parse().map_err(|source| CoreError::NumberParse {
                input: count.to_owned(),
                source,
            })?;
            return Ok(value / per_km);
        }
    }
    Err(CoreError::UnitParse(dist))
}
