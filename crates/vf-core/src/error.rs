//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::GeoPoint;

/// The error type for `vf-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Vincenty's iteration did not settle; the points are nearly antipodal.
    #[error("distance from {from} to {to} did not converge")]
    NoConvergence { from: GeoPoint, to: GeoPoint },

    #[error("no recognized units in distance {0:?}")]
    UnitParse(String),

    #[error("error parsing distance {input:?}: {source}")]
    NumberParse {
        input:  String,
        source: std::num::ParseFloatError,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `vf-core`.
pub type CoreResult<T> = Result<T, CoreError>;
