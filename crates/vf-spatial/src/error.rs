//! Spatial-subsystem error type.

use thiserror::Error;

use vf_core::CoreError;

use crate::Direction;

/// Errors produced by `vf-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    /// The search passed ±90° latitude or ±180° longitude before reaching
    /// the requested radius.
    #[error("too close to a pole or meridian (searching {direction})")]
    TooCloseToPoleOrMeridian { direction: Direction },

    /// A corner distance failed; the box cannot be trusted.
    #[error("error computing distance: {0}")]
    Distance(#[from] CoreError),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
