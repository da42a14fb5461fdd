use thiserror::Error;
use vf_core::CoreError;
use vf_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum VisitError {
    #[error("invalid search configuration: {0}")]
    Config(#[from] CoreError),

    #[error("error finding bounding box: {0}")]
    BoundingBox(#[from] SpatialError),
}

pub type VisitResult<T> = Result<T, VisitError>;
