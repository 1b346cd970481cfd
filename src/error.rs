use thiserror::Error;

/// Top-level error type for the clipgeom toolkit.
#[derive(Debug, Error)]
pub enum ClipGeomError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("expected a {expected}-component vector, found {found} components")]
    InvalidDimension { expected: usize, found: usize },

    #[error("line direction has zero length")]
    DegenerateLine,

    #[error("lines are parallel (denominator {denominator:e})")]
    ParallelLines { denominator: f64 },
}

/// Errors related to polygon operations and builders.
#[derive(Debug, Error, PartialEq)]
pub enum OperationError {
    #[error("{0} has no vertices")]
    EmptyPolygon(&'static str),

    #[error("capacity of {capacity} vertices exceeded")]
    CapacityExceeded { capacity: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`ClipGeomError`].
pub type Result<T> = std::result::Result<T, ClipGeomError>;
