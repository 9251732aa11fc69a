use thiserror::Error;

/// Top-level error type for the primitive generators.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoprimError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

impl GeoprimError {
    /// Returns the offending parameter name for an
    /// [`OperationError::InvalidParameter`], `None` otherwise.
    #[must_use]
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::Operation(OperationError::InvalidParameter { parameter, .. }) => Some(*parameter),
            _ => None,
        }
    }
}

/// Errors related to geometric construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("polygon needs at least 3 vertices, got {count}")]
    InvalidPolygon { count: usize },

    #[error("degenerate polygon: vertices are collinear or coincident")]
    DegeneratePolygon,

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to generator operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperationError {
    #[error("invalid parameter {parameter}: {constraint}")]
    InvalidParameter {
        parameter: &'static str,
        constraint: String,
    },

    #[error(
        "rotation of {rotation} rad is below the minimum of {min_angle} rad for the given radii"
    )]
    InsufficientRotation { rotation: f64, min_angle: f64 },

    #[error("solid has no polygons")]
    EmptySolid,
}

impl OperationError {
    pub(crate) fn invalid(parameter: &'static str, constraint: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            constraint: constraint.into(),
        }
    }
}

/// Convenience type alias for results using [`GeoprimError`].
pub type Result<T> = std::result::Result<T, GeoprimError>;
