//! Parameter checks shared by the generators.

use tracing::debug;

use crate::error::{GeoprimError, OperationError, Result};
use crate::math::Point3;

/// Minimum tessellation count accepted by every generator.
pub(super) const MIN_SEGMENTS: usize = 4;

pub(super) fn reject(parameter: &'static str, constraint: impl Into<String>) -> GeoprimError {
    let constraint = constraint.into();
    debug!("rejected parameter {}: {}", parameter, constraint);
    OperationError::invalid(parameter, constraint).into()
}

pub(super) fn check_tolerance(tolerance: f64) -> Result<()> {
    if tolerance.is_finite() && tolerance > 0.0 {
        Ok(())
    } else {
        Err(reject("tolerance", format!("must be positive, got {tolerance}")))
    }
}

pub(super) fn check_center(center: &Point3) -> Result<()> {
    if center.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(reject("center", "components must be finite"))
    }
}

pub(super) fn check_positive(parameter: &'static str, values: &[f64]) -> Result<()> {
    match values.iter().find(|v| !(v.is_finite() && **v > 0.0)) {
        None => Ok(()),
        Some(v) => Err(reject(
            parameter,
            format!("components must be greater than zero, got {v}"),
        )),
    }
}

pub(super) fn check_non_negative(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(reject(
            parameter,
            format!("must be non-negative, got {value}"),
        ))
    }
}

pub(super) fn check_segments(segments: usize) -> Result<()> {
    if segments >= MIN_SEGMENTS {
        Ok(())
    } else {
        Err(reject(
            "segments",
            format!("must be {MIN_SEGMENTS} or more, got {segments}"),
        ))
    }
}
