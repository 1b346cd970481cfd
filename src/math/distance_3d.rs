use super::vector::{cross, squared_length};
use super::{Point3, Vector3};
use crate::error::{GeometryError, Result};

/// Returns the perpendicular distance from `point` to the infinite line
/// through `line_point` with direction `line_direction`.
///
/// Computed as `|(point - line_point) × dir| / |dir|`, so the direction does
/// not need to be normalized.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateLine` if `line_direction` has zero length.
pub fn point_to_line_distance(
    point: &Point3,
    line_point: &Point3,
    line_direction: &Vector3,
) -> Result<f64> {
    let dir_len_sq = squared_length(line_direction);
    if dir_len_sq < f64::MIN_POSITIVE {
        return Err(GeometryError::DegenerateLine.into());
    }
    let ap = point - line_point;
    Ok((squared_length(&cross(&ap, line_direction)) / dir_len_sq).sqrt())
}
