use super::{Point2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Intersection of the infinite line through `(p1, p2)` with the infinite
/// line through `(p3, p4)`.
///
/// The result is not clamped to either segment.
///
/// # Errors
///
/// Returns `GeometryError::ParallelLines` if the lines are parallel within
/// [`TOLERANCE`], or `GeometryError::DegenerateLine` if a point pair coincides.
pub fn line_line_intersection(
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    p4: &Point2,
) -> Result<Point2> {
    line_line_intersection_with_tolerance(p1, p2, p3, p4, TOLERANCE)
}

/// [`line_line_intersection`] with an explicit parallelism threshold.
///
/// The threshold bounds the sine of the angle between the two lines,
/// `|d1 × d2| / (|d1| |d2|)`, so it does not depend on coordinate scale.
///
/// # Errors
///
/// - `GeometryError::DegenerateLine` if either point pair coincides
/// - `GeometryError::ParallelLines` if the sine of the angle is below `tolerance`
pub fn line_line_intersection_with_tolerance(
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    p4: &Point2,
    tolerance: f64,
) -> Result<Point2> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let len_product = d1.norm() * d2.norm();
    if len_product < f64::MIN_POSITIVE {
        return Err(GeometryError::DegenerateLine.into());
    }
    let denominator = d1.x * d2.y - d1.y * d2.x;
    if denominator.abs() < tolerance * len_product || !denominator.is_finite() {
        return Err(GeometryError::ParallelLines { denominator }.into());
    }
    let dx = p3.x - p1.x;
    let dy = p3.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / denominator;
    Ok(p1 + d1 * t)
}
