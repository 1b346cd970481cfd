use tracing::trace;

use crate::error::{OperationError, Result};
use crate::math::PixelPoint;

/// Rasterizes the outline of a circle with the integer midpoint algorithm.
///
/// The four axis extremes are emitted first (only the center when
/// `radius == 0`), then one octant is walked and mirrored: eight points per
/// step, four when the step lands on the diagonal `x == y`.
///
/// Points are returned in emission order. Points shared by neighbouring
/// octants are not deduplicated.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if `radius` is negative or a point
/// of the circle falls outside the `i32` coordinate range.
pub fn midpoint_circle(center: PixelPoint, radius: i32) -> Result<Vec<PixelPoint>> {
    if radius < 0 {
        return Err(
            OperationError::InvalidInput(format!("circle radius must be >= 0, got {radius}"))
                .into(),
        );
    }

    // Work in i64: the decision variable reaches about 4 * radius and the
    // offsets may push a point past i32 bounds.
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    let mut points = Vec::new();
    let mut emit = |dx: i64, dy: i64| -> Result<()> {
        let (Ok(x), Ok(y)) = (i32::try_from(cx + dx), i32::try_from(cy + dy)) else {
            return Err(OperationError::InvalidInput(format!(
                "circle point ({}, {}) is outside the i32 range",
                cx + dx,
                cy + dy
            ))
            .into());
        };
        trace!(x, y, "circle point");
        points.push(PixelPoint::new(x, y));
        Ok(())
    };

    let r = i64::from(radius);
    emit(r, 0)?;
    if r > 0 {
        emit(-r, 0)?;
        emit(0, r)?;
        emit(0, -r)?;
    }

    let mut x = r;
    let mut y = 0;
    // Decision variable: sign tells whether the midpoint lies outside the circle.
    let mut p = 1 - r;
    while x > y {
        y += 1;
        if p <= 0 {
            p += 2 * y + 1;
        } else {
            x -= 1;
            p += 2 * y - 2 * x + 1;
        }
        if x < y {
            break;
        }

        emit(x, y)?;
        emit(-x, y)?;
        emit(x, -y)?;
        emit(-x, -y)?;
        if x != y {
            emit(y, x)?;
            emit(-y, x)?;
            emit(y, -x)?;
            emit(-y, -x)?;
        }
    }

    Ok(points)
}
