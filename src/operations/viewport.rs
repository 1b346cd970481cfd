use crate::error::{OperationError, Result};
use crate::math::Point2;

/// Maps a window pixel position (origin top-left, y down) to normalized
/// device coordinates in `[-1, 1]²` (origin center, y up).
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if the window has zero width or height.
pub fn window_to_ndc(win_x: f64, win_y: f64, width: u32, height: u32) -> Result<Point2> {
    if width == 0 || height == 0 {
        return Err(OperationError::InvalidInput(format!(
            "window size must be non-zero, got {width}x{height}"
        ))
        .into());
    }
    let w = f64::from(width);
    let h = f64::from(height);
    Ok(Point2::new(2.0 * win_x / w - 1.0, 1.0 - 2.0 * win_y / h))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn corners_and_center() {
        assert_relative_eq!(window_to_ndc(0.0, 0.0, 800, 600).unwrap(), Point2::new(-1.0, 1.0));
        assert_relative_eq!(
            window_to_ndc(800.0, 600.0, 800, 600).unwrap(),
            Point2::new(1.0, -1.0)
        );
        assert_relative_eq!(
            window_to_ndc(400.0, 300.0, 800, 600).unwrap(),
            Point2::new(0.0, 0.0)
        );
    }

    #[test]
    fn zero_size_window_fails() {
        assert!(window_to_ndc(1.0, 1.0, 0, 600).is_err());
        assert!(window_to_ndc(1.0, 1.0, 800, 0).is_err());
    }
}
