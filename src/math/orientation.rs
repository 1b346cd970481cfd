//! Half-plane orientation predicates.
//!
//! All predicates look along the directed line `p1 -> p2`; "left" is the
//! counter-clockwise side.

use super::Point2;

/// Twice the signed area of triangle `p1 p2 p3`.
///
/// Positive for a counter-clockwise turn, negative for clockwise, zero when
/// the points are collinear.
#[must_use]
pub fn signed_area(p1: &Point2, p2: &Point2, p3: &Point2) -> f64 {
    (p2.x - p1.x) * (p3.y - p1.y) - (p3.x - p1.x) * (p2.y - p1.y)
}

/// Strict test: `p3` lies left of the directed line `p1 -> p2`.
#[must_use]
pub fn is_left(p1: &Point2, p2: &Point2, p3: &Point2) -> bool {
    signed_area(p1, p2, p3) > 0.0
}

/// Inclusive test: `p3` lies left of, or on, the directed line `p1 -> p2`.
#[must_use]
pub fn is_left_or_on(p1: &Point2, p2: &Point2, p3: &Point2) -> bool {
    signed_area(p1, p2, p3) >= 0.0
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn ccw_triangle_is_positive() {
        assert_relative_eq!(signed_area(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0)), 1.0);
    }

    #[test]
    fn swap_flips_sign() {
        let (a, b, c) = (p(0.3, -1.0), p(2.0, 0.5), p(-1.0, 4.0));
        assert_relative_eq!(signed_area(&a, &b, &c), -signed_area(&a, &c, &b));
    }

    #[test]
    fn left_and_right() {
        let (a, b) = (p(0.0, 0.0), p(1.0, 0.0));
        assert!(is_left(&a, &b, &p(0.5, 1.0)));
        assert!(!is_left(&a, &b, &p(0.5, -1.0)));
        assert!(!is_left_or_on(&a, &b, &p(0.5, -1.0)));
    }

    #[test]
    fn collinear_is_on_but_not_left() {
        let (a, b) = (p(0.0, 0.0), p(2.0, 2.0));
        let mid = p(1.0, 1.0);
        assert!(!is_left(&a, &b, &mid));
        assert!(is_left_or_on(&a, &b, &mid));
        assert!(is_left_or_on(&a, &b, &a));
        assert!(is_left_or_on(&a, &b, &b));
    }
}
