use nalgebra::SVector;

use super::{Vector3, PI_APPROX};
use crate::error::{GeometryError, Result};

/// Dot product of two vectors of the same dimension.
#[must_use]
pub fn dot<const D: usize>(a: &SVector<f64, D>, b: &SVector<f64, D>) -> f64 {
    a.dot(b)
}

/// Cross product of two 3D vectors.
#[must_use]
pub fn cross(a: &Vector3, b: &Vector3) -> Vector3 {
    a.cross(b)
}

/// Cross product over raw coordinate slices.
///
/// # Errors
///
/// Returns `GeometryError::InvalidDimension` unless both slices hold exactly
/// three components.
pub fn cross_components(a: &[f64], b: &[f64]) -> Result<Vector3> {
    let a = as_vector3(a)?;
    let b = as_vector3(b)?;
    Ok(cross(&a, &b))
}

fn as_vector3(components: &[f64]) -> Result<Vector3> {
    match *components {
        [x, y, z] => Ok(Vector3::new(x, y, z)),
        _ => Err(GeometryError::InvalidDimension {
            expected: 3,
            found: components.len(),
        }
        .into()),
    }
}

/// Sum of squared components.
#[must_use]
pub fn squared_length<const D: usize>(v: &SVector<f64, D>) -> f64 {
    v.norm_squared()
}

/// Euclidean length. Never negative.
#[must_use]
pub fn length<const D: usize>(v: &SVector<f64, D>) -> f64 {
    v.norm()
}

/// Angle between two vectors in radians, in `[0, π]`.
///
/// Returns `0.0` when either vector has zero length instead of NaN.
#[must_use]
pub fn angle_between<const D: usize>(a: &SVector<f64, D>, b: &SVector<f64, D>) -> f64 {
    let len_sq_a = squared_length(a);
    let len_sq_b = squared_length(b);
    if len_sq_a == 0.0 || len_sq_b == 0.0 {
        return 0.0;
    }
    // Rounding can push the cosine of (anti)parallel vectors just past ±1.
    let cos = (dot(a, b) / (len_sq_a * len_sq_b).sqrt()).clamp(-1.0, 1.0);
    cos.acos()
}

/// Converts radians to degrees using [`PI_APPROX`].
#[must_use]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI_APPROX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::error::ClipGeomError;
    use crate::math::Vector2;

    #[test]
    fn dot_3d() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, -5.0, 6.0);
        assert_relative_eq!(dot(&a, &b), 12.0);
    }

    #[test]
    fn dot_2d() {
        let a = Vector2::new(3.0, 4.0);
        let b = Vector2::new(-4.0, 3.0);
        assert_relative_eq!(dot(&a, &b), 0.0);
    }

    #[test]
    fn cross_right_handed() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_relative_eq!(cross(&x, &y), Vector3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(cross(&y, &x), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn cross_is_orthogonal_to_inputs() {
        let a = Vector3::new(1.5, -2.0, 0.25);
        let b = Vector3::new(-3.0, 0.5, 4.0);
        let c = cross(&a, &b);
        assert_relative_eq!(dot(&c, &a), 0.0, epsilon = 1e-12);
        assert_relative_eq!(dot(&c, &b), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn cross_components_valid() {
        let c = cross_components(&[0.0, 1.0, 0.0], &[0.0, 0.0, 1.0]).unwrap();
        assert_relative_eq!(c, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn cross_components_rejects_2d() {
        let err = cross_components(&[1.0, 0.0], &[0.0, 1.0, 0.0]).unwrap_err();
        assert!(matches!(
            err,
            ClipGeomError::Geometry(GeometryError::InvalidDimension {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn cross_components_rejects_4d() {
        assert!(cross_components(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0, 1.0]).is_err());
    }

    #[test]
    fn length_of_3_4_5() {
        let v = Vector2::new(3.0, 4.0);
        assert_relative_eq!(squared_length(&v), 25.0);
        assert_relative_eq!(length(&v), 5.0);
    }

    #[test]
    fn angle_between_axes() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_relative_eq!(angle_between(&x, &y), FRAC_PI_2);
        assert_relative_eq!(
            radians_to_degrees(angle_between(&x, &y)),
            90.0,
            epsilon = 1e-3
        );
    }

    #[test]
    fn angle_between_zero_vector_is_zero() {
        let zero = Vector3::zeros();
        let x = Vector3::new(1.0, 0.0, 0.0);
        assert_eq!(angle_between(&zero, &x), 0.0);
        assert_eq!(angle_between(&x, &zero), 0.0);
    }

    #[test]
    fn angle_between_opposite_is_pi() {
        let a = Vector3::new(1.0, 1.0, 1.0);
        let b = -a;
        let angle = angle_between(&a, &b);
        assert!(!angle.is_nan());
        assert_relative_eq!(angle, std::f64::consts::PI);
    }

    #[test]
    fn radians_to_degrees_uses_short_pi() {
        assert_relative_eq!(radians_to_degrees(PI_APPROX), 180.0);
        assert_relative_eq!(radians_to_degrees(1.0), 180.0 / PI_APPROX);
    }
}
