pub mod distance_3d;
pub mod intersect_2d;
pub mod orientation;
pub mod polygon_2d;
pub mod triangle_3d;
pub mod vector;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Integer raster coordinate.
pub type PixelPoint = nalgebra::Point2<i32>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Five-digit approximation of π used for degree conversion.
///
/// Kept short on purpose so converted angles match previously published values.
#[allow(clippy::approx_constant)]
pub const PI_APPROX: f64 = 3.14159;
