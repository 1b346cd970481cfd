use super::vector::{cross, dot};
use super::{Point3, Vector3};

/// Minimum `|normal · direction|` for a ray to count as crossing a plane.
const RAY_PLANE_PARALLEL_EPS: f64 = 1e-4;

/// Intersects the ray `origin + t * direction` with the plane through
/// `plane_point` with normal `normal`.
///
/// Returns `None` when the ray is (nearly) parallel to the plane. The hit may
/// lie behind the origin (`t < 0`); callers that need a forward-only ray
/// should compare against the origin themselves.
#[must_use]
pub fn ray_plane_intersection(
    origin: &Point3,
    direction: &Vector3,
    plane_point: &Point3,
    normal: &Vector3,
) -> Option<Point3> {
    let normal_dir_dot = dot(normal, direction);
    if normal_dir_dot.abs() <= RAY_PLANE_PARALLEL_EPS {
        return None;
    }
    let t = dot(&(plane_point - origin), normal) / normal_dir_dot;
    Some(origin + direction * t)
}

/// Same-side test for a point coplanar with triangle `p1 p2 p3`.
///
/// Points on an edge or vertex count as inside.
#[must_use]
pub fn point_in_triangle(p1: &Point3, p2: &Point3, p3: &Point3, p: &Point3) -> bool {
    let a = p1 - p;
    let b = p2 - p;
    let c = p3 - p;

    let u = cross(&b, &c);
    let v = cross(&c, &a);
    let w = cross(&a, &b);

    dot(&u, &v) >= 0.0 && dot(&u, &w) >= 0.0
}
