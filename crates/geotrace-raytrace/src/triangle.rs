//! Ray-triangle intersection (Moller-Trumbore).

use geotrace_geom::Triangle3;

use crate::ray::Ray3;

/// Result of a ray-triangle intersection test.
///
/// `u` and `v` are barycentric coordinates of the plane intersection
/// point; `t` is the ray parameter. When the ray is parallel to the
/// triangle's plane the solve divides by zero and all three come back
/// non-finite - never an error - and `hit` is false because NaN fails
/// every comparison.
#[derive(Debug, Clone, Copy)]
pub struct TriangleHit {
    /// Whether the ray hits the triangle (in front of the origin).
    pub hit: bool,
    /// Barycentric coordinate along the first edge.
    pub u: f64,
    /// Barycentric coordinate along the second edge.
    pub v: f64,
    /// Ray parameter of the plane intersection.
    pub t: f64,
    /// Whether the intersection touches a triangle edge (`u` or `v`
    /// exactly zero). Parity counters weight such hits by one half.
    pub on_edge: bool,
}

/// Intersect a ray with a triangle.
///
/// The ray is `origin + t * dir` with `dir` used as-is (not normalized);
/// construct it with [`Ray3::new`]. A hit requires `u >= 0`, `v >= 0`,
/// `u + v <= 1`, and `t >= 0`.
pub fn intersect_triangle(ray: &Ray3, tri: &Triangle3) -> TriangleHit {
    let edge1 = tri.p2 - tri.p1;
    let edge2 = tri.p3 - tri.p1;
    let to_origin = ray.origin - tri.p1;

    let pvec = ray.dir.cross(&edge2);
    let qvec = to_origin.cross(&edge1);

    // Cramer solve of [t, u, v]; a zero determinant (parallel ray) turns
    // the scale into +-inf and poisons the outputs with NaN downstream.
    let inv_det = 1.0 / pvec.dot(&edge1);
    let t = qvec.dot(&edge2) * inv_det;
    let u = pvec.dot(&to_origin) * inv_det;
    let v = qvec.dot(&ray.dir) * inv_det;

    let on_edge = u == 0.0 || v == 0.0;
    let hit = u >= 0.0 && v >= 0.0 && t >= 0.0 && u + v <= 1.0;

    TriangleHit { hit, u, v, t, on_edge }
}
