//! Point-in-mesh testing by ray-parity voting.

use geotrace_geom::Triangle3;
use geotrace_math::{Point3, Vec3};

use crate::ray::Ray3;
use crate::triangle::intersect_triangle;

/// Whether a point lies inside a closed, watertight triangle mesh.
///
/// Casts one axis-aligned ray per coordinate axis and counts boundary
/// crossings over every triangle; an odd count means inside for that
/// axis, and the point is inside the solid only when all three axes
/// agree. A single-axis parity test is unreliable when the ray grazes
/// an edge or vertex; voting across three axes reduces (but does not
/// eliminate) misclassification on degenerate alignments.
///
/// Runs in O(3 * triangles) per query - there is no spatial acceleration
/// structure, which is fine for small meshes and few queries.
pub fn is_inside_mesh(point: &Point3, mesh: &[Triangle3]) -> bool {
    axis_test(point, mesh, Vec3::x())
        && axis_test(point, mesh, Vec3::y())
        && axis_test(point, mesh, Vec3::z())
}

/// Parity test along a single axis direction.
///
/// Edge-touching intersections count one half, so a ray passing exactly
/// along the shared edge of two triangles still contributes one full
/// crossing in total. The fractional sum makes the oddness test an
/// inequality against even numbers rather than a modulo comparison.
fn axis_test(point: &Point3, mesh: &[Triangle3], axis: Vec3) -> bool {
    let ray = Ray3::new(*point, axis);
    let mut total = 0.0_f64;
    for tri in mesh {
        let hit = intersect_triangle(&ray, tri);
        if hit.hit {
            total += if hit.on_edge { 0.5 } else { 1.0 };
        }
    }
    total % 2.0 != 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use geotrace_geom::Aabb3;

    fn unit_cube() -> Vec<Triangle3> {
        Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0)).to_triangles()
    }

    #[test]
    fn cube_centroid_is_inside() {
        let mesh = unit_cube();
        assert!(is_inside_mesh(&Point3::new(0.5, 0.5, 0.5), &mesh));
    }

    #[test]
    fn off_center_interior_point_is_inside() {
        let mesh = unit_cube();
        assert!(is_inside_mesh(&Point3::new(0.25, 0.625, 0.75), &mesh));
    }

    #[test]
    fn points_outside_bounding_box_are_outside() {
        let mesh = unit_cube();
        assert!(!is_inside_mesh(&Point3::new(2.0, 2.0, 2.0), &mesh));
        assert!(!is_inside_mesh(&Point3::new(-0.5, 0.5, 0.5), &mesh));
        assert!(!is_inside_mesh(&Point3::new(0.5, 0.5, 10.0), &mesh));
    }

    #[test]
    fn point_behind_mesh_sees_even_crossings() {
        // The +X ray from here crosses both the min and max X faces.
        let mesh = unit_cube();
        assert!(!is_inside_mesh(&Point3::new(-1.0, 0.3, 0.6), &mesh));
    }

    #[test]
    fn face_point_does_not_crash() {
        let mesh = unit_cube();
        // Exactly on the max X face; either verdict is acceptable.
        let _ = is_inside_mesh(&Point3::new(1.0, 0.5, 0.5), &mesh);
    }

    #[test]
    fn empty_mesh_contains_nothing() {
        assert!(!is_inside_mesh(&Point3::new(0.0, 0.0, 0.0), &[]));
    }
}
