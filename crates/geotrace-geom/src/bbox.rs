//! Axis-aligned bounding box and its closed-box tessellation.

use geotrace_math::Point3;

use crate::Triangle3;

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb3 {
    /// Create an AABB from min and max corners.
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Create an empty (inverted) AABB suitable for expansion.
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Expand this AABB to include a point.
    pub fn include_point(&mut self, p: &Point3) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// Bounding box of a point set.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Self {
        let mut aabb = Self::empty();
        for p in points {
            aabb.include_point(p);
        }
        aabb
    }

    /// Bounding box of a triangle set.
    pub fn from_triangles<'a>(triangles: impl IntoIterator<Item = &'a Triangle3>) -> Self {
        let mut aabb = Self::empty();
        for t in triangles {
            aabb.include_point(&t.p1);
            aabb.include_point(&t.p2);
            aabb.include_point(&t.p3);
        }
        aabb
    }

    /// Whether the point lies inside the box (boundary inclusive).
    pub fn contains(&self, p: &Point3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Tessellate the box surface as a closed mesh of 12 triangles.
    ///
    /// The result is watertight and suitable for parity-based containment
    /// tests.
    pub fn to_triangles(&self) -> Vec<Triangle3> {
        let (min_x, min_y, min_z) = (self.min.x, self.min.y, self.min.z);
        let (max_x, max_y, max_z) = (self.max.x, self.max.y, self.max.z);

        // Max X face corners, then the remaining corners on the min X face.
        let p1 = Point3::new(max_x, min_y, min_z);
        let p2 = Point3::new(max_x, max_y, min_z);
        let p3 = Point3::new(max_x, max_y, max_z);
        let p4 = Point3::new(max_x, min_y, max_z);
        let p5 = Point3::new(min_x, max_y, min_z);
        let p6 = Point3::new(min_x, max_y, max_z);
        let p7 = Point3::new(min_x, min_y, min_z);
        let p8 = Point3::new(min_x, min_y, max_z);

        vec![
            // Min Y face
            Triangle3::new(p4, p8, p1),
            Triangle3::new(p8, p7, p1),
            // Max Y face
            Triangle3::new(p3, p5, p6),
            Triangle3::new(p3, p2, p5),
            // Min X face
            Triangle3::new(p6, p5, p8),
            Triangle3::new(p5, p7, p8),
            // Max X face
            Triangle3::new(p4, p2, p3),
            Triangle3::new(p4, p1, p2),
            // Min Z face
            Triangle3::new(p5, p2, p7),
            Triangle3::new(p7, p2, p1),
            // Max Z face
            Triangle3::new(p3, p6, p8),
            Triangle3::new(p8, p4, p3),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn from_points_spans_extremes() {
        let points = [
            Point3::new(1.0, -2.0, 0.0),
            Point3::new(-1.0, 4.0, 2.0),
            Point3::new(0.5, 0.0, -3.0),
        ];
        let aabb = Aabb3::from_points(&points);
        assert_eq!(aabb.min, Point3::new(-1.0, -2.0, -3.0));
        assert_eq!(aabb.max, Point3::new(1.0, 4.0, 2.0));
    }

    #[test]
    fn contains_is_boundary_inclusive() {
        let aabb = Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        assert!(aabb.contains(&Point3::new(0.5, 0.5, 0.5)));
        assert!(aabb.contains(&Point3::new(1.0, 1.0, 1.0)));
        assert!(!aabb.contains(&Point3::new(1.0, 1.0, 1.1)));
    }

    #[test]
    fn tessellation_is_closed() {
        let aabb = Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 2.0, 2.0));
        let tris = aabb.to_triangles();
        assert_eq!(tris.len(), 12);

        // Total surface area of a 2x2x2 cube is 24.
        let area: f64 = tris.iter().map(|t| t.area()).sum();
        assert_relative_eq!(area, 24.0, epsilon = 1e-12);

        // Every vertex lies on the box surface.
        for t in &tris {
            for p in [t.p1, t.p2, t.p3] {
                assert!(aabb.contains(&p));
            }
        }
    }
}
