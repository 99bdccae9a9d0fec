//! Indexed 3D triangle.

use geotrace_math::{Point3, Vec3};

/// A triangle in 3D space with an identifier for mesh bookkeeping.
///
/// Intersection routines assume a non-degenerate (nonzero area) triangle;
/// degenerate triangles produce non-finite intersection results rather
/// than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle3 {
    /// First vertex.
    pub p1: Point3,
    /// Second vertex.
    pub p2: Point3,
    /// Third vertex.
    pub p3: Point3,
    /// Caller-assigned identifier (0 when untracked).
    pub id: u32,
}

impl Triangle3 {
    /// Create a triangle with id 0.
    pub fn new(p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self { p1, p2, p3, id: 0 }
    }

    /// Create a triangle with an explicit id.
    pub fn with_id(p1: Point3, p2: Point3, p3: Point3, id: u32) -> Self {
        Self { p1, p2, p3, id }
    }

    /// Centroid of the three vertices.
    pub fn center(&self) -> Point3 {
        Point3::new(
            (self.p1.x + self.p2.x + self.p3.x) / 3.0,
            (self.p1.y + self.p2.y + self.p3.y) / 3.0,
            (self.p1.z + self.p2.z + self.p3.z) / 3.0,
        )
    }

    /// Triangle area from the cross-product of two edges.
    pub fn area(&self) -> f64 {
        let edge1 = self.p2 - self.p1;
        let edge2 = self.p3 - self.p1;
        edge1.cross(&edge2).norm() / 2.0
    }

    /// Unnormalized normal (`edge1 x edge2`); zero for degenerate triangles.
    pub fn normal(&self) -> Vec3 {
        (self.p2 - self.p1).cross(&(self.p3 - self.p1))
    }
}
