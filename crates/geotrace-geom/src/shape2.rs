//! Containment-testable 2D shapes.

use geotrace_math::Point2;

/// A bounded 2D shape supporting point containment tests.
///
/// The bounding rectangle (`min_x`..`max_x`, `min_y`..`max_y`) must
/// enclose the shape; the Monte Carlo sampler draws darts from it.
pub trait Shape2 {
    /// Minimum X of the bounding rectangle.
    fn min_x(&self) -> f64;
    /// Maximum X of the bounding rectangle.
    fn max_x(&self) -> f64;
    /// Minimum Y of the bounding rectangle.
    fn min_y(&self) -> f64;
    /// Maximum Y of the bounding rectangle.
    fn max_y(&self) -> f64;
    /// Exact shape area.
    fn area(&self) -> f64;
    /// Whether the point lies inside the shape (boundary inclusive).
    fn contains_point(&self, p: &Point2) -> bool;
}

/// A circle in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2 {
    /// Center point.
    pub center: Point2,
    /// Radius.
    pub radius: f64,
}

impl Circle2 {
    /// Create a circle from center and radius.
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Shape2 for Circle2 {
    fn min_x(&self) -> f64 {
        self.center.x - self.radius
    }

    fn max_x(&self) -> f64 {
        self.center.x + self.radius
    }

    fn min_y(&self) -> f64 {
        self.center.y - self.radius
    }

    fn max_y(&self) -> f64 {
        self.center.y + self.radius
    }

    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }

    fn contains_point(&self, p: &Point2) -> bool {
        (p - self.center).norm() <= self.radius
    }
}

/// An axis-aligned square in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square2 {
    /// Corner with the lowest X and Y.
    pub corner: Point2,
    /// Side length.
    pub side: f64,
}

impl Square2 {
    /// Create a square from its low corner and side length.
    pub fn new(corner: Point2, side: f64) -> Self {
        Self { corner, side }
    }

    /// The four corners, low-XY first.
    pub fn corners(&self) -> [Point2; 4] {
        [
            Point2::new(self.min_x(), self.min_y()),
            Point2::new(self.max_x(), self.max_y()),
            Point2::new(self.max_x(), self.min_y()),
            Point2::new(self.min_x(), self.max_y()),
        ]
    }
}

impl Shape2 for Square2 {
    fn min_x(&self) -> f64 {
        self.corner.x
    }

    fn max_x(&self) -> f64 {
        self.corner.x + self.side
    }

    fn min_y(&self) -> f64 {
        self.corner.y
    }

    fn max_y(&self) -> f64 {
        self.corner.y + self.side
    }

    fn area(&self) -> f64 {
        self.side * self.side
    }

    fn contains_point(&self, p: &Point2) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_containment_is_boundary_inclusive() {
        let c = Circle2::new(Point2::new(1.0, 1.0), 2.0);
        assert!(c.contains_point(&Point2::new(1.0, 1.0)));
        assert!(c.contains_point(&Point2::new(3.0, 1.0)));
        assert!(!c.contains_point(&Point2::new(3.1, 1.0)));
    }

    #[test]
    fn circle_bounds_enclose_radius() {
        let c = Circle2::new(Point2::new(0.0, -1.0), 0.5);
        assert_eq!(c.min_x(), -0.5);
        assert_eq!(c.max_x(), 0.5);
        assert_eq!(c.min_y(), -1.5);
        assert_eq!(c.max_y(), -0.5);
    }

    #[test]
    fn square_containment_is_boundary_inclusive() {
        let s = Square2::new(Point2::new(0.0, 0.0), 2.0);
        assert!(s.contains_point(&Point2::new(0.0, 0.0)));
        assert!(s.contains_point(&Point2::new(2.0, 2.0)));
        assert!(s.contains_point(&Point2::new(1.0, 1.0)));
        assert!(!s.contains_point(&Point2::new(2.0 + 1e-12, 1.0)));
    }

    #[test]
    fn square_area_and_corners() {
        let s = Square2::new(Point2::new(1.0, 2.0), 3.0);
        assert_eq!(s.area(), 9.0);
        assert_eq!(s.corners()[0], Point2::new(1.0, 2.0));
        assert_eq!(s.corners()[1], Point2::new(4.0, 5.0));
    }
}
