//! Parametric ray representations in 2D and 3D.
//!
//! Both types store an origin and an unnormalized direction vector and
//! evaluate as `origin + t * dir`. Two constructors cover the two ways
//! callers think about rays: [`Ray3::new`] takes an explicit direction,
//! [`Ray3::between`] takes a source and a destination point (the
//! direction becomes `destination - source`, so `t = 1` lands on the
//! destination). Every consumer in this crate documents which
//! construction it expects.

use geotrace_math::{Point2, Point3, Vec2, Vec3};

/// Practically-zero threshold for the 2D line intersection denominator.
const PARALLEL_EPSILON: f64 = 1e-8;

/// A ray in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray3 {
    /// Origin point.
    pub origin: Point3,
    /// Direction vector (not normalized).
    pub dir: Vec3,
}

impl Ray3 {
    /// Create a ray from an origin and a direction vector.
    pub fn new(origin: Point3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    /// Create a ray spanning `source` to `destination` (`t` in `[0, 1]`).
    pub fn between(source: Point3, destination: Point3) -> Self {
        Self {
            origin: source,
            dir: destination - source,
        }
    }

    /// Evaluate the ray at parameter `t`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.dir
    }

    /// Euclidean length of the direction vector.
    ///
    /// For a [`Ray3::between`] ray this is the source-to-destination
    /// distance, which converts parametric spans to physical lengths.
    pub fn length(&self) -> f64 {
        self.dir.norm()
    }
}

/// A ray in 2D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2 {
    /// Origin point.
    pub source: Point2,
    /// Direction vector (not normalized).
    pub dir: Vec2,
}

impl Ray2 {
    /// Create a ray from an origin and a direction vector.
    pub fn new(source: Point2, dir: Vec2) -> Self {
        Self { source, dir }
    }

    /// Create a ray spanning `source` to `destination`.
    pub fn between(source: Point2, destination: Point2) -> Self {
        Self {
            source,
            dir: destination - source,
        }
    }

    /// Evaluate the ray at parameter `t`.
    #[inline]
    pub fn at(&self, t: f64) -> Point2 {
        self.source + t * self.dir
    }

    /// Intersection of the two infinite lines carrying `self` and `other`.
    ///
    /// Uses the two-point line intersection formula on `(source,
    /// source + dir)` of each ray. Parallel lines (denominator within
    /// [`PARALLEL_EPSILON`] of zero) yield non-finite coordinates instead
    /// of an error; callers filter those with bounds checks.
    pub fn intersect(&self, other: &Ray2) -> Point2 {
        let x1 = self.source.x;
        let y1 = self.source.y;
        let x2 = self.source.x + self.dir.x;
        let y2 = self.source.y + self.dir.y;

        let x3 = other.source.x;
        let y3 = other.source.y;
        let x4 = other.source.x + other.dir.x;
        let y4 = other.source.y + other.dir.y;

        let mut denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
        let x_num = (x1 * y2 - y1 * x2) * (x3 - x4) - (x1 - x2) * (x3 * y4 - y3 * x4);
        let y_num = (x1 * y2 - y1 * x2) * (y3 - y4) - (y1 - y2) * (x3 * y4 - y3 * x4);
        if denom.abs() < PARALLEL_EPSILON {
            denom = 0.0;
        }
        Point2::new(x_num / denom, y_num / denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn between_spans_source_to_destination() {
        let ray = Ray3::between(Point3::new(1.0, 0.0, 0.0), Point3::new(3.0, 0.0, 4.0));
        assert_relative_eq!(ray.at(0.0), Point3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(ray.at(1.0), Point3::new(3.0, 0.0, 4.0), epsilon = 1e-12);
        assert_relative_eq!(ray.length(), 2.0 * 5.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn lines_cross_at_expected_point() {
        let a = Ray2::between(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0));
        let b = Ray2::between(Point2::new(0.0, 2.0), Point2::new(2.0, 0.0));
        let p = a.intersect(&b);
        assert_relative_eq!(p, Point2::new(1.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn intersection_ignores_segment_extents() {
        // The carrying lines cross well past both segments.
        let a = Ray2::between(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        let b = Ray2::between(Point2::new(5.0, 1.0), Point2::new(5.0, 2.0));
        let p = a.intersect(&b);
        assert_relative_eq!(p, Point2::new(5.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn parallel_lines_produce_non_finite_point() {
        let a = Ray2::between(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        let b = Ray2::between(Point2::new(0.0, 1.0), Point2::new(1.0, 1.0));
        let p = a.intersect(&b);
        assert!(!p.x.is_finite() || !p.y.is_finite());
    }
}
