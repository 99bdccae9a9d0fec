#![warn(missing_docs)]

//! Math types for the geotrace toolkit.
//!
//! Thin wrappers around nalgebra providing domain-specific types for
//! 2D/3D geometry - points, vectors, affine transforms - plus point-cloud
//! fitting routines, angle utilities, and lattice index conversions.

use nalgebra::Vector4;

pub mod angle;
pub mod fit;
pub mod lattice;

pub use fit::{best_fit_plane, centroid, rigid_transform_between, FitError};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = nalgebra::Vector3<f64>;

/// A point in 2D space.
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in 2D space.
pub type Vec2 = nalgebra::Vector2<f64>;

/// A 3x3 matrix.
pub type Mat3 = nalgebra::Matrix3<f64>;

/// A 4x4 matrix.
pub type Mat4 = nalgebra::Matrix4<f64>;

/// A 4x4 affine transformation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Mat4,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Mat4::identity(),
        }
    }

    /// Translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        let mut m = Mat4::identity();
        m[(0, 3)] = dx;
        m[(1, 3)] = dy;
        m[(2, 3)] = dz;
        Self { matrix: m }
    }

    /// Non-uniform scale by `(sx, sy, sz)`.
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        let mut m = Mat4::identity();
        m[(0, 0)] = sx;
        m[(1, 1)] = sy;
        m[(2, 2)] = sz;
        Self { matrix: m }
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Mat4::identity();
        m[(1, 1)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Mat4::identity();
        m[(0, 0)] = c;
        m[(0, 2)] = s;
        m[(2, 0)] = -s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Mat4::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// Build a transform from a 3x3 rotation block and a translation vector.
    pub fn from_parts(rotation: Mat3, translation: Vec3) -> Self {
        let mut m = Mat4::identity();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(&rotation);
        m[(0, 3)] = translation.x;
        m[(1, 3)] = translation.y;
        m[(2, 3)] = translation.z;
        Self { matrix: m }
    }

    /// Rotation from per-axis angles in radians.
    ///
    /// The composition order is Z, then Y, then X applied to column
    /// vectors (`R = Rz * Ry * Rx`).
    pub fn from_euler(rx: f64, ry: f64, rz: f64) -> Self {
        Self::from_parts(rotation_from_euler(rx, ry, rz), Vec3::zeros())
    }

    /// Compose: `self` then `other` (self * other).
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a direction vector (ignores translation).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vector4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }

    /// Rotation block of this transform.
    pub fn rotation(&self) -> Mat3 {
        self.matrix.fixed_view::<3, 3>(0, 0).into_owned()
    }

    /// Inverse of this transform, if it exists.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Rotation matrix from per-axis angles in radians.
///
/// Element-by-element expansion of `Rz * Ry * Rx`.
pub fn rotation_from_euler(rx: f64, ry: f64, rz: f64) -> Mat3 {
    let (sx, cx) = rx.sin_cos();
    let (sy, cy) = ry.sin_cos();
    let (sz, cz) = rz.sin_cos();
    let mut m = Mat3::identity();
    m[(0, 0)] = cy * cz;
    m[(0, 1)] = -cx * sz + sx * sy * cz;
    m[(0, 2)] = sx * sz + cx * sy * cz;
    m[(1, 0)] = cy * sz;
    m[(1, 1)] = cx * cz + sx * sy * sz;
    m[(1, 2)] = -sx * cz + cx * sy * sz;
    m[(2, 0)] = -sy;
    m[(2, 1)] = sx * cy;
    m[(2, 2)] = cx * cy;
    m
}

/// Rotation matrix from per-axis angles in degrees.
pub fn rotation_from_euler_degrees(rx: f64, ry: f64, rz: f64) -> Mat3 {
    rotation_from_euler(rx.to_radians(), ry.to_radians(), rz.to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn identity_transform_fixes_points() {
        let t = Transform::identity();
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_relative_eq!(t.apply_point(&p), p, epsilon = 1e-12);
    }

    #[test]
    fn translation_moves_points() {
        let t = Transform::translation(10.0, 20.0, 30.0);
        let p = t.apply_point(&Point3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(p, Point3::new(11.0, 22.0, 33.0), epsilon = 1e-12);
    }

    #[test]
    fn translation_ignores_vectors() {
        let t = Transform::translation(10.0, 20.0, 30.0);
        let v = t.apply_vec(&Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(v, Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn rotation_z_quarter_turn() {
        let t = Transform::rotation_z(PI / 2.0);
        let p = t.apply_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Point3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn euler_single_axis_matches_axis_rotations() {
        let a = 0.7;
        assert_relative_eq!(
            rotation_from_euler(a, 0.0, 0.0),
            Transform::rotation_x(a).rotation(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            rotation_from_euler(0.0, a, 0.0),
            Transform::rotation_y(a).rotation(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            rotation_from_euler(0.0, 0.0, a),
            Transform::rotation_z(a).rotation(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn euler_degrees_matches_radians() {
        assert_relative_eq!(
            rotation_from_euler_degrees(90.0, 0.0, 0.0),
            rotation_from_euler(PI / 2.0, 0.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn compose_applies_right_transform_first() {
        let translate = Transform::translation(1.0, 0.0, 0.0);
        let scale = Transform::scale(2.0, 2.0, 2.0);
        // scale.then(translate) applies the translation first.
        let p = scale.then(&translate).apply_point(&Point3::origin());
        assert_relative_eq!(p.x, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn from_parts_packs_rotation_and_translation() {
        let r = rotation_from_euler(0.0, 0.0, PI / 2.0);
        let t = Transform::from_parts(r, Vec3::new(5.0, 0.0, 0.0));
        let p = t.apply_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p, Point3::new(5.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn inverse_round_trips() {
        let t = Transform::translation(1.0, 2.0, 3.0).then(&Transform::rotation_y(0.3));
        let inv = t.inverse().unwrap();
        let p = Point3::new(5.0, 6.0, 7.0);
        let round = inv.apply_point(&t.apply_point(&p));
        assert_relative_eq!(round, p, epsilon = 1e-12);
    }
}
