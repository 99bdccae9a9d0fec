//! Least-squares fitting over 3D point clouds.
//!
//! Rigid (rotation + translation) alignment between two paired point sets
//! via SVD of the cross-covariance matrix, and best-fit plane estimation
//! via the normal equations.

use thiserror::Error;

use crate::{Mat3, Point3, Transform, Vec3};

/// Errors from point-cloud fitting.
#[derive(Error, Debug)]
pub enum FitError {
    /// The two point sets are not the same size.
    #[error("point sets must be paired: got {0} and {1} points")]
    UnpairedPoints(usize, usize),

    /// Not enough points to constrain the fit.
    #[error("need at least {needed} points, got {got}")]
    TooFewPoints {
        /// Minimum number of points for this fit.
        needed: usize,
        /// Number of points supplied.
        got: usize,
    },

    /// The SVD iteration failed to converge.
    #[error("SVD did not converge")]
    NonConvergence,

    /// The normal-equation system is singular (degenerate input).
    #[error("degenerate input: {0}")]
    Degenerate(String),
}

/// Result type for fitting operations.
pub type Result<T> = std::result::Result<T, FitError>;

/// Centroid of a point cloud.
///
/// Returns the origin for an empty slice.
pub fn centroid(points: &[Point3]) -> Point3 {
    if points.is_empty() {
        return Point3::origin();
    }
    let sum = points
        .iter()
        .fold(Vec3::zeros(), |acc, p| acc + p.coords);
    Point3::from(sum / points.len() as f64)
}

/// Rigid transform (rotation + translation) mapping `orig` onto `moved`.
///
/// Kabsch-style fit: both clouds are centered on their centroids, the
/// 3x3 cross-covariance matrix is decomposed by SVD, and the rotation is
/// recovered as `V * U^T`. The translation follows from the centroids.
/// Apply the returned transform to `orig` points to land on `moved`
/// points, or invert it for the reverse mapping.
///
/// Known limitation: when the best orthogonal alignment is a reflection
/// (det = -1, possible for planar or noisy clouds) the result is not
/// corrected back to a proper rotation.
pub fn rigid_transform_between(orig: &[Point3], moved: &[Point3]) -> Result<Transform> {
    if orig.len() != moved.len() {
        return Err(FitError::UnpairedPoints(orig.len(), moved.len()));
    }
    if orig.len() < 3 {
        return Err(FitError::TooFewPoints {
            needed: 3,
            got: orig.len(),
        });
    }

    let c_orig = centroid(orig);
    let c_moved = centroid(moved);

    // Cross-covariance of the centered clouds.
    let mut h = Mat3::zeros();
    for (a, b) in orig.iter().zip(moved.iter()) {
        h += (a - c_orig) * (b - c_moved).transpose();
    }

    let svd = h
        .try_svd(true, true, 1.0e-12, 250)
        .ok_or(FitError::NonConvergence)?;
    let u = svd.u.ok_or(FitError::NonConvergence)?;
    let v = svd.v_t.ok_or(FitError::NonConvergence)?.transpose();

    let r = v * u.transpose();
    let t = c_moved.coords - r * c_orig.coords;
    Ok(Transform::from_parts(r, t))
}

/// Best-fit plane `z = a*x + b*y + c` through a point cloud.
///
/// Returns the coefficient vector `[a, b, c]`. Solves the 3x3 normal
/// equations by LU decomposition; collinear or otherwise rank-deficient
/// input makes the system singular.
pub fn best_fit_plane(points: &[Point3]) -> Result<Vec3> {
    if points.len() < 3 {
        return Err(FitError::TooFewPoints {
            needed: 3,
            got: points.len(),
        });
    }

    let mut a = Mat3::zeros();
    let mut b = Vec3::zeros();
    for p in points {
        a += Mat3::new(
            p.x * p.x, p.x * p.y, p.x, //
            p.x * p.y, p.y * p.y, p.y, //
            p.x, p.y, 1.0,
        );
        b += Vec3::new(p.x * p.z, p.y * p.z, p.z);
    }

    a.lu()
        .solve(&b)
        .ok_or_else(|| FitError::Degenerate("points do not span a plane".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn sample_cloud() -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
            Point3::new(0.0, 0.0, 3.0),
            Point3::new(1.0, 1.0, 1.0),
        ]
    }

    #[test]
    fn rigid_fit_recovers_known_motion() {
        let orig = sample_cloud();
        let motion = Transform::translation(4.0, -2.0, 1.0).then(&Transform::rotation_z(PI / 6.0));
        let moved: Vec<Point3> = orig.iter().map(|p| motion.apply_point(p)).collect();

        let fitted = rigid_transform_between(&orig, &moved).unwrap();
        for (a, b) in orig.iter().zip(moved.iter()) {
            assert_relative_eq!(fitted.apply_point(a), *b, epsilon = 1e-9);
        }
    }

    #[test]
    fn rigid_fit_inverse_maps_back() {
        let orig = sample_cloud();
        let motion = Transform::rotation_x(0.4).then(&Transform::translation(0.5, 0.5, -3.0));
        let moved: Vec<Point3> = orig.iter().map(|p| motion.apply_point(p)).collect();

        let fitted = rigid_transform_between(&orig, &moved).unwrap();
        let back = fitted.inverse().unwrap();
        for (a, b) in orig.iter().zip(moved.iter()) {
            assert_relative_eq!(back.apply_point(b), *a, epsilon = 1e-9);
        }
    }

    #[test]
    fn rigid_fit_rejects_unpaired_sets() {
        let orig = sample_cloud();
        let moved = &orig[..3];
        assert!(matches!(
            rigid_transform_between(&orig, moved),
            Err(FitError::UnpairedPoints(5, 3))
        ));
    }

    #[test]
    fn plane_fit_recovers_exact_coefficients() {
        // z = 2x + 3y + 4
        let points = vec![
            Point3::new(0.0, 0.0, 4.0),
            Point3::new(1.0, 0.0, 6.0),
            Point3::new(0.0, 1.0, 7.0),
            Point3::new(1.0, 1.0, 9.0),
            Point3::new(2.0, 1.0, 11.0),
        ];
        let coeffs = best_fit_plane(&points).unwrap();
        assert_relative_eq!(coeffs, Vec3::new(2.0, 3.0, 4.0), epsilon = 1e-9);
    }

    #[test]
    fn plane_fit_rejects_collinear_points() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
            Point3::new(3.0, 3.0, 3.0),
        ];
        assert!(best_fit_plane(&points).is_err());
    }

    #[test]
    fn centroid_of_cube_corners() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
            Point3::new(2.0, 2.0, 2.0),
        ];
        assert_relative_eq!(centroid(&points), Point3::new(1.0, 1.0, 0.5), epsilon = 1e-12);
    }
}
