//! Angle utilities in degrees.

/// Normalize an angle in degrees to the half-open range (-180, 180].
pub fn normalize(mut angle: f64) -> f64 {
    while angle <= -180.0 {
        angle += 360.0;
    }
    while angle > 180.0 {
        angle -= 360.0;
    }
    angle
}

/// Signed sweep in degrees from `start` to `end`, folded to (-360, 360).
pub fn angle_between(start: f64, end: f64) -> f64 {
    (end - start) % 360.0
}

/// Whether `test` lies on the sweep from `start` to `end` (degrees).
///
/// Holds when the sweeps start->test and test->end add up exactly to the
/// full start->end sweep.
pub fn is_inside_range(test: f64, start: f64, end: f64) -> bool {
    let a1 = angle_between(start, test).abs();
    let a2 = angle_between(test, end).abs();
    let a3 = angle_between(start, end).abs();
    a1 + a2 == a3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_into_half_open_range() {
        assert_eq!(normalize(270.0), -90.0);
        assert_eq!(normalize(-270.0), 90.0);
        assert_eq!(normalize(180.0), 180.0);
        assert_eq!(normalize(-180.0), 180.0);
        assert_eq!(normalize(720.0), 0.0);
    }

    #[test]
    fn angle_between_keeps_sign() {
        assert_eq!(angle_between(10.0, 50.0), 40.0);
        assert_eq!(angle_between(50.0, 10.0), -40.0);
        assert_eq!(angle_between(0.0, 400.0), 40.0);
    }

    #[test]
    fn inside_range_detects_membership() {
        assert!(is_inside_range(45.0, 0.0, 90.0));
        assert!(is_inside_range(0.0, 0.0, 90.0));
        assert!(is_inside_range(90.0, 0.0, 90.0));
        assert!(!is_inside_range(135.0, 0.0, 90.0));
    }
}
