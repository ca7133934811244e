pub mod bernstein;
pub mod easing;

use crate::error::{HumanCurveError, Result};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Returns `true` if both coordinates of `p` are finite.
#[must_use]
pub fn is_finite_point(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Checks that `points` is a usable path: at least two entries, all finite.
///
/// `what` names the sequence in the error message.
///
/// # Errors
///
/// Returns `HumanCurveError::InvalidInput` if the sequence is too short or
/// holds a non-finite coordinate.
pub fn validate_path(points: &[Point2], what: &str) -> Result<()> {
    if points.len() < 2 {
        return Err(HumanCurveError::invalid(format!(
            "{what} must contain at least 2 points, got {}",
            points.len()
        )));
    }
    if let Some(i) = points.iter().position(|p| !is_finite_point(p)) {
        return Err(HumanCurveError::invalid(format!(
            "{what} has a non-finite coordinate at index {i}"
        )));
    }
    Ok(())
}

/// Euclidean distance between `a` and `b`, clipped to `[0, max]`.
#[must_use]
pub fn clipped_distance(a: &Point2, b: &Point2, max: f64) -> f64 {
    nalgebra::distance(a, b).clamp(0.0, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_path_accepts_two_points() {
        let pts = [Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)];
        assert!(validate_path(&pts, "path").is_ok());
    }

    #[test]
    fn validate_path_rejects_short() {
        let err = validate_path(&[Point2::new(0.0, 0.0)], "path").unwrap_err();
        assert!(matches!(err, HumanCurveError::InvalidInput(_)));
    }

    #[test]
    fn validate_path_rejects_nan() {
        let pts = [Point2::new(0.0, 0.0), Point2::new(f64::NAN, 1.0)];
        let err = validate_path(&pts, "path").unwrap_err();
        assert_eq!(
            err,
            HumanCurveError::InvalidInput("path has a non-finite coordinate at index 1".into())
        );
    }

    #[test]
    fn clipped_distance_caps_at_max() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert!((clipped_distance(&a, &b, 100.0) - 5.0).abs() < 1e-12);
        assert!((clipped_distance(&a, &b, 2.0) - 2.0).abs() < 1e-12);
    }
}
