use crate::error::{HumanCurveError, Result};
use crate::math::bernstein::{bernstein, de_casteljau};
use crate::math::{validate_path, Point2, Vector2};

use super::{Curve, CurveDomain};

/// Highest degree evaluated with the direct Bernstein blend. `C(1000, 500)`
/// is still finite; degrees past ~1020 overflow.
pub const MAX_BLEND_DEGREE: u32 = 1000;

/// A Bezier curve of arbitrary degree.
///
/// The parametric form over `t ∈ [0, 1]` is the Bernstein blend
/// `P(t) = Σ P_j · C(n, j) · t^j · (1 - t)^(n - j)` with `n = len - 1`.
/// The curve passes through the first control point at `t = 0` and the
/// last at `t = 1`; interior control points only pull on it.
///
/// Above [`MAX_BLEND_DEGREE`] the binomial weights overflow `f64`, so the
/// curve is evaluated with de Casteljau's algorithm instead.
#[derive(Debug, Clone)]
pub struct BezierCurve {
    controls: Vec<Point2>,
    degree: u32,
}

impl BezierCurve {
    /// Creates a curve from an ordered control-point sequence.
    ///
    /// # Errors
    ///
    /// Returns `HumanCurveError::InvalidInput` if fewer than 2 control points
    /// are given or any coordinate is non-finite.
    pub fn new(controls: Vec<Point2>) -> Result<Self> {
        validate_path(&controls, "control points")?;
        let degree = u32::try_from(controls.len() - 1)
            .map_err(|_| HumanCurveError::invalid("too many control points"))?;
        Ok(Self { controls, degree })
    }

    /// Evaluates the curve defined by `controls` at `count` evenly spaced
    /// parameters `t_i = i / (count - 1)`.
    ///
    /// # Errors
    ///
    /// Returns `HumanCurveError::InvalidInput` if `count < 2`, fewer than 2
    /// control points are given, or a control coordinate is non-finite.
    pub fn sample_controls(controls: &[Point2], count: usize) -> Result<Vec<Point2>> {
        Self::new(controls.to_vec())?.sample(count)
    }

    /// Returns the control points.
    #[must_use]
    pub fn controls(&self) -> &[Point2] {
        &self.controls
    }

    /// Returns the degree (number of control points minus one).
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    fn check_parameter(&self, t: f64) -> Result<()> {
        if self.domain().contains(t) {
            Ok(())
        } else {
            Err(HumanCurveError::invalid(format!(
                "curve parameter t = {t} is out of range [0, 1]"
            )))
        }
    }
}

impl Curve for BezierCurve {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        self.check_parameter(t)?;
        let n = self.degree;
        if n > MAX_BLEND_DEGREE {
            let coords: Vec<Vector2> = self.controls.iter().map(|p| p.coords).collect();
            return Ok(Point2::from(de_casteljau(&coords, t)));
        }
        let sum = self
            .controls
            .iter()
            .zip(0..=n)
            .fold(Vector2::zeros(), |acc, (p, j)| {
                acc + p.coords * bernstein(n, j, t)
            });
        Ok(Point2::from(sum))
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        self.check_parameter(t)?;
        let n = self.degree;
        let sum = if n - 1 > MAX_BLEND_DEGREE {
            let diffs: Vec<Vector2> = self.controls.windows(2).map(|w| w[1] - w[0]).collect();
            de_casteljau(&diffs, t)
        } else {
            self.controls
                .windows(2)
                .zip(0..n)
                .fold(Vector2::zeros(), |acc, (w, j)| {
                    acc + (w[1] - w[0]) * bernstein(n - 1, j, t)
                })
        };
        Ok(sum * f64::from(n))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn quad() -> BezierCurve {
        BezierCurve::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(50.0, 100.0),
            Point2::new(100.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn straight_line_three_samples() {
        let pts =
            BezierCurve::sample_controls(&[Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)], 3)
                .unwrap();
        assert_eq!(
            pts,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(5.0, 0.0),
                Point2::new(10.0, 0.0)
            ]
        );
    }

    #[test]
    fn two_samples_are_the_end_controls() {
        let controls = [
            Point2::new(-3.5, 7.25),
            Point2::new(40.0, -12.0),
            Point2::new(13.0, 99.0),
            Point2::new(120.75, 4.5),
        ];
        let pts = BezierCurve::sample_controls(&controls, 2).unwrap();
        assert_eq!(pts, vec![controls[0], controls[3]]);
    }

    #[test]
    fn sample_returns_requested_count() {
        let curve = quad();
        for n in [2, 3, 17, 250] {
            let pts = curve.sample(n).unwrap();
            assert_eq!(pts.len(), n);
            assert_eq!(pts[0], Point2::new(0.0, 0.0));
            assert_eq!(pts[n - 1], Point2::new(100.0, 0.0));
        }
    }

    #[test]
    fn quadratic_midpoint() {
        // B(0.5) = 0.25*P0 + 0.5*P1 + 0.25*P2
        let p = quad().evaluate(0.5).unwrap();
        assert_relative_eq!(p.x, 50.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 50.0, epsilon = 1e-12);
    }

    #[test]
    fn tangent_at_ends_points_to_neighbour_controls() {
        let curve = quad();
        let t0 = curve.tangent(0.0).unwrap();
        assert_relative_eq!(t0.x, 100.0, epsilon = 1e-12);
        assert_relative_eq!(t0.y, 200.0, epsilon = 1e-12);
        let t1 = curve.tangent(1.0).unwrap();
        assert_relative_eq!(t1.x, 100.0, epsilon = 1e-12);
        assert_relative_eq!(t1.y, -200.0, epsilon = 1e-12);
    }

    #[test]
    fn high_degree_curve_stays_finite() {
        let controls: Vec<Point2> = (0..40)
            .map(|i| Point2::new(f64::from(i) * 10.0, f64::from(i % 3) * 25.0))
            .collect();
        let pts = BezierCurve::sample_controls(&controls, 64).unwrap();
        assert!(pts.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn very_high_degree_curve_stays_finite() {
        let controls: Vec<Point2> = (0..1201)
            .map(|i| Point2::new(f64::from(i) * 0.25, f64::from(i % 5) * 40.0))
            .collect();
        let curve = BezierCurve::new(controls.clone()).unwrap();
        assert_eq!(curve.degree(), 1200);
        let pts = curve.sample(50).unwrap();
        assert_eq!(pts.len(), 50);
        assert_eq!(pts[0], controls[0]);
        assert_eq!(pts[49], controls[1200]);
        for p in &pts {
            assert!(p.x.is_finite() && p.y.is_finite(), "{p:?}");
            assert!((-1e-9..=300.0 + 1e-9).contains(&p.x));
            assert!((-1e-9..=160.0 + 1e-9).contains(&p.y));
        }
        let tangent = curve.tangent(0.5).unwrap();
        assert!(tangent.x.is_finite() && tangent.y.is_finite());
    }

    #[test]
    fn blend_and_de_casteljau_agree_at_the_switch() {
        let controls: Vec<Point2> = (0..=MAX_BLEND_DEGREE)
            .map(|i| Point2::new(f64::from(i), f64::from(i % 4) * 10.0))
            .collect();
        let curve = BezierCurve::new(controls.clone()).unwrap();
        let coords: Vec<Vector2> = controls.iter().map(|p| p.coords).collect();
        for &t in &[0.1, 0.5, 0.9] {
            let p = curve.evaluate(t).unwrap();
            let q = de_casteljau(&coords, t);
            assert_relative_eq!(p.x, q.x, epsilon = 1e-6);
            assert_relative_eq!(p.y, q.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn rejects_single_control_point() {
        let err = BezierCurve::new(vec![Point2::new(1.0, 1.0)]).unwrap_err();
        assert!(matches!(err, HumanCurveError::InvalidInput(_)));
    }

    #[test]
    fn rejects_sample_count_below_two() {
        let err = quad().sample(1).unwrap_err();
        assert!(matches!(err, HumanCurveError::InvalidInput(_)));
        assert!(quad().sample(0).is_err());
    }

    #[test]
    fn rejects_parameter_outside_domain() {
        assert!(quad().evaluate(1.5).is_err());
        assert!(quad().evaluate(-0.1).is_err());
        assert!(quad().evaluate(f64::NAN).is_err());
    }
}
