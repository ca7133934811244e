mod bezier;

pub use bezier::BezierCurve;

use crate::error::{HumanCurveError, Result};
use crate::math::{Point2, Vector2};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Returns whether `t` lies inside the domain (inclusive).
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.t_min && t <= self.t_max
    }
}

/// Trait for parametric curves in the plane.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 2D point.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is out of range or evaluation fails.
    fn evaluate(&self, t: f64) -> Result<Point2>;

    /// Computes the (unnormalized) derivative at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is out of range.
    fn tangent(&self, t: f64) -> Result<Vector2>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Samples `count` points at evenly spaced parameters spanning the whole
    /// domain, endpoints included.
    ///
    /// # Errors
    ///
    /// Returns `HumanCurveError::InvalidInput` if `count < 2`.
    fn sample(&self, count: usize) -> Result<Vec<Point2>> {
        if count < 2 {
            return Err(HumanCurveError::invalid(format!(
                "sample count must be at least 2, got {count}"
            )));
        }
        let CurveDomain { t_min, t_max } = self.domain();
        #[allow(clippy::cast_precision_loss)]
        let last = (count - 1) as f64;
        (0..count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let s = i as f64 / last;
                self.evaluate(t_min + (t_max - t_min) * s)
            })
            .collect()
    }
}
