use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::trace;

use crate::error::{HumanCurveError, Result};
use crate::math::{validate_path, Point2};

/// Parameters of the Gaussian jitter applied to interior points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistortionParams {
    /// Mean of the offset magnitude.
    pub mean: f64,
    /// Standard deviation of the offset magnitude.
    pub std_dev: f64,
    /// Per-axis probability that a point is offset at all, in `[0, 1]`.
    pub frequency: f64,
}

impl Default for DistortionParams {
    fn default() -> Self {
        Self {
            mean: 1.0,
            std_dev: 1.0,
            frequency: 0.5,
        }
    }
}

impl DistortionParams {
    /// Checks that the parameters describe a valid distribution.
    ///
    /// # Errors
    ///
    /// Returns `HumanCurveError::InvalidInput` on non-finite values, a
    /// negative standard deviation, or a frequency outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if !(self.mean.is_finite() && self.std_dev.is_finite() && self.frequency.is_finite()) {
            return Err(HumanCurveError::invalid(
                "distortion parameters must be finite",
            ));
        }
        if self.std_dev < 0.0 {
            return Err(HumanCurveError::invalid(format!(
                "distortion standard deviation must be >= 0, got {}",
                self.std_dev
            )));
        }
        if !(0.0..=1.0).contains(&self.frequency) {
            return Err(HumanCurveError::invalid(format!(
                "distortion frequency must be in [0, 1], got {}",
                self.frequency
            )));
        }
        Ok(())
    }
}

/// Adds random positional noise to the interior points of a path.
///
/// For each interior point and each axis independently, with probability
/// `frequency` a magnitude is drawn from `N(mean, std_dev)`, otherwise the
/// magnitude is zero. The y offset gets a sign from `{-1, +1}`; the x offset
/// from `{-1, 0, +1}`, so horizontal noise is rarer than vertical noise.
/// The first and last points are returned untouched.
#[derive(Debug)]
pub struct Distort<'a> {
    points: &'a [Point2],
    params: DistortionParams,
}

impl<'a> Distort<'a> {
    /// Creates a new distortion operation.
    #[must_use]
    pub fn new(points: &'a [Point2], params: DistortionParams) -> Self {
        Self { points, params }
    }

    /// Executes the distortion.
    ///
    /// # Errors
    ///
    /// Returns `HumanCurveError::InvalidInput` if the parameters or the input
    /// path are invalid.
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Point2>> {
        self.params.validate()?;
        validate_path(self.points, "distortion input")?;

        let normal = Normal::new(self.params.mean, self.params.std_dev)
            .map_err(|e| HumanCurveError::invalid(format!("distortion distribution: {e}")))?;
        let frequency = self.params.frequency;

        let n = self.points.len();
        let mut out = Vec::with_capacity(n);
        out.push(self.points[0]);
        let mut moved = 0usize;
        for p in &self.points[1..n - 1] {
            let dy = if rng.gen_bool(frequency) {
                normal.sample(rng)
            } else {
                0.0
            };
            let dx = if rng.gen_bool(frequency) {
                normal.sample(rng)
            } else {
                0.0
            };
            let sign_y = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            let sign_x = f64::from(rng.gen_range(-1i8..=1));
            let q = Point2::new(p.x + dx * sign_x, p.y + dy * sign_y);
            if q != *p {
                moved += 1;
            }
            out.push(q);
        }
        out.push(self.points[n - 1]);

        trace!(points = n, moved, "distortion");
        Ok(out)
    }
}
