use rand::Rng;

use crate::error::{HumanCurveError, Result};
use crate::math::Point2;

/// Axis-aligned region that interior knots are drawn from.
///
/// `down`/`up` bound the y axis; the naming follows screen-space callers
/// where "down" is the smaller y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnotRegion {
    pub left: f64,
    pub right: f64,
    pub down: f64,
    pub up: f64,
}

impl KnotRegion {
    /// Creates a region from its four boundaries.
    #[must_use]
    pub fn new(left: f64, right: f64, down: f64, up: f64) -> Self {
        Self {
            left,
            right,
            down,
            up,
        }
    }

    /// Bounding box of `a` and `b` grown by `offset_x` / `offset_y` on each side.
    #[must_use]
    pub fn around(a: &Point2, b: &Point2, offset_x: f64, offset_y: f64) -> Self {
        Self {
            left: a.x.min(b.x) - offset_x,
            right: a.x.max(b.x) + offset_x,
            down: a.y.min(b.y) - offset_y,
            up: a.y.max(b.y) + offset_y,
        }
    }

    /// Checks that all boundaries are finite and correctly ordered.
    ///
    /// # Errors
    ///
    /// Returns `HumanCurveError::InvalidInput` on a non-finite boundary,
    /// `left > right`, or `down > up`.
    pub fn validate(&self) -> Result<()> {
        let all = [self.left, self.right, self.down, self.up];
        if !all.iter().all(|v| v.is_finite()) {
            return Err(HumanCurveError::invalid("knot boundaries must be finite"));
        }
        if self.left > self.right {
            return Err(HumanCurveError::invalid(format!(
                "left boundary {} must be <= right boundary {}",
                self.left, self.right
            )));
        }
        if self.down > self.up {
            return Err(HumanCurveError::invalid(format!(
                "down boundary {} must be <= up boundary {}",
                self.down, self.up
            )));
        }
        Ok(())
    }
}

/// Draws random interior control points ("knots") inside a [`KnotRegion`].
///
/// Each coordinate is an integer drawn uniformly from the half-open range
/// `[low, high)` of its axis. Knots may repeat. The draw order is the order
/// the knots appear in the control polygon.
#[derive(Debug)]
pub struct KnotSampler {
    region: KnotRegion,
    count: usize,
}

impl KnotSampler {
    /// Creates a new knot sampling operation.
    #[must_use]
    pub fn new(region: KnotRegion, count: usize) -> Self {
        Self { region, count }
    }

    /// Executes the sampling.
    ///
    /// # Errors
    ///
    /// Returns `HumanCurveError::InvalidInput` if the region is invalid.
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Point2>> {
        self.region.validate()?;

        let xs: Vec<f64> = (0..self.count)
            .map(|_| draw_integer(self.region.left, self.region.right, rng))
            .collect();
        let ys: Vec<f64> = (0..self.count)
            .map(|_| draw_integer(self.region.down, self.region.up, rng))
            .collect();

        Ok(xs
            .into_iter()
            .zip(ys)
            .map(|(x, y)| Point2::new(x, y))
            .collect())
    }
}

/// Uniform integer in `[low, high)`. A range holding no integer collapses to
/// `low` itself.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn draw_integer<R: Rng + ?Sized>(low: f64, high: f64, rng: &mut R) -> f64 {
    let start = low.ceil() as i64;
    let end = high.ceil() as i64;
    if end > start {
        rng.gen_range(start..end) as f64
    } else {
        low
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn knots_stay_inside_region() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let region = KnotRegion::new(-100.0, 200.0, -100.0, 150.0);
        let knots = KnotSampler::new(region, 500).execute(&mut rng).unwrap();
        assert_eq!(knots.len(), 500);
        for k in &knots {
            assert!(k.x >= -100.0 && k.x < 200.0, "x={}", k.x);
            assert!(k.y >= -100.0 && k.y < 150.0, "y={}", k.y);
            assert_eq!(k.x.fract(), 0.0);
            assert_eq!(k.y.fract(), 0.0);
        }
    }

    #[test]
    fn zero_knots_is_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let region = KnotRegion::new(0.0, 10.0, 0.0, 10.0);
        assert!(KnotSampler::new(region, 0)
            .execute(&mut rng)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn degenerate_axis_collapses_to_boundary() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let region = KnotRegion::new(5.0, 5.0, -2.0, 8.0);
        let knots = KnotSampler::new(region, 10).execute(&mut rng).unwrap();
        assert!(knots.iter().all(|k| k.x == 5.0));
    }

    #[test]
    fn around_grows_bounding_box() {
        let r = KnotRegion::around(&Point2::new(10.0, 50.0), &Point2::new(0.0, 20.0), 100.0, 30.0);
        assert_eq!(r, KnotRegion::new(-100.0, 110.0, -10.0, 80.0));
    }

    #[test]
    fn rejects_left_greater_than_right() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let region = KnotRegion::new(10.0, 0.0, 0.0, 10.0);
        let err = KnotSampler::new(region, 2).execute(&mut rng).unwrap_err();
        assert!(matches!(err, HumanCurveError::InvalidInput(_)));
    }

    #[test]
    fn rejects_down_greater_than_up() {
        let region = KnotRegion::new(0.0, 10.0, 5.0, 4.0);
        assert!(region.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_boundary() {
        let region = KnotRegion::new(0.0, f64::INFINITY, 0.0, 4.0);
        assert!(region.validate().is_err());
        let region = KnotRegion::new(f64::NAN, 1.0, 0.0, 4.0);
        assert!(region.validate().is_err());
    }

    #[test]
    fn same_seed_same_knots() {
        let region = KnotRegion::new(0.0, 1000.0, 0.0, 1000.0);
        let a = KnotSampler::new(region, 4)
            .execute(&mut ChaCha8Rng::seed_from_u64(42))
            .unwrap();
        let b = KnotSampler::new(region, 4)
            .execute(&mut ChaCha8Rng::seed_from_u64(42))
            .unwrap();
        assert_eq!(a, b);
    }
}
