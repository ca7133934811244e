use crate::error::{HumanCurveError, Result};
use crate::math::{validate_path, Point2};

/// Picks a fixed number of points from a path with easing-driven spacing.
///
/// Output point `i` is `points[floor(ease(i / (target - 1)) * (len - 1))]`.
/// Where the easing curve is flat, consecutive outputs repeat the same source
/// point; where it is steep, source points are skipped. This is what turns a
/// path into a velocity profile. Indices from overshooting curves are clamped
/// into the path.
pub struct TweenResample<'a, F> {
    points: &'a [Point2],
    ease: F,
    target: usize,
}

impl<'a, F> TweenResample<'a, F>
where
    F: Fn(f64) -> f64,
{
    /// Creates a new tween resampling operation.
    #[must_use]
    pub fn new(points: &'a [Point2], ease: F, target: usize) -> Self {
        Self {
            points,
            ease,
            target,
        }
    }

    /// Executes the resampling.
    ///
    /// # Errors
    ///
    /// Returns `HumanCurveError::InvalidInput` if the input path is invalid,
    /// `target < 2`, or the easing function returns a non-finite value.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn execute(&self) -> Result<Vec<Point2>> {
        validate_path(self.points, "tween input")?;
        if self.target < 2 {
            return Err(HumanCurveError::invalid(format!(
                "target point count must be at least 2, got {}",
                self.target
            )));
        }

        let last = self.points.len() - 1;
        let span = (self.target - 1) as f64;
        (0..self.target)
            .map(|i| {
                let eased = (self.ease)(i as f64 / span);
                if !eased.is_finite() {
                    return Err(HumanCurveError::invalid(format!(
                        "easing returned {eased} at step {i}"
                    )));
                }
                let index = (eased * last as f64).floor().max(0.0) as usize;
                Ok(self.points[index.min(last)])
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::easing::{self, Easing};

    fn ramp(n: usize) -> Vec<Point2> {
        (0..n).map(|i| Point2::new(i as f64, 0.0)).collect()
    }

    #[test]
    fn output_length_matches_target() {
        let pts = ramp(37);
        for target in [2, 3, 10, 100, 500] {
            let out = TweenResample::new(&pts, easing::quad_out, target)
                .execute()
                .unwrap();
            assert_eq!(out.len(), target);
            assert_eq!(out[0], pts[0]);
            assert_eq!(out[target - 1], pts[36]);
        }
    }

    #[test]
    fn linear_easing_uses_uniform_stride() {
        let pts = ramp(11);
        let out = TweenResample::new(&pts, easing::linear, 6).execute().unwrap();
        let xs: Vec<f64> = out.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn ease_out_front_loads_progress() {
        let pts = ramp(101);
        let out = TweenResample::new(&pts, easing::quad_out, 11)
            .execute()
            .unwrap();
        // quad_out(0.1) is about 0.19, so the first step covers ~19 samples.
        assert!((18.0..=19.0).contains(&out[1].x), "x={}", out[1].x);
        let first = out[1].x - out[0].x;
        let final_step = out[10].x - out[9].x;
        assert!(first > final_step);
    }

    #[test]
    fn upsampling_repeats_points() {
        let pts = ramp(3);
        let out = TweenResample::new(&pts, easing::linear, 9).execute().unwrap();
        assert_eq!(out.len(), 9);
        assert!(out.windows(2).any(|w| w[0] == w[1]));
    }

    #[test]
    fn overshooting_curves_stay_in_bounds() {
        let pts = ramp(50);
        for e in [Easing::BackIn, Easing::BackOut, Easing::ElasticOut] {
            let out = TweenResample::new(&pts, e.as_fn(), 80).execute().unwrap();
            assert_eq!(out[0], pts[0]);
            assert_eq!(out[79], pts[49]);
        }
    }

    #[test]
    fn accepts_closures() {
        let pts = ramp(5);
        let out = TweenResample::new(&pts, |t: f64| t.sqrt(), 3)
            .execute()
            .unwrap();
        assert_eq!(out[2], pts[4]);
    }

    #[test]
    fn rejects_target_below_two() {
        let pts = ramp(5);
        let err = TweenResample::new(&pts, easing::linear, 1)
            .execute()
            .unwrap_err();
        assert!(matches!(err, HumanCurveError::InvalidInput(_)));
    }

    #[test]
    fn rejects_non_finite_easing() {
        let pts = ramp(5);
        assert!(TweenResample::new(&pts, |_| f64::NAN, 4).execute().is_err());
    }
}
