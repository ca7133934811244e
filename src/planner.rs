//! Per-move parameter selection.
//!
//! Longer moves get more points, every move gets a slightly different curve
//! order, noise level and point count, and the destination is picked at
//! random inside the target rectangle rather than at its exact center.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use tracing::debug;

use crate::error::{HumanCurveError, Result};
use crate::math::{clipped_distance, Point2};
use crate::trajectory::{GenerationConfig, HumanCurve};

/// Point count bias added on top of the distance-scaled count.
const BIAS_VALUES: [i64; 6] = [-2, -1, 0, 1, 2, 3];
const BIAS_WEIGHTS: [f64; 6] = [0.05, 0.15, 0.5, 0.15, 0.1, 0.05];

/// Inclusive bounds on the number of points per generated path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointBudget {
    pub min_points: usize,
    pub max_points: usize,
}

impl Default for PointBudget {
    fn default() -> Self {
        Self {
            min_points: 30,
            max_points: 120,
        }
    }
}

impl PointBudget {
    /// Checks `2 <= min_points <= max_points`.
    ///
    /// # Errors
    ///
    /// Returns `HumanCurveError::InvalidInput` if the bounds are out of order
    /// or below 2.
    pub fn validate(&self) -> Result<()> {
        if self.min_points < 2 {
            return Err(HumanCurveError::invalid(format!(
                "min_points must be at least 2, got {}",
                self.min_points
            )));
        }
        if self.min_points > self.max_points {
            return Err(HumanCurveError::invalid(format!(
                "min_points {} exceeds max_points {}",
                self.min_points, self.max_points
            )));
        }
        Ok(())
    }
}

/// Screen rectangle a move should land in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl TargetRect {
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Draws an integer point strictly inside the rectangle, one unit clear of
    /// every edge.
    ///
    /// # Errors
    ///
    /// Returns `HumanCurveError::InvalidInput` if a coordinate is non-finite or
    /// the rectangle has no such interior point.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn pick_destination<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Point2> {
        let all = [self.left, self.top, self.right, self.bottom];
        if !all.iter().all(|v| v.is_finite()) {
            return Err(HumanCurveError::invalid("target rectangle must be finite"));
        }
        let (x0, x1) = (self.left as i64 + 1, self.right as i64 - 1);
        let (y0, y1) = (self.top as i64 + 1, self.bottom as i64 - 1);
        if x0 >= x1 || y0 >= y1 {
            return Err(HumanCurveError::invalid(format!(
                "target rectangle {self:?} is too small to pick a destination"
            )));
        }
        Ok(Point2::new(
            rng.gen_range(x0..x1) as f64,
            rng.gen_range(y0..y1) as f64,
        ))
    }
}

/// A generated move: where it ends and the points leading there.
#[derive(Debug, Clone)]
pub struct PlannedMove {
    pub destination: Point2,
    pub points: Vec<Point2>,
}

/// Chooses generation parameters per move from its length.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovePlanner {
    budget: PointBudget,
}

impl MovePlanner {
    /// Creates a planner with the given point budget.
    ///
    /// # Errors
    ///
    /// Returns `HumanCurveError::InvalidInput` if the budget is invalid.
    pub fn new(budget: PointBudget) -> Result<Self> {
        budget.validate()?;
        Ok(Self { budget })
    }

    /// Returns the point budget.
    #[must_use]
    pub fn budget(&self) -> PointBudget {
        self.budget
    }

    /// Builds a [`GenerationConfig`] for a move from `from` to `to`.
    ///
    /// The point count scales linearly with the move length, clipped to
    /// `viewport_height`, across the budget range, then gets a small weighted
    /// random bias. Knot count and distortion mean are drawn per move.
    ///
    /// # Errors
    ///
    /// Returns `HumanCurveError::InvalidInput` if `viewport_height` is not a
    /// positive finite number.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn plan<R: Rng + ?Sized>(
        &self,
        from: &Point2,
        to: &Point2,
        viewport_height: f64,
        rng: &mut R,
    ) -> Result<GenerationConfig> {
        if !(viewport_height.is_finite() && viewport_height > 0.0) {
            return Err(HumanCurveError::invalid(format!(
                "viewport height must be positive, got {viewport_height}"
            )));
        }
        let PointBudget {
            min_points,
            max_points,
        } = self.budget;

        let knots_count: usize = rng.gen_range(1..=3);

        let distance = clipped_distance(from, to, viewport_height);
        let base = (distance / viewport_height * (max_points - min_points) as f64
            + min_points as f64) as i64;
        let bias = WeightedIndex::new(BIAS_WEIGHTS)
            .map(|w| BIAS_VALUES[w.sample(rng)])
            .map_err(|e| HumanCurveError::invalid(format!("point bias weights: {e}")))?;
        let target_points = (base + bias).clamp(min_points as i64, max_points as i64) as usize;

        let distortion_mean = f64::from(rng.gen_range(5u8..20)) / 10.0;

        debug!(
            distance,
            knots_count, target_points, distortion_mean, "planned move"
        );

        Ok(GenerationConfig {
            knots_count,
            target_points,
            interpolation_steps: Some(target_points / 2 + 1),
            distortion_mean,
            ..GenerationConfig::default()
        })
    }

    /// Picks a destination inside `target`, plans the move and generates it.
    ///
    /// # Errors
    ///
    /// Returns `HumanCurveError::InvalidInput` if the rectangle, the viewport
    /// height or the start point is invalid.
    pub fn plan_move<R: Rng + ?Sized>(
        &self,
        from: Point2,
        target: &TargetRect,
        viewport_height: f64,
        rng: &mut R,
    ) -> Result<PlannedMove> {
        let destination = target.pick_destination(rng)?;
        let config = self.plan(&from, &destination, viewport_height, rng)?;
        let points = HumanCurve::generate_with_rng(from, destination, &config, rng)?;
        Ok(PlannedMove {
            destination,
            points,
        })
    }
}
