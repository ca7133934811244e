use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::{HumanCurveError, Result};
use crate::geometry::{BezierCurve, Curve};
use crate::math::easing::{self, EaseFn};
use crate::math::{is_finite_point, Point2};
use crate::operations::{
    DensityResample, Distort, DistortionParams, KnotRegion, KnotSampler, TweenResample,
};

/// Range `interpolation_steps` is drawn from when left unset.
const DEFAULT_STEP_RANGE: std::ops::Range<usize> = 5..20;

/// Largest base path the generator will sample. Endpoints further apart than
/// this along either axis are rejected rather than allocated.
pub const MAX_BASE_SAMPLES: usize = 1 << 20;

/// Parameters controlling path generation.
///
/// Boundary fields default to the bounding box of the endpoints; the offsets
/// are applied on top of explicit boundaries as well.
#[derive(Debug, Clone, Copy)]
pub struct GenerationConfig {
    /// Number of random interior control points.
    pub knots_count: usize,
    /// Exact number of points in the generated path (at least 2).
    pub target_points: usize,
    /// Number of checkpoint draws for density resampling. `None` draws a
    /// value from `[5, 20)`.
    pub interpolation_steps: Option<usize>,
    /// Horizontal margin added around the knot region.
    pub offset_x: f64,
    /// Vertical margin added around the knot region.
    pub offset_y: f64,
    /// Lower x bound of the knot region. `None` uses the smaller endpoint x.
    pub left: Option<f64>,
    /// Upper x bound of the knot region. `None` uses the larger endpoint x.
    pub right: Option<f64>,
    /// Lower y bound of the knot region. `None` uses the smaller endpoint y.
    pub down: Option<f64>,
    /// Upper y bound of the knot region. `None` uses the larger endpoint y.
    pub up: Option<f64>,
    /// Mean of the distortion offset magnitude.
    pub distortion_mean: f64,
    /// Standard deviation of the distortion offset magnitude (at least 0).
    pub distortion_std_dev: f64,
    /// Per-axis probability of jittering an interior point, in `[0, 1]`.
    pub distortion_frequency: f64,
    /// Velocity profile.
    pub easing: EaseFn,
    /// Fixed seed for reproducible output. `None` derives one from the clock
    /// and the endpoints.
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            knots_count: 2,
            target_points: 100,
            interpolation_steps: None,
            offset_x: 100.0,
            offset_y: 100.0,
            left: None,
            right: None,
            down: None,
            up: None,
            distortion_mean: 1.0,
            distortion_std_dev: 1.0,
            distortion_frequency: 0.5,
            easing: easing::quad_out,
            seed: None,
        }
    }
}

impl GenerationConfig {
    /// Distortion parameters as a stage input.
    #[must_use]
    pub fn distortion(&self) -> DistortionParams {
        DistortionParams {
            mean: self.distortion_mean,
            std_dev: self.distortion_std_dev,
            frequency: self.distortion_frequency,
        }
    }

    /// Knot region for a move from `from` to `to`.
    #[must_use]
    pub fn knot_region(&self, from: &Point2, to: &Point2) -> KnotRegion {
        KnotRegion::new(
            self.left.unwrap_or(from.x.min(to.x)) - self.offset_x,
            self.right.unwrap_or(from.x.max(to.x)) + self.offset_x,
            self.down.unwrap_or(from.y.min(to.y)) - self.offset_y,
            self.up.unwrap_or(from.y.max(to.y)) + self.offset_y,
        )
    }

    /// Checks every parameter for a move from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns `HumanCurveError::InvalidInput` on non-finite endpoints or
    /// offsets, an invalid knot region, invalid distortion parameters, or
    /// `target_points < 2`.
    pub fn validate(&self, from: &Point2, to: &Point2) -> Result<()> {
        if !is_finite_point(from) || !is_finite_point(to) {
            return Err(HumanCurveError::invalid("endpoints must be finite"));
        }
        if !(self.offset_x.is_finite() && self.offset_y.is_finite()) {
            return Err(HumanCurveError::invalid("boundary offsets must be finite"));
        }
        if self.target_points < 2 {
            return Err(HumanCurveError::invalid(format!(
                "target_points must be at least 2, got {}",
                self.target_points
            )));
        }
        self.knot_region(from, to).validate()?;
        self.distortion().validate()
    }
}

/// Human-like cursor path generator.
///
/// Runs the full pipeline: random knots, Bezier base path, density
/// resampling, distortion and easing-driven resampling.
///
/// ```
/// use humancurve::{GenerationConfig, HumanCurve, Point2};
///
/// let config = GenerationConfig { seed: Some(7), ..GenerationConfig::default() };
/// let path = HumanCurve::generate(Point2::new(10.0, 20.0), Point2::new(400.0, 300.0), &config)?;
/// assert_eq!(path.len(), 100);
/// assert_eq!(path[0], Point2::new(10.0, 20.0));
/// assert_eq!(path[99], Point2::new(400.0, 300.0));
/// # Ok::<(), humancurve::HumanCurveError>(())
/// ```
pub struct HumanCurve;

impl HumanCurve {
    /// Generates a path from `from` to `to`.
    ///
    /// Uses `config.seed` when set, otherwise [`derive_seed`] with the current
    /// clock. Each call owns its generator.
    ///
    /// # Errors
    ///
    /// Returns `HumanCurveError::InvalidInput` if the configuration or the
    /// endpoints are invalid.
    pub fn generate(from: Point2, to: Point2, config: &GenerationConfig) -> Result<Vec<Point2>> {
        let seed = config
            .seed
            .unwrap_or_else(|| derive_seed(clock_micros(), &from, &to));
        debug!(seed, "seeding path generator");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::generate_with_rng(from, to, config, &mut rng)
    }

    /// Generates a path drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    ///
    /// # Errors
    ///
    /// Returns `HumanCurveError::InvalidInput` if the configuration or the
    /// endpoints are invalid.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        from: Point2,
        to: Point2,
        config: &GenerationConfig,
        rng: &mut R,
    ) -> Result<Vec<Point2>> {
        config.validate(&from, &to)?;

        let steps = config
            .interpolation_steps
            .unwrap_or_else(|| rng.gen_range(DEFAULT_STEP_RANGE));

        let knots =
            KnotSampler::new(config.knot_region(&from, &to), config.knots_count).execute(rng)?;
        let mut controls = Vec::with_capacity(knots.len() + 2);
        controls.push(from);
        controls.extend(knots);
        controls.push(to);

        let curve = BezierCurve::new(controls)?;
        let base = curve.sample(midpoint_count(&from, &to)?)?;
        let varied = DensityResample::new(&base, steps).execute(rng)?;
        let distorted = Distort::new(&varied, config.distortion()).execute(rng)?;
        let points = TweenResample::new(&distorted, config.easing, config.target_points).execute()?;

        debug!(
            degree = curve.degree(),
            steps,
            base = base.len(),
            varied = varied.len(),
            output = points.len(),
            "generated path"
        );
        Ok(points)
    }
}

/// Number of Bezier samples for the base path: the larger axis distance,
/// rounded up, and at least 2. Capped at [`MAX_BASE_SAMPLES`].
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn midpoint_count(from: &Point2, to: &Point2) -> Result<usize> {
    let span = (from.x - to.x).abs().max((from.y - to.y).abs()).max(2.0).ceil();
    if span > MAX_BASE_SAMPLES as f64 {
        return Err(HumanCurveError::invalid(format!(
            "endpoints are too far apart ({span} samples, at most {MAX_BASE_SAMPLES})"
        )));
    }
    Ok(span as usize)
}

/// Mixes a clock reading with the endpoint coordinates into a seed.
///
/// Successive calls with different endpoints decorrelate even when the clock
/// reading repeats. Not suitable for anything security related.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
pub fn derive_seed(clock_micros: u32, from: &Point2, to: &Point2) -> u64 {
    let fx = from.x as i64;
    let fy = from.y as i64;
    let tx = to.x as i64;
    let ty = to.y as i64;
    let mixed = i64::from(clock_micros)
        .wrapping_sub(fy.wrapping_mul(tx))
        .wrapping_add(fx & ty);
    (mixed as u64) ^ from.x.to_bits().rotate_left(17) ^ to.y.to_bits().rotate_left(41)
}

/// Sub-second part of the wall clock in microseconds.
fn clock_micros() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.subsec_micros())
}
