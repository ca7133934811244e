use std::collections::BTreeSet;

use rand::Rng;
use tracing::trace;

use crate::error::Result;
use crate::math::{validate_path, Point2};

/// Varies the local point density of a path while keeping its overall
/// progress from start to end.
///
/// # Algorithm
///
/// 1. Draw `steps` interior indices with replacement, deduplicate, append the
///    last index and sort. These checkpoints split the path into segments.
/// 2. For each segment `[prev, idx]`, flip a fair coin:
///    - **skip**: copy `points[prev..idx]` unchanged;
///    - **interpolate**: pick `m` in `[ceil(d / 2), d + 1]` with
///      `d = idx - prev` and emit `m` evenly spaced points on the chord from
///      `points[prev]` towards `points[idx]`, starting at `points[prev]`.
/// 3. Append the final point.
///
/// Every checkpoint appears exactly once in the output: as the first point of
/// the segment it opens, or as the closing point for the last index.
#[derive(Debug)]
pub struct DensityResample<'a> {
    points: &'a [Point2],
    steps: usize,
}

impl<'a> DensityResample<'a> {
    /// Creates a new density resampling operation.
    #[must_use]
    pub fn new(points: &'a [Point2], steps: usize) -> Self {
        Self { points, steps }
    }

    /// Executes the resampling.
    ///
    /// # Errors
    ///
    /// Returns `HumanCurveError::InvalidInput` if the input holds fewer than 2
    /// points or a non-finite coordinate.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Point2>> {
        validate_path(self.points, "density resample input")?;

        let checkpoints = self.checkpoints(rng);
        let last = self.points.len() - 1;

        let mut out = Vec::with_capacity(self.points.len());
        let mut prev = 0;
        for &idx in &checkpoints {
            if rng.gen_bool(0.5) {
                out.extend_from_slice(&self.points[prev..idx]);
            } else {
                let d = idx - prev;
                let m = rng.gen_range(d.div_ceil(2)..=d + 1);
                let start = self.points[prev];
                let step = (self.points[idx] - start) / m as f64;
                out.extend((0..m).map(|k| start + step * k as f64));
            }
            prev = idx;
        }
        out.push(self.points[last]);

        trace!(
            input = self.points.len(),
            checkpoints = checkpoints.len(),
            output = out.len(),
            "density resample"
        );
        Ok(out)
    }

    /// Sorted, strictly increasing segment boundaries ending at the last index.
    fn checkpoints<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        let last = self.points.len() - 1;
        let mut picked = BTreeSet::new();
        if last > 1 {
            for _ in 0..self.steps {
                picked.insert(rng.gen_range(1..last));
            }
        }
        picked.into_iter().chain(std::iter::once(last)).collect()
    }
}
