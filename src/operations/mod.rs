mod density_resample;
mod distort;
mod knots;
mod tween_resample;

pub use density_resample::DensityResample;
pub use distort::{Distort, DistortionParams};
pub use knots::{KnotRegion, KnotSampler};
pub use tween_resample::TweenResample;
