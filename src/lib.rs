//! Human-like cursor path synthesis.
//!
//! Given a start and an end point, [`HumanCurve::generate`] produces an
//! ordered point sequence that bends like a hand-driven pointer: a random
//! Bezier base curve, uneven point density, small jitter and an eased
//! velocity profile. [`MovePlanner`] picks per-move parameters from the move
//! length.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod planner;
pub mod trajectory;

pub use error::{HumanCurveError, Result};
pub use geometry::{BezierCurve, Curve};
pub use math::easing::{EaseFn, Easing};
pub use math::Point2;
pub use planner::{MovePlanner, PlannedMove, PointBudget, TargetRect};
pub use trajectory::{derive_seed, GenerationConfig, HumanCurve};
