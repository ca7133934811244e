pub mod curve;

pub use curve::{BezierCurve, Curve, CurveDomain};
