//! Easing functions for velocity profiles.
//!
//! Standard Penner curves over `f64`, mapping normalized progress `[0, 1]` to
//! eased progress. Every curve here returns exactly `0.0` at `t = 0` and
//! exactly `1.0` at `t = 1`, so resampling by eased progress keeps path
//! endpoints intact. `back_*` and `elastic_*` overshoot in between.

use std::f64::consts::{FRAC_PI_2, PI};

/// Easing function type.
pub type EaseFn = fn(f64) -> f64;

/// Standard easing curves by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// [`linear`]
    Linear,
    /// [`quad_in`]
    QuadIn,
    /// [`quad_out`]
    #[default]
    QuadOut,
    /// [`quad_in_out`]
    QuadInOut,
    /// [`cubic_in`]
    CubicIn,
    /// [`cubic_out`]
    CubicOut,
    /// [`cubic_in_out`]
    CubicInOut,
    /// [`quart_in`]
    QuartIn,
    /// [`quart_out`]
    QuartOut,
    /// [`quart_in_out`]
    QuartInOut,
    /// [`quint_in`]
    QuintIn,
    /// [`quint_out`]
    QuintOut,
    /// [`quint_in_out`]
    QuintInOut,
    /// [`sine_in`]
    SineIn,
    /// [`sine_out`]
    SineOut,
    /// [`sine_in_out`]
    SineInOut,
    /// [`expo_in`]
    ExpoIn,
    /// [`expo_out`]
    ExpoOut,
    /// [`expo_in_out`]
    ExpoInOut,
    /// [`circ_in`]
    CircIn,
    /// [`circ_out`]
    CircOut,
    /// [`circ_in_out`]
    CircInOut,
    /// [`back_in`]
    BackIn,
    /// [`back_out`]
    BackOut,
    /// [`back_in_out`]
    BackInOut,
    /// [`elastic_in`]
    ElasticIn,
    /// [`elastic_out`]
    ElasticOut,
    /// [`elastic_in_out`]
    ElasticInOut,
    /// [`bounce_in`]
    BounceIn,
    /// [`bounce_out`]
    BounceOut,
    /// [`bounce_in_out`]
    BounceInOut,
}

impl Easing {
    /// All curves, in declaration order.
    pub const ALL: [Easing; 31] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::QuartIn,
        Easing::QuartOut,
        Easing::QuartInOut,
        Easing::QuintIn,
        Easing::QuintOut,
        Easing::QuintInOut,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::ExpoIn,
        Easing::ExpoOut,
        Easing::ExpoInOut,
        Easing::CircIn,
        Easing::CircOut,
        Easing::CircInOut,
        Easing::BackIn,
        Easing::BackOut,
        Easing::BackInOut,
        Easing::ElasticIn,
        Easing::ElasticOut,
        Easing::ElasticInOut,
        Easing::BounceIn,
        Easing::BounceOut,
        Easing::BounceInOut,
    ];

    /// Evaluates the curve at `t`.
    #[must_use]
    pub fn ease(self, t: f64) -> f64 {
        (self.as_fn())(t)
    }

    /// Returns the corresponding function pointer.
    #[must_use]
    pub fn as_fn(self) -> EaseFn {
        match self {
            Easing::Linear => linear,
            Easing::QuadIn => quad_in,
            Easing::QuadOut => quad_out,
            Easing::QuadInOut => quad_in_out,
            Easing::CubicIn => cubic_in,
            Easing::CubicOut => cubic_out,
            Easing::CubicInOut => cubic_in_out,
            Easing::QuartIn => quart_in,
            Easing::QuartOut => quart_out,
            Easing::QuartInOut => quart_in_out,
            Easing::QuintIn => quint_in,
            Easing::QuintOut => quint_out,
            Easing::QuintInOut => quint_in_out,
            Easing::SineIn => sine_in,
            Easing::SineOut => sine_out,
            Easing::SineInOut => sine_in_out,
            Easing::ExpoIn => expo_in,
            Easing::ExpoOut => expo_out,
            Easing::ExpoInOut => expo_in_out,
            Easing::CircIn => circ_in,
            Easing::CircOut => circ_out,
            Easing::CircInOut => circ_in_out,
            Easing::BackIn => back_in,
            Easing::BackOut => back_out,
            Easing::BackInOut => back_in_out,
            Easing::ElasticIn => elastic_in,
            Easing::ElasticOut => elastic_out,
            Easing::ElasticInOut => elastic_in_out,
            Easing::BounceIn => bounce_in,
            Easing::BounceOut => bounce_out,
            Easing::BounceInOut => bounce_in_out,
        }
    }
}

/// Evaluates `f` strictly inside `(0, 1)` and pins the ends, for curves whose
/// closed form only reaches 0 and 1 up to rounding.
#[inline]
fn pinned(t: f64, f: impl Fn(f64) -> f64) -> f64 {
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else {
        f(t)
    }
}

/// Linear (no easing).
#[must_use]
#[inline]
pub fn linear(t: f64) -> f64 {
    t
}

/// Quadratic ease in: starts slow, accelerates.
#[must_use]
#[inline]
pub fn quad_in(t: f64) -> f64 {
    t * t
}

/// Quadratic ease out. Default velocity profile for generated paths.
#[must_use]
#[inline]
pub fn quad_out(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease in-out: slow at both ends.
#[must_use]
#[inline]
pub fn quad_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Cubic ease in: starts slow, accelerates.
#[must_use]
#[inline]
pub fn cubic_in(t: f64) -> f64 {
    t * t * t
}

/// Cubic ease out: starts fast, decelerates.
#[must_use]
#[inline]
pub fn cubic_out(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Cubic ease in-out: slow at both ends.
#[must_use]
#[inline]
pub fn cubic_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Quartic ease in: starts slow, accelerates.
#[must_use]
#[inline]
pub fn quart_in(t: f64) -> f64 {
    t.powi(4)
}

/// Quartic ease out: starts fast, decelerates.
#[must_use]
#[inline]
pub fn quart_out(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

/// Quartic ease in-out: slow at both ends.
#[must_use]
#[inline]
pub fn quart_in_out(t: f64) -> f64 {
    if t < 0.5 {
        8.0 * t.powi(4)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
    }
}

/// Quintic ease in: starts slow, accelerates.
#[must_use]
#[inline]
pub fn quint_in(t: f64) -> f64 {
    t.powi(5)
}

/// Quintic ease out: starts fast, decelerates.
#[must_use]
#[inline]
pub fn quint_out(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(5)
}

/// Quintic ease in-out: slow at both ends.
#[must_use]
#[inline]
pub fn quint_in_out(t: f64) -> f64 {
    if t < 0.5 {
        16.0 * t.powi(5)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(5) / 2.0
    }
}

/// Sinusoidal ease in: starts slow, accelerates.
#[must_use]
#[inline]
pub fn sine_in(t: f64) -> f64 {
    pinned(t, |t| 1.0 - (t * FRAC_PI_2).cos())
}

/// Sinusoidal ease out: starts fast, decelerates.
#[must_use]
#[inline]
pub fn sine_out(t: f64) -> f64 {
    pinned(t, |t| (t * FRAC_PI_2).sin())
}

/// Sinusoidal ease in-out: slow at both ends.
#[must_use]
#[inline]
pub fn sine_in_out(t: f64) -> f64 {
    pinned(t, |t| -(t * PI).cos() / 2.0 + 0.5)
}

/// Exponential ease in: starts slow, accelerates.
#[must_use]
#[inline]
pub fn expo_in(t: f64) -> f64 {
    pinned(t, |t| 2.0f64.powf(10.0 * t - 10.0))
}

/// Exponential ease out: starts fast, decelerates.
#[must_use]
#[inline]
pub fn expo_out(t: f64) -> f64 {
    pinned(t, |t| 1.0 - 2.0f64.powf(-10.0 * t))
}

/// Exponential ease in-out: slow at both ends.
#[must_use]
#[inline]
pub fn expo_in_out(t: f64) -> f64 {
    pinned(t, |t| {
        if t < 0.5 {
            2.0f64.powf(20.0 * t - 10.0) / 2.0
        } else {
            (2.0 - 2.0f64.powf(-20.0 * t + 10.0)) / 2.0
        }
    })
}

/// Circular ease in: starts slow, accelerates.
#[must_use]
#[inline]
pub fn circ_in(t: f64) -> f64 {
    1.0 - (1.0 - t * t).max(0.0).sqrt()
}

/// Circular ease out: starts fast, decelerates.
#[must_use]
#[inline]
pub fn circ_out(t: f64) -> f64 {
    (1.0 - (t - 1.0).powi(2)).max(0.0).sqrt()
}

/// Circular ease in-out: slow at both ends.
#[must_use]
#[inline]
pub fn circ_in_out(t: f64) -> f64 {
    if t < 0.5 {
        (1.0 - (1.0 - (2.0 * t).powi(2)).max(0.0).sqrt()) / 2.0
    } else {
        ((1.0 - (-2.0 * t + 2.0).powi(2)).max(0.0).sqrt() + 1.0) / 2.0
    }
}

const BACK_C1: f64 = 1.701_58;
const BACK_C2: f64 = BACK_C1 * 1.525;
const BACK_C3: f64 = BACK_C1 + 1.0;

/// Back ease in (dips below 0 before accelerating).
#[must_use]
#[inline]
pub fn back_in(t: f64) -> f64 {
    pinned(t, |t| BACK_C3 * t * t * t - BACK_C1 * t * t)
}

/// Back ease out (overshoots 1 before settling).
#[must_use]
#[inline]
pub fn back_out(t: f64) -> f64 {
    pinned(t, |t| {
        1.0 + BACK_C3 * (t - 1.0).powi(3) + BACK_C1 * (t - 1.0).powi(2)
    })
}

/// Back ease in-out (undershoots 0 and overshoots 1).
#[must_use]
#[inline]
pub fn back_in_out(t: f64) -> f64 {
    pinned(t, |t| {
        if t < 0.5 {
            ((2.0 * t).powi(2) * ((BACK_C2 + 1.0) * 2.0 * t - BACK_C2)) / 2.0
        } else {
            ((2.0 * t - 2.0).powi(2) * ((BACK_C2 + 1.0) * (t * 2.0 - 2.0) + BACK_C2) + 2.0) / 2.0
        }
    })
}

const ELASTIC_C4: f64 = (2.0 * PI) / 3.0;
const ELASTIC_C5: f64 = (2.0 * PI) / 4.5;

/// Elastic ease in (growing oscillation around 0).
#[must_use]
#[inline]
pub fn elastic_in(t: f64) -> f64 {
    pinned(t, |t| {
        -2.0f64.powf(10.0 * t - 10.0) * ((t * 10.0 - 10.75) * ELASTIC_C4).sin()
    })
}

/// Elastic ease out (decaying oscillation around 1).
#[must_use]
#[inline]
pub fn elastic_out(t: f64) -> f64 {
    pinned(t, |t| {
        2.0f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * ELASTIC_C4).sin() + 1.0
    })
}

/// Elastic ease in-out.
#[must_use]
#[inline]
pub fn elastic_in_out(t: f64) -> f64 {
    pinned(t, |t| {
        if t < 0.5 {
            -(2.0f64.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * ELASTIC_C5).sin()) / 2.0
        } else {
            (2.0f64.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * ELASTIC_C5).sin()) / 2.0 + 1.0
        }
    })
}

const BOUNCE_N1: f64 = 7.5625;
const BOUNCE_D1: f64 = 2.75;

/// Bounce ease out (rebounds off 1 with shrinking hops).
#[must_use]
#[inline]
pub fn bounce_out(t: f64) -> f64 {
    pinned(t, |t| {
        if t < 1.0 / BOUNCE_D1 {
            BOUNCE_N1 * t * t
        } else if t < 2.0 / BOUNCE_D1 {
            let t = t - 1.5 / BOUNCE_D1;
            BOUNCE_N1 * t * t + 0.75
        } else if t < 2.5 / BOUNCE_D1 {
            let t = t - 2.25 / BOUNCE_D1;
            BOUNCE_N1 * t * t + 0.9375
        } else {
            let t = t - 2.625 / BOUNCE_D1;
            BOUNCE_N1 * t * t + 0.984_375
        }
    })
}

/// Bounce ease in, mirror of [`bounce_out`].
#[must_use]
#[inline]
pub fn bounce_in(t: f64) -> f64 {
    1.0 - bounce_out(1.0 - t)
}

/// Bounce ease in-out.
#[must_use]
#[inline]
pub fn bounce_in_out(t: f64) -> f64 {
    if t < 0.5 {
        (1.0 - bounce_out(1.0 - 2.0 * t)) / 2.0
    } else {
        (1.0 + bounce_out(2.0 * t - 1.0)) / 2.0
    }
}
