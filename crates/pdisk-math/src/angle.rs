//! Angle utilities for boundary-circle parameterizations.
//!
//! Angles are plain `f64` radians. Functions here either normalize into a
//! canonical range or deliberately leave values unwrapped; each one says which.

use std::f64::consts::{PI, TAU};

use crate::{Point2, Vector2};

/// Normalize an angle into `[0, 2*PI)`.
pub fn normalize(a: f64) -> f64 {
    let n = a.rem_euclid(TAU);
    // rem_euclid can return TAU itself for inputs just below a multiple of TAU
    if n >= TAU {
        n - TAU
    } else {
        n
    }
}

/// Wrap an angle into `(-PI, PI]`.
pub fn wrap_to_pi(a: f64) -> f64 {
    let n = a.rem_euclid(TAU);
    if n > PI {
        n - TAU
    } else {
        n
    }
}

/// Unordered angular separation of two angles, in `[0, PI]`.
pub fn separation(a: f64, b: f64) -> f64 {
    wrap_to_pi(b - a).abs()
}

/// Point on the unit circle at angle `theta`.
pub fn unit_vector(theta: f64) -> Point2 {
    Vector2::new(theta.cos(), theta.sin())
}

/// Linear interpolation between two raw angle values.
///
/// No wrapping: interpolating `0 -> 2*PI` sweeps a full turn.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
