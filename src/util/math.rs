//! Numeric primitives shared by every component.

use std::f64::consts::TAU;

/// Decimal places kept for every committed angle, cosine, sine and handle offset.
pub const PRECISION: u32 = 4;

/// Inclusive range used by [`clamp`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl Bounds {
    /// Creates a range `[min, max]`.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if `value` lies within the range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Rounds `value` to `places` decimal digits (half away from zero).
///
/// A result of negative zero is returned as `0.0`.
pub fn approximate(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Restricts `value` to `bounds`.
pub fn clamp(value: f64, bounds: Bounds) -> f64 {
    value.max(bounds.min).min(bounds.max)
}

/// Three-way sign: `-1`, `0` or `1`.
///
/// Unlike `f64::signum`, zero (of either sign) maps to `0`.
pub(crate) fn sign(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// Wraps a rounded angle that landed on or past a full turn back into `[0, 2π)`.
pub(crate) fn wrap_turn(angle: f64) -> f64 {
    if angle >= TAU {
        approximate(angle - TAU, PRECISION)
    } else {
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::{approximate, clamp, sign, wrap_turn, Bounds, PRECISION};
    use std::f64::consts::{PI, TAU};

    #[test]
    fn approximate_rounds_to_places() {
        assert_eq!(approximate(PI, PRECISION), 3.1416);
        assert_eq!(approximate(0.70710678, PRECISION), 0.7071);
        assert_eq!(approximate(-0.33335, 2), -0.33);
        assert_eq!(approximate(2.5, 0), 3.0);
    }

    #[test]
    fn approximate_normalizes_negative_zero() {
        let value = approximate(-0.00001, PRECISION);
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn clamp_restricts_to_bounds() {
        let bounds = Bounds::new(0.0, 400.0);
        assert_eq!(clamp(-12.0, bounds), 0.0);
        assert_eq!(clamp(401.5, bounds), 400.0);
        assert_eq!(clamp(123.0, bounds), 123.0);
        assert!(bounds.contains(400.0));
        assert!(!bounds.contains(400.1));
    }

    #[test]
    fn sign_treats_zero_as_zero() {
        assert_eq!(sign(0.0), 0);
        assert_eq!(sign(-0.0), 0);
        assert_eq!(sign(-3.0), -1);
        assert_eq!(sign(f64::INFINITY), 1);
    }

    #[test]
    fn wrap_turn_folds_full_turn_to_zero() {
        assert_eq!(wrap_turn(approximate(TAU, PRECISION)), 0.0);
        assert_eq!(wrap_turn(3.1416), 3.1416);
    }
}
