//! Full-circle angle from a pointer position.
//!
//! The resolver works from the tangent ratio alone and repairs the quadrant
//! with sign comparisons. A vertical pointer produces a signed infinite
//! tangent, which `atan` maps to `±π/2`; that value flows through the same
//! branches as any other.

use std::f64::consts::{PI, TAU};

use crate::geometry::HandlePixel;
use crate::util::math::{approximate, sign, wrap_turn, PRECISION};

/// Converts local pointer positions into angles in `[0, 2π)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleResolver {
    radius: f64,
}

impl AngleResolver {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Angle of the ray from the circle center through `pixel`, rounded.
    ///
    /// Returns `None` only when the pointer sits exactly on the center,
    /// where the tangent is `0 / 0`.
    pub fn resolve(&self, pixel: HandlePixel) -> Option<f64> {
        let opposite = pixel.y - self.radius;
        let adjacent = pixel.x - self.radius;
        let tan = opposite / adjacent;
        if tan.is_nan() {
            return None;
        }

        let base = approximate(tan.atan(), PRECISION);
        let adjacent_sign = sign(adjacent);
        let angle = if adjacent_sign == -1 {
            // quadrants 2 and 3
            approximate(PI + base, PRECISION)
        } else if adjacent_sign > sign(opposite) {
            // quadrant 4, straight down, and the positive x axis
            approximate(TAU + base, PRECISION)
        } else {
            base
        };
        Some(wrap_turn(angle))
    }
}
