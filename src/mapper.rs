//! Pixel offset <-> trig value conversion along one axis.

use crate::geometry::WidgetGeometry;
use crate::util::math::{approximate, Bounds, PRECISION};

/// Maps a local pixel offset on either axis to a value in `[-1, 1]` and back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    diameter: f64,
    radius: f64,
}

impl CoordinateMapper {
    pub fn new(geometry: &WidgetGeometry) -> Self {
        Self {
            diameter: geometry.diameter(),
            radius: geometry.radius(),
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Cosine for a horizontal offset, or `None` if `x` is outside `[0, diameter]`.
    pub fn pixel_to_cos(&self, x: f64) -> Option<f64> {
        self.pixel_to_trig(x)
    }

    /// Sine for a vertical (y-up) offset, or `None` if `y` is outside `[0, diameter]`.
    pub fn pixel_to_sin(&self, y: f64) -> Option<f64> {
        self.pixel_to_trig(y)
    }

    /// Pixel offset of a handle showing `value`.
    pub fn trig_to_pixel(&self, value: f64) -> f64 {
        approximate(self.radius * (value + 1.0), PRECISION)
    }

    fn pixel_to_trig(&self, pixel: f64) -> Option<f64> {
        if !Bounds::new(0.0, self.diameter).contains(pixel) {
            return None;
        }
        Some(approximate(pixel / self.radius - 1.0, PRECISION))
    }
}
