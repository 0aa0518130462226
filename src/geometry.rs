//! Widget placement and the widget-local pixel frame.

use crate::util::math::{clamp, Bounds};
use crate::util::{UnitCircleError, UnitCircleResult};

/// Pixel offsets inside the widget's local frame.
///
/// The frame is y-up: `(0, 0)` is the bottom-left corner of the bounding
/// square and `(radius, radius)` is the circle center.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandlePixel {
    pub x: f64,
    pub y: f64,
}

impl HandlePixel {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// On-screen position of the widget's top-left corner, scroll included.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

impl Origin {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub(crate) fn validate(self) -> UnitCircleResult<Self> {
        if self.x.is_finite() && self.y.is_finite() {
            Ok(self)
        } else {
            Err(UnitCircleError::InvalidOrigin {
                x: self.x,
                y: self.y,
            })
        }
    }
}

/// Placement and fixed size constants of a widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidgetGeometry {
    origin: Origin,
    diameter: f64,
    radius: f64,
}

impl WidgetGeometry {
    /// Creates a geometry at the screen origin for a circle of `diameter` pixels.
    pub fn new(diameter: f64) -> UnitCircleResult<Self> {
        if !diameter.is_finite() || diameter <= 0.0 {
            return Err(UnitCircleError::InvalidDiameter { diameter });
        }
        Ok(Self {
            origin: Origin::default(),
            diameter,
            radius: diameter / 2.0,
        })
    }

    /// Returns a copy placed at `origin`.
    pub fn with_origin(mut self, origin: Origin) -> UnitCircleResult<Self> {
        self.origin = origin.validate()?;
        Ok(self)
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Valid range of a local pixel coordinate on either axis.
    pub fn pixel_bounds(&self) -> Bounds {
        Bounds::new(0.0, self.diameter)
    }

    /// Translates a screen-space pointer position into the local frame.
    ///
    /// Screen y grows downward; local y grows upward. Both axes are clamped
    /// to `[0, diameter]`.
    pub fn to_local(&self, client_x: f64, client_y: f64) -> HandlePixel {
        let bounds = self.pixel_bounds();
        HandlePixel {
            x: clamp(client_x - self.origin.x, bounds),
            y: clamp(self.diameter - client_y + self.origin.y, bounds),
        }
    }
}
