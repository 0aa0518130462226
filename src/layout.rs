//! Placement of the ray, markers and projection lines for the renderer.

use crate::arc::ArcSweep;
use crate::sync::TrigState;

/// Half of the widget, split by the diameter a marker sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Half {
    /// Above the horizontal diameter, or right of the vertical one.
    Positive,
    /// Below the horizontal diameter, or left of the vertical one.
    Negative,
    /// No preferred side (the value is zero).
    Centered,
}

impl Half {
    fn of(value: f64) -> Self {
        if value > 0.0 {
            Half::Positive
        } else if value < 0.0 {
            Half::Negative
        } else {
            Half::Centered
        }
    }

    fn opposite(self) -> Self {
        match self {
            Half::Positive => Half::Negative,
            Half::Negative => Half::Positive,
            Half::Centered => Half::Centered,
        }
    }
}

/// One trig marker and its projection line to the circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerLayout {
    /// Local pixel offset along the marker's own diameter.
    pub offset: f64,
    /// Half the projection line extends into.
    pub line_half: Half,
    /// Projection line length in pixels.
    pub line_length: f64,
    /// Half the label sits in, away from the line.
    pub label_half: Half,
}

impl MarkerLayout {
    // `other` is the trig value perpendicular to this marker's axis.
    fn new(offset: f64, other: f64, radius: f64) -> Self {
        let line_half = Half::of(other);
        Self {
            offset,
            line_half,
            line_length: other.abs() * radius,
            label_half: line_half.opposite(),
        }
    }
}

/// Everything the rendering collaborator reads after a commit.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayLayout {
    /// Screen-frame rotation of the angle ray in radians (y down, so negated).
    pub ray_rotation: f64,
    /// The ray is being dragged.
    pub ray_active: bool,
    pub cosine: MarkerLayout,
    pub sine: MarkerLayout,
    pub arc: ArcSweep,
}

impl OverlayLayout {
    pub(crate) fn new(state: &TrigState, radius: f64, ray_active: bool, arc: ArcSweep) -> Self {
        let handle = state.handle();
        Self {
            ray_rotation: -state.angle(),
            ray_active,
            cosine: MarkerLayout::new(handle.x, state.sine(), radius),
            sine: MarkerLayout::new(handle.y, state.cosine(), radius),
            arc,
        }
    }
}
