//! Swept-angle indicator arc.
//!
//! The indicator is a small square viewport (screen frame, y down) with the
//! arc centered in it. The arc always ends at the rightmost point of its
//! circle and starts at the point given by the current cosine and sine.

/// Side length of the default indicator viewport in pixels.
pub const INDICATOR_VIEWPORT: f64 = 100.0;

/// Fixed-size arc indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcGeometry {
    offset: f64,
    radius: f64,
}

impl Default for ArcGeometry {
    fn default() -> Self {
        Self::new(INDICATOR_VIEWPORT)
    }
}

impl ArcGeometry {
    /// Indicator for a square viewport of side `viewport`.
    pub fn new(viewport: f64) -> Self {
        let offset = viewport / 2.0;
        Self {
            offset,
            radius: offset / 2.0,
        }
    }

    /// Arc parameters for the committed `(cosine, sine)` pair.
    pub fn sweep(&self, cosine: f64, sine: f64) -> ArcSweep {
        let below = sine < 0.0;
        ArcSweep {
            start: (
                cosine * self.radius + self.offset,
                self.offset - sine * self.radius,
            ),
            end: (self.offset + self.radius, self.offset),
            radius: self.radius,
            large_arc: below,
            axis_rotation: below,
        }
    }
}

/// Parameters of one SVG elliptical-arc segment drawn with a circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSweep {
    pub start: (f64, f64),
    pub end: (f64, f64),
    pub radius: f64,
    /// Take the longer of the two arcs joining `start` and `end`.
    pub large_arc: bool,
    /// Set together with `large_arc`; emitted as the x-axis-rotation field.
    pub axis_rotation: bool,
}

impl ArcSweep {
    /// Path data: a move to `start` followed by one arc command to `end`.
    pub fn to_svg_path(&self) -> String {
        format!(
            "M {},{} A {},{} {} {} 1 {},{}",
            self.start.0,
            self.start.1,
            self.radius,
            self.radius,
            u8::from(self.axis_rotation),
            u8::from(self.large_arc),
            self.end.0,
            self.end.1,
        )
    }
}
