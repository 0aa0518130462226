//! Angle/cosine/sine reconciliation.
//!
//! Every committed change ends with [`TrigSynchronizer::reconcile`], which
//! recomputes cosine and sine from the angle and writes each one back only if
//! its magnitude differs from the stored value. Sine and cosine are checked
//! separately, so a pure sign flip of either one is never written. Moving to
//! the supplementary angle (10° to 170°) leaves the stored cosine with the old
//! sign, and reflecting across the x axis (30° to 330°) does the same to the
//! sine.

use std::f64::consts::TAU;

use crate::angle::AngleResolver;
use crate::geometry::HandlePixel;
use crate::mapper::CoordinateMapper;
use crate::util::math::{approximate, clamp, Bounds, PRECISION};

const UNIT: Bounds = Bounds::new(-1.0, 1.0);

/// The committed `(angle, cosine, sine)` triple and the handle offsets derived from it.
///
/// Fields are read-only outside this module; only [`TrigSynchronizer`] writes them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrigState {
    angle: f64,
    cosine: f64,
    sine: f64,
    handle: HandlePixel,
}

impl TrigState {
    /// Angle in radians, rounded.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn cosine(&self) -> f64 {
        self.cosine
    }

    pub fn sine(&self) -> f64 {
        self.sine
    }

    /// Cosine marker x offset and sine marker y offset in the local frame.
    pub fn handle(&self) -> HandlePixel {
        self.handle
    }
}

/// Which of the two derived values an angle-driven pass wrote back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reconciliation {
    pub sine: bool,
    pub cosine: bool,
}

/// Applies drags and angle changes to a [`TrigState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrigSynchronizer {
    mapper: CoordinateMapper,
    resolver: AngleResolver,
}

impl TrigSynchronizer {
    pub fn new(mapper: CoordinateMapper) -> Self {
        Self {
            mapper,
            resolver: AngleResolver::new(mapper.radius()),
        }
    }

    /// A consistent state for `angle`; no comparison against prior values.
    pub fn initial_state(&self, angle: f64) -> TrigState {
        let angle = approximate(angle, PRECISION);
        let cosine = approximate(angle.cos(), PRECISION);
        let sine = approximate(angle.sin(), PRECISION);
        TrigState {
            angle,
            cosine,
            sine,
            handle: HandlePixel::new(
                self.mapper.trig_to_pixel(cosine),
                self.mapper.trig_to_pixel(sine),
            ),
        }
    }

    /// Recomputes cosine and sine from the current angle.
    pub fn reconcile(&self, state: &mut TrigState) -> Reconciliation {
        let mut outcome = Reconciliation::default();

        let candidate_sin = approximate(state.angle.sin(), PRECISION);
        if candidate_sin.abs() != state.sine.abs() {
            state.sine = candidate_sin;
            state.handle.y = self.mapper.trig_to_pixel(candidate_sin);
            outcome.sine = true;
        }

        let candidate_cos = approximate(state.angle.cos(), PRECISION);
        if candidate_cos.abs() != state.cosine.abs() {
            state.cosine = candidate_cos;
            state.handle.x = self.mapper.trig_to_pixel(candidate_cos);
            outcome.cosine = true;
        }

        outcome
    }

    /// Commits `angle` as the new source of truth and reconciles.
    pub fn commit_angle(&self, state: &mut TrigState, angle: f64) -> Reconciliation {
        state.angle = angle;
        self.reconcile(state)
    }

    /// Angle-ray drag: resolves `pixel` to an angle and commits it.
    ///
    /// `None` when the pointer is on the circle center.
    pub fn drag_angle(&self, state: &mut TrigState, pixel: HandlePixel) -> Option<Reconciliation> {
        let angle = self.resolver.resolve(pixel)?;
        Some(self.commit_angle(state, angle))
    }

    /// Cosine-marker drag. Reaches angles in `[0, π]` only.
    ///
    /// `None` when `x` is outside `[0, diameter]`.
    pub fn drag_cosine(&self, state: &mut TrigState, x: f64) -> Option<Reconciliation> {
        let cosine = self.mapper.pixel_to_cos(x)?;
        state.cosine = cosine;
        state.handle.x = x;
        let angle = approximate(clamp(cosine, UNIT).acos(), PRECISION);
        Some(self.commit_angle(state, angle))
    }

    /// Sine-marker drag. Reaches angles in `[3π/2, 2π) ∪ [0, π/2]` only.
    ///
    /// `None` when `y` is outside `[0, diameter]`.
    pub fn drag_sine(&self, state: &mut TrigState, y: f64) -> Option<Reconciliation> {
        let sine = self.mapper.pixel_to_sin(y)?;
        state.sine = sine;
        state.handle.y = y;
        let mut angle = approximate(clamp(sine, UNIT).asin(), PRECISION);
        if angle < 0.0 {
            angle = approximate(TAU + angle, PRECISION);
        }
        Some(self.commit_angle(state, angle))
    }
}
