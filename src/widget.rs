//! The widget controller: single owner of the committed state.

use std::f64::consts::FRAC_PI_4;

use crate::arc::{ArcGeometry, ArcSweep};
use crate::drag::{DragController, DragMode, Handle};
use crate::geometry::{HandlePixel, Origin, WidgetGeometry};
use crate::layout::OverlayLayout;
use crate::mapper::CoordinateMapper;
use crate::probe::GeometryProbe;
use crate::sync::{Reconciliation, TrigState, TrigSynchronizer};
use crate::trace::{trace_event, trace_skip, trace_span};
use crate::util::{UnitCircleError, UnitCircleResult};

/// Construction parameters for a [`UnitCircle`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WidgetConfig {
    /// Circle diameter in pixels; the radius is half of it.
    pub diameter: f64,
    /// Angle committed at construction, in radians.
    pub initial_angle: f64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            diameter: 400.0,
            initial_angle: FRAC_PI_4,
        }
    }
}

impl WidgetConfig {
    pub fn validate(&self) -> UnitCircleResult<()> {
        if !self.diameter.is_finite() || self.diameter <= 0.0 {
            return Err(UnitCircleError::InvalidDiameter {
                diameter: self.diameter,
            });
        }
        if !self.initial_angle.is_finite() {
            return Err(UnitCircleError::InvalidAngle {
                angle: self.initial_angle,
            });
        }
        Ok(())
    }
}

/// Result of feeding one event to the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// No drag is active; the move was dropped.
    Ignored,
    /// The input was outside the handle's domain; nothing changed.
    Rejected,
    /// The active drag committed a new triple.
    Committed {
        mode: DragMode,
        reconciled: Reconciliation,
    },
}

impl Outcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Outcome::Committed { .. })
    }
}

/// Copy of the committed state for the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    pub angle: f64,
    pub cosine: f64,
    pub sine: f64,
    /// Cosine marker x and sine marker y, local frame.
    pub handle: HandlePixel,
    pub mode: DragMode,
}

/// Interactive unit circle.
///
/// All writes to the angle/cosine/sine triple go through this type, one event
/// at a time. Callers that deliver events from several threads must route
/// them through a single owner.
#[derive(Clone, Debug)]
pub struct UnitCircle {
    geometry: WidgetGeometry,
    sync: TrigSynchronizer,
    arc: ArcGeometry,
    state: TrigState,
    drag: DragController,
    mounted: bool,
}

impl UnitCircle {
    pub fn new(config: WidgetConfig) -> UnitCircleResult<Self> {
        config.validate()?;
        let geometry = WidgetGeometry::new(config.diameter)?;
        Ok(Self::from_geometry(geometry, config.initial_angle))
    }

    fn from_geometry(geometry: WidgetGeometry, initial_angle: f64) -> Self {
        let sync = TrigSynchronizer::new(CoordinateMapper::new(&geometry));
        let state = sync.initial_state(initial_angle);
        Self {
            geometry,
            sync,
            arc: ArcGeometry::default(),
            state,
            drag: DragController::new(),
            mounted: false,
        }
    }

    pub fn geometry(&self) -> &WidgetGeometry {
        &self.geometry
    }

    pub fn state(&self) -> &TrigState {
        &self.state
    }

    pub fn mode(&self) -> DragMode {
        self.drag.mode()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            angle: self.state.angle(),
            cosine: self.state.cosine(),
            sine: self.state.sine(),
            handle: self.state.handle(),
            mode: self.drag.mode(),
        }
    }

    /// Subscribes to `probe` and applies its first measurement.
    pub fn mount<P: GeometryProbe>(&mut self, probe: &mut P) -> UnitCircleResult<()> {
        if self.mounted {
            return Err(UnitCircleError::AlreadyMounted);
        }
        let origin = probe.subscribe()?;
        if let Err(err) = self.geometry_changed(origin) {
            probe.unsubscribe();
            return Err(err);
        }
        self.mounted = true;
        trace_event!("mount", x = origin.x, y = origin.y);
        Ok(())
    }

    /// Unsubscribes from `probe` and ends any drag in progress.
    pub fn unmount<P: GeometryProbe>(&mut self, probe: &mut P) -> UnitCircleResult<()> {
        if !self.mounted {
            return Err(UnitCircleError::NotMounted);
        }
        probe.unsubscribe();
        self.drag.release();
        self.mounted = false;
        trace_event!("unmount");
        Ok(())
    }

    /// New on-screen origin reported by the geometry probe.
    pub fn geometry_changed(&mut self, origin: Origin) -> UnitCircleResult<()> {
        self.geometry = self.geometry.with_origin(origin)?;
        trace_event!("geometry_changed", x = origin.x, y = origin.y);
        Ok(())
    }

    /// Pointer-down on `handle`.
    pub fn pointer_down(&mut self, handle: Handle) {
        let previous = self.drag.press(handle);
        trace_event!(
            "drag_start",
            mode = self.drag.mode().as_str(),
            replaced = previous.as_str(),
        );
    }

    /// Pointer-up anywhere over the widget.
    pub fn pointer_up(&mut self) {
        self.stop_drag();
    }

    /// Pointer left the widget bounds.
    pub fn pointer_leave(&mut self) {
        self.stop_drag();
    }

    fn stop_drag(&mut self) {
        let previous = self.drag.release();
        if previous.is_dragging() {
            trace_event!("drag_stop", mode = previous.as_str());
        }
    }

    /// Pointer-move in widget-local coordinates, already clamped by the caller.
    pub fn pointer_move(&mut self, pixel: HandlePixel) -> Outcome {
        let _span = trace_span!("pointer_move", x = pixel.x, y = pixel.y).entered();

        let Some(mode) = self.drag.route() else {
            trace_skip!("idle_move", x = pixel.x, y = pixel.y);
            return Outcome::Ignored;
        };

        let reconciled = match mode {
            DragMode::DraggingAngle => self.sync.drag_angle(&mut self.state, pixel),
            DragMode::DraggingCosine => self.sync.drag_cosine(&mut self.state, pixel.x),
            DragMode::DraggingSine => self.sync.drag_sine(&mut self.state, pixel.y),
            DragMode::Idle => None,
        };

        match reconciled {
            Some(reconciled) => {
                trace_event!(
                    "commit",
                    angle = self.state.angle(),
                    cosine = self.state.cosine(),
                    sine = self.state.sine(),
                    sine_reconciled = reconciled.sine,
                    cosine_reconciled = reconciled.cosine,
                );
                Outcome::Committed { mode, reconciled }
            }
            None => {
                trace_skip!("rejected_move", x = pixel.x, y = pixel.y);
                Outcome::Rejected
            }
        }
    }

    /// Pointer-move in screen coordinates; translated and clamped with the
    /// current geometry before routing.
    pub fn pointer_move_client(&mut self, client_x: f64, client_y: f64) -> Outcome {
        let pixel = self.geometry.to_local(client_x, client_y);
        self.pointer_move(pixel)
    }

    /// Indicator arc for the committed cosine and sine.
    pub fn arc(&self) -> ArcSweep {
        self.arc.sweep(self.state.cosine(), self.state.sine())
    }

    /// Render placement of every overlay element.
    pub fn layout(&self) -> OverlayLayout {
        OverlayLayout::new(
            &self.state,
            self.geometry.radius(),
            self.drag.mode() == DragMode::DraggingAngle,
            self.arc(),
        )
    }

    /// Text shown next to the ray, e.g. `"0.7854 rad"`.
    pub fn angle_label(&self) -> String {
        format!("{} rad", self.state.angle())
    }
}
