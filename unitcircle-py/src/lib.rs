//! Python bindings for the unitcircle widget engine.
//!
//! A Python host owns the event loop and rendering; it forwards pointer
//! events to `UnitCircle` and reads the committed state back.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use unitcircle::{
    ArcSweep as RustArcSweep, Handle, HandlePixel, Origin, Outcome, UnitCircle as RustUnitCircle,
    UnitCircleError, WidgetConfig,
};

/// Convert a UnitCircleError to a Python exception.
fn to_py_err(err: UnitCircleError) -> PyErr {
    match err {
        UnitCircleError::AlreadyMounted | UnitCircleError::NotMounted => {
            PyRuntimeError::new_err(err.to_string())
        }
        _ => PyValueError::new_err(err.to_string()),
    }
}

fn parse_handle(handle: &str) -> PyResult<Handle> {
    match handle.to_lowercase().as_str() {
        "angle" => Ok(Handle::AngleRay),
        "cosine" | "cos" => Ok(Handle::CosineMarker),
        "sine" | "sin" => Ok(Handle::SineMarker),
        _ => Err(PyValueError::new_err("handle must be 'angle', 'cosine' or 'sine'")),
    }
}

fn outcome_name(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Ignored => "ignored",
        Outcome::Rejected => "rejected",
        Outcome::Committed { .. } => "committed",
    }
}

/// Indicator arc parameters for the current cosine and sine.
#[pyclass(frozen)]
#[derive(Clone)]
pub struct ArcSweep {
    #[pyo3(get)]
    pub start: (f64, f64),
    #[pyo3(get)]
    pub end: (f64, f64),
    #[pyo3(get)]
    pub radius: f64,
    #[pyo3(get)]
    pub large_arc: bool,
    #[pyo3(get)]
    pub axis_rotation: bool,
    path: String,
}

#[pymethods]
impl ArcSweep {
    /// SVG path data for the arc.
    #[getter]
    fn path(&self) -> String {
        self.path.clone()
    }

    fn __repr__(&self) -> String {
        format!("ArcSweep('{}')", self.path)
    }
}

impl From<RustArcSweep> for ArcSweep {
    fn from(sweep: RustArcSweep) -> Self {
        Self {
            start: sweep.start,
            end: sweep.end,
            radius: sweep.radius,
            large_arc: sweep.large_arc,
            axis_rotation: sweep.axis_rotation,
            path: sweep.to_svg_path(),
        }
    }
}

/// Interactive unit circle driven by pointer events.
#[pyclass]
pub struct UnitCircle {
    inner: RustUnitCircle,
}

#[pymethods]
impl UnitCircle {
    /// Create a new widget.
    ///
    /// Args:
    ///     diameter: Circle diameter in pixels (default: 400)
    ///     initial_angle: Starting angle in radians (default: pi/4)
    #[new]
    #[pyo3(signature = (diameter = 400.0, initial_angle = std::f64::consts::FRAC_PI_4))]
    fn new(diameter: f64, initial_angle: f64) -> PyResult<Self> {
        let inner = RustUnitCircle::new(WidgetConfig {
            diameter,
            initial_angle,
        })
        .map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// Start dragging a handle: "angle", "cosine" or "sine".
    fn press(&mut self, handle: &str) -> PyResult<()> {
        self.inner.pointer_down(parse_handle(handle)?);
        Ok(())
    }

    /// Pointer move in widget-local pixels (y up).
    ///
    /// Returns:
    ///     "committed", "rejected" or "ignored"
    fn move_to(&mut self, x: f64, y: f64) -> &'static str {
        outcome_name(self.inner.pointer_move(HandlePixel::new(x, y)))
    }

    /// Pointer move in screen pixels (y down), translated with the current origin.
    fn move_client(&mut self, x: f64, y: f64) -> &'static str {
        outcome_name(self.inner.pointer_move_client(x, y))
    }

    /// Pointer released.
    fn release(&mut self) {
        self.inner.pointer_up();
    }

    /// Pointer left the widget.
    fn leave(&mut self) {
        self.inner.pointer_leave();
    }

    /// Report a new on-screen origin.
    fn set_origin(&mut self, x: f64, y: f64) -> PyResult<()> {
        self.inner
            .geometry_changed(Origin::new(x, y))
            .map_err(to_py_err)
    }

    #[getter]
    fn angle(&self) -> f64 {
        self.inner.state().angle()
    }

    #[getter]
    fn cosine(&self) -> f64 {
        self.inner.state().cosine()
    }

    #[getter]
    fn sine(&self) -> f64 {
        self.inner.state().sine()
    }

    /// Cosine marker x and sine marker y in widget-local pixels.
    #[getter]
    fn handle(&self) -> (f64, f64) {
        let handle = self.inner.state().handle();
        (handle.x, handle.y)
    }

    #[getter]
    fn diameter(&self) -> f64 {
        self.inner.geometry().diameter()
    }

    #[getter]
    fn radius(&self) -> f64 {
        self.inner.geometry().radius()
    }

    /// On-screen origin last reported through `set_origin`.
    #[getter]
    fn origin(&self) -> (f64, f64) {
        let origin = self.inner.geometry().origin();
        (origin.x, origin.y)
    }

    /// Active drag: "idle", "angle", "cosine" or "sine".
    #[getter]
    fn mode(&self) -> &'static str {
        self.inner.mode().as_str()
    }

    #[getter]
    fn label(&self) -> String {
        self.inner.angle_label()
    }

    /// Indicator arc for the committed state.
    fn arc(&self) -> ArcSweep {
        self.inner.arc().into()
    }

    fn __repr__(&self) -> String {
        let state = self.inner.state();
        format!(
            "UnitCircle(angle={}, cosine={}, sine={}, mode='{}')",
            state.angle(),
            state.cosine(),
            state.sine(),
            self.inner.mode().as_str()
        )
    }
}

/// Python module for the unitcircle widget engine.
#[pymodule]
fn _unitcircle(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<UnitCircle>()?;
    m.add_class::<ArcSweep>()?;
    m.add("PRECISION", unitcircle::PRECISION)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
