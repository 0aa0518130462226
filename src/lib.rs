//! Unitcircle is the synchronization engine behind an interactive unit-circle
//! widget.
//!
//! Three handles (the angle ray, the cosine marker and the sine marker) each
//! drive one representation of a point on the circle. [`UnitCircle`] routes
//! pointer events to the active handle and keeps angle, cosine and sine
//! consistent, rounded to [`PRECISION`] decimal places. Rendering is left to
//! the host: it reads [`UnitCircle::snapshot`] or [`UnitCircle::layout`]
//! after each commit.

pub mod angle;
pub mod arc;
pub mod drag;
pub mod geometry;
pub mod layout;
pub mod lowlevel;
pub mod mapper;
pub mod probe;
pub mod sync;
mod trace;
pub mod util;
mod widget;

pub use angle::AngleResolver;
pub use arc::{ArcGeometry, ArcSweep};
pub use drag::{DragController, DragMode, Handle};
pub use geometry::{HandlePixel, Origin, WidgetGeometry};
pub use layout::{Half, MarkerLayout, OverlayLayout};
pub use mapper::CoordinateMapper;
pub use probe::{FixedProbe, GeometryProbe};
pub use sync::{Reconciliation, TrigState, TrigSynchronizer};
pub use util::math::PRECISION;
pub use util::{UnitCircleError, UnitCircleResult};
pub use widget::{Outcome, Snapshot, UnitCircle, WidgetConfig};
