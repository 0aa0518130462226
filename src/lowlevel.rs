//! Low-level building blocks for hosts that drive the reconciliation directly.
//!
//! Most users should prefer [`crate::UnitCircle`], which owns the state and
//! the drag routing.

pub use crate::angle::AngleResolver;
pub use crate::mapper::CoordinateMapper;
pub use crate::sync::{Reconciliation, TrigState, TrigSynchronizer};
pub use crate::util::math::{approximate, clamp, Bounds, PRECISION};
