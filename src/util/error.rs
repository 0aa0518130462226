//! Error types for unitcircle.

use thiserror::Error;

/// Result alias for unitcircle operations.
pub type UnitCircleResult<T> = std::result::Result<T, UnitCircleError>;

/// Errors raised while configuring or mounting a widget.
///
/// Pointer handling never fails: out-of-range input is reported through
/// [`crate::Outcome`] instead.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum UnitCircleError {
    /// The widget diameter is not a positive finite number.
    #[error("invalid diameter {diameter}: must be finite and > 0")]
    InvalidDiameter { diameter: f64 },
    /// The initial angle is not finite.
    #[error("invalid angle {angle}: must be finite")]
    InvalidAngle { angle: f64 },
    /// The geometry probe reported a non-finite origin.
    #[error("invalid origin ({x}, {y}): must be finite")]
    InvalidOrigin { x: f64, y: f64 },
    /// `mount` was called on a widget that is already mounted.
    #[error("widget is already mounted")]
    AlreadyMounted,
    /// `unmount` was called on a widget that is not mounted.
    #[error("widget is not mounted")]
    NotMounted,
}
