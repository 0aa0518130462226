//! Contract with the host collaborator that measures the widget on screen.

use crate::geometry::Origin;
use crate::util::UnitCircleResult;

/// Source of the widget's on-screen origin.
///
/// A host implementation listens for window resizes between `subscribe` and
/// `unsubscribe` and forwards each new measurement to
/// [`crate::UnitCircle::geometry_changed`]. The core never measures anything
/// itself.
pub trait GeometryProbe {
    /// Starts listening and returns the current measurement.
    fn subscribe(&mut self) -> UnitCircleResult<Origin>;

    /// Stops listening.
    fn unsubscribe(&mut self);
}

/// Probe with a fixed origin that records its subscription state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedProbe {
    origin: Origin,
    subscribed: bool,
}

impl FixedProbe {
    pub fn new(origin: Origin) -> Self {
        Self {
            origin,
            subscribed: false,
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }
}

impl GeometryProbe for FixedProbe {
    fn subscribe(&mut self) -> UnitCircleResult<Origin> {
        self.subscribed = true;
        Ok(self.origin)
    }

    fn unsubscribe(&mut self) {
        self.subscribed = false;
    }
}
