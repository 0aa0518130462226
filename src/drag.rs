//! Drag state machine routing pointer moves to one handle.

/// A draggable control on the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    /// The ray from the center at the current angle.
    AngleRay,
    /// The marker on the horizontal diameter.
    CosineMarker,
    /// The marker on the vertical diameter.
    SineMarker,
}

/// Which representation the pointer currently drives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragMode {
    #[default]
    Idle,
    DraggingAngle,
    DraggingCosine,
    DraggingSine,
}

impl DragMode {
    /// Stable lowercase name, used in logs and bindings.
    pub fn as_str(self) -> &'static str {
        match self {
            DragMode::Idle => "idle",
            DragMode::DraggingAngle => "angle",
            DragMode::DraggingCosine => "cosine",
            DragMode::DraggingSine => "sine",
        }
    }

    pub fn is_dragging(self) -> bool {
        self != DragMode::Idle
    }
}

impl From<Handle> for DragMode {
    fn from(handle: Handle) -> Self {
        match handle {
            Handle::AngleRay => DragMode::DraggingAngle,
            Handle::CosineMarker => DragMode::DraggingCosine,
            Handle::SineMarker => DragMode::DraggingSine,
        }
    }
}

/// Tracks the single active drag.
///
/// Modes are mutually exclusive: a pointer-down while another drag is active
/// replaces it. Pointer-up and pointer-leave both return to [`DragMode::Idle`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragController {
    mode: DragMode,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    /// Starts dragging `handle`; returns the mode it replaced.
    pub fn press(&mut self, handle: Handle) -> DragMode {
        std::mem::replace(&mut self.mode, handle.into())
    }

    /// Ends any drag; returns the mode that was active.
    pub fn release(&mut self) -> DragMode {
        std::mem::take(&mut self.mode)
    }

    /// Mode a pointer move should be routed to, or `None` while idle.
    pub fn route(&self) -> Option<DragMode> {
        self.mode.is_dragging().then_some(self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::{DragController, DragMode, Handle};

    #[test]
    fn press_and_release_cycle() {
        let mut drag = DragController::new();
        assert_eq!(drag.route(), None);

        assert_eq!(drag.press(Handle::SineMarker), DragMode::Idle);
        assert_eq!(drag.route(), Some(DragMode::DraggingSine));

        assert_eq!(drag.release(), DragMode::DraggingSine);
        assert_eq!(drag.mode(), DragMode::Idle);
        assert_eq!(drag.release(), DragMode::Idle);
    }

    #[test]
    fn later_press_replaces_active_drag() {
        let mut drag = DragController::new();
        drag.press(Handle::AngleRay);
        assert_eq!(drag.press(Handle::CosineMarker), DragMode::DraggingAngle);
        assert_eq!(drag.route(), Some(DragMode::DraggingCosine));
    }
}
