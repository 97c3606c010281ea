use crate::models::WindowHandle;
use serde::{Deserialize, Serialize};

/// Which events are allowed to move focus between windows.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusBehaviour {
    /// Focus moves on clicks and keyboard commands only.
    ClickTo,
    /// Focus additionally follows the pointer into a window.
    Sloppy,
}

impl FocusBehaviour {
    #[must_use]
    pub fn is_sloppy(self) -> bool {
        self == FocusBehaviour::Sloppy
    }
}

/// Tracks the process-wide focused window. The per-workspace memory lives
/// on [`crate::models::Workspace`]; this struct owns the global view and
/// the previously focused window (needed to repaint its border).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FocusManager {
    pub behaviour: FocusBehaviour,
    pub window: Option<WindowHandle>,
    pub last_focused: Option<WindowHandle>,
}

impl FocusManager {
    #[must_use]
    pub fn new(behaviour: FocusBehaviour) -> Self {
        Self {
            behaviour,
            window: None,
            last_focused: None,
        }
    }
}
