use crate::models::{WindowHandle, Xyhw};
use serde::{Deserialize, Serialize};

/// Captured at the start of a pointer drag. All movement deltas are
/// computed against these values, never against intermediate positions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub handle: WindowHandle,
    pub start_x: i32,
    pub start_y: i32,
    pub origin: Xyhw,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    ResizingWindow(DragState),
    MovingWindow(DragState),
    #[default]
    Normal,
}
