use crate::command::Command;
use crate::models::WindowHandle;
use crate::utils::modmask_lookup::{Button, ModMask, XKeysym};

/// Events coming in from the display server, already translated out of
/// the backend's raw representation.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEvent {
    WindowCreate(WindowHandle),
    WindowDestroy(WindowHandle),
    ConfigureRequest(WindowHandle),
    KeyCombo(ModMask, XKeysym),
    MouseCombo(ModMask, Button, WindowHandle, i32, i32),
    ButtonRelease,
    Movement(i32, i32),
    MouseEnteredWindow(WindowHandle),
    FocusedWindowChanged(WindowHandle),
    WindowTakeFocus(WindowHandle),
    SendCommand(Command),
    Unknown(i32),
}
