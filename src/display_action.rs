use crate::models::{WindowHandle, WorkspaceId, Xyhw};

/// Actions the state queues for the display server to carry out. The
/// event loop drains these after every handled event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayAction {
    /// Start managing a newly mapped window (borders, grabs, map).
    AddedWindow(WindowHandle),
    /// Forget a window that is gone from the server.
    DestroyedWindow(WindowHandle),
    /// Move and resize a window.
    ConfigureWindow(WindowHandle, Xyhw),
    /// Send a synthetic `ConfigureNotify` describing the given geometry.
    ConfigureNotify(WindowHandle, Xyhw),
    /// Raise a window above its siblings.
    MoveToTop(WindowHandle),
    HideWindow(WindowHandle),
    ShowWindow(WindowHandle),
    /// Give a window input focus and the focused border color. The
    /// previous holder, if any, gets the unfocused color.
    WindowTakeFocus {
        handle: WindowHandle,
        previous: Option<WindowHandle>,
    },
    /// Drop input focus back to the root and unpaint the given border.
    Unfocus(Option<WindowHandle>),
    /// Ask a window to close, forcefully if it refuses the protocol.
    KillWindow(WindowHandle),
    GrabPointer,
    UngrabPointer,
    SetCurrentWorkspace(WorkspaceId),
    SetWindowWorkspace(WindowHandle, WorkspaceId),
    SetClientList(Vec<WindowHandle>),
    /// Release all key and button grabs before exit.
    TeardownGrabs,
}
