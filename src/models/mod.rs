//! Objects (windows, workspaces, focus) the window manager reasons about.
mod focus_manager;
mod manager;
mod mode;
mod screen;
mod window;
mod workspace;
mod xyhw;

pub use focus_manager::FocusBehaviour;
pub use focus_manager::FocusManager;
pub use manager::Manager;
pub use mode::DragState;
pub use mode::Mode;
pub use screen::Screen;
pub use window::WindowHandle;
pub use workspace::Workspace;
pub use xyhw::Xyhw;

pub type WorkspaceId = usize;
