//! The boundary between window management policy and the display. All
//! Xlib calls live behind this trait; everything above it is testable
//! with the mock backend.
mod mock_display_server;
mod xlib_display_server;

pub use mock_display_server::MockDisplayServer;
pub use xlib_display_server::XlibDisplayServer;

use crate::display_action::DisplayAction;
use crate::display_event::DisplayEvent;
use crate::models::Screen;
use crate::Result;

pub trait DisplayServer: Sized {
    /// Connects to the display and registers as the window manager.
    ///
    /// # Errors
    /// Fails when the display is unreachable or another window manager
    /// is already running.
    fn new() -> Result<Self>;

    fn screen(&self) -> Screen;

    /// Blocks until the next event the window manager cares about.
    fn wait_for_event(&mut self) -> DisplayEvent;

    fn execute_action(&mut self, action: DisplayAction);

    fn flush(&self);
}
