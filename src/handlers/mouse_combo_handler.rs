use crate::config;
use crate::display_action::DisplayAction;
use crate::models::{DragState, Mode, WindowHandle};
use crate::state::State;
use crate::utils::modmask_lookup::{Button, ModMask};
use x11_dl::xlib;

impl State {
    /// Handles a button press. A bare click focuses the window under the
    /// pointer; mod+button1 or mod+button3 on a floating window starts a
    /// move or resize drag. Pressing another button while a drag is
    /// already active is ignored.
    pub fn mouse_combo_handler(
        &mut self,
        mask: ModMask,
        button: Button,
        handle: WindowHandle,
        x: i32,
        y: i32,
    ) -> bool {
        if self.mode != Mode::Normal {
            return false;
        }
        if mask != config::MOD_KEY {
            if self.manages(&handle) {
                self.focus_window(&handle);
            }
            return false;
        }
        let Some(origin) = self.floating.get(&handle).copied() else {
            // Tiled windows cannot be dragged; the click still focuses.
            if self.manages(&handle) {
                self.focus_window(&handle);
            }
            return false;
        };
        let drag = DragState {
            handle,
            start_x: x,
            start_y: y,
            origin,
        };
        self.mode = match button {
            xlib::Button1 => Mode::MovingWindow(drag),
            xlib::Button3 => Mode::ResizingWindow(drag),
            _ => return false,
        };
        self.focus_window(&handle);
        self.actions.push_back(DisplayAction::MoveToTop(handle));
        self.actions.push_back(DisplayAction::GrabPointer);
        false
    }
}
