use crate::config;
use crate::display_action::DisplayAction;
use crate::models::{DragState, Xyhw};
use crate::state::State;

impl State {
    /// Applies one motion event of an active resize drag. The window
    /// keeps its position; width and height grow or shrink with the
    /// pointer, never below the minimum floating size.
    pub fn window_resize_handler(&mut self, drag: &DragState, x: i32, y: i32) -> bool {
        if !self.manages(&drag.handle) {
            return false;
        }
        let geometry = Xyhw::new(
            drag.origin.x,
            drag.origin.y,
            (drag.origin.w + (x - drag.start_x)).max(config::MIN_FLOAT_SIZE),
            (drag.origin.h + (y - drag.start_y)).max(config::MIN_FLOAT_SIZE),
        );
        self.floating.insert(drag.handle, geometry);
        self.actions
            .push_back(DisplayAction::ConfigureWindow(drag.handle, geometry));
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Screen, WindowHandle};

    #[test]
    fn resizes_clamp_at_the_minimum_size() {
        let mut state = State::new(Screen::default());
        let handle = WindowHandle::MockHandle(1);
        state.current_mut().add_window(handle);
        let drag = DragState {
            handle,
            start_x: 0,
            start_y: 0,
            origin: Xyhw::new(50, 60, 400, 300),
        };
        state.window_resize_handler(&drag, -1000, -1000);
        assert_eq!(
            state.floating.get(&handle),
            Some(&Xyhw::new(50, 60, 100, 100))
        );
    }

    #[test]
    fn resizes_track_the_pointer_displacement() {
        let mut state = State::new(Screen::default());
        let handle = WindowHandle::MockHandle(1);
        state.current_mut().add_window(handle);
        let drag = DragState {
            handle,
            start_x: 10,
            start_y: 10,
            origin: Xyhw::new(50, 60, 400, 300),
        };
        state.window_resize_handler(&drag, 60, 30);
        assert_eq!(
            state.floating.get(&handle),
            Some(&Xyhw::new(50, 60, 450, 320))
        );
    }
}
