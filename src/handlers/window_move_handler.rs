use crate::display_action::DisplayAction;
use crate::models::{DragState, Xyhw};
use crate::state::State;

impl State {
    /// Applies one motion event of an active move drag. The new position
    /// is the drag origin plus the pointer's total displacement, so
    /// intermediate motion events can be dropped without drift.
    pub fn window_move_handler(&mut self, drag: &DragState, x: i32, y: i32) -> bool {
        if !self.manages(&drag.handle) {
            return false;
        }
        let geometry = Xyhw::new(
            drag.origin.x + (x - drag.start_x),
            drag.origin.y + (y - drag.start_y),
            drag.origin.w,
            drag.origin.h,
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
    fn moves_are_anchored_to_the_drag_origin() {
        let mut state = State::new(Screen::default());
        let handle = WindowHandle::MockHandle(1);
        state.current_mut().add_window(handle);
        let drag = DragState {
            handle,
            start_x: 200,
            start_y: 200,
            origin: Xyhw::new(50, 60, 400, 300),
        };
        state.window_move_handler(&drag, 210, 190);
        state.window_move_handler(&drag, 230, 170);
        assert_eq!(
            state.floating.get(&handle),
            Some(&Xyhw::new(80, 30, 400, 300))
        );
    }

    #[test]
    fn a_stale_drag_cannot_resurrect_an_unmanaged_window() {
        let mut state = State::new(Screen::default());
        let handle = WindowHandle::MockHandle(1);
        let drag = DragState {
            handle,
            start_x: 0,
            start_y: 0,
            origin: Xyhw::new(50, 60, 400, 300),
        };
        assert!(!state.window_move_handler(&drag, 50, 50));
        assert!(state.floating.is_empty());
        assert!(state.actions.is_empty());
    }
}
