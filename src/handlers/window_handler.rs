use crate::display_action::DisplayAction;
use crate::models::{Mode, WindowHandle};
use crate::state::State;

impl State {
    /// Start managing a window the server asked us to map. New windows
    /// join the bottom of the visible workspace's stack and take focus.
    pub fn window_created_handler(&mut self, handle: WindowHandle) -> bool {
        if self.manages(&handle) {
            return false;
        }
        tracing::debug!("managing new window {handle:?}");
        self.current_mut().add_window(handle);
        self.actions.push_back(DisplayAction::AddedWindow(handle));
        self.actions
            .push_back(DisplayAction::SetWindowWorkspace(handle, self.current_workspace));
        self.update_client_list();
        self.focus_window(&handle);
        true
    }

    /// Forget a window the server destroyed. Focus falls to the bottom of
    /// the stack when the destroyed window was both visible and focused.
    pub fn window_destroyed_handler(&mut self, handle: &WindowHandle) -> bool {
        let Some(workspace) = self.workspace_of(handle) else {
            return false;
        };
        tracing::debug!("unmanaging window {handle:?}");
        let was_visible = workspace == self.current_workspace;
        self.workspaces[workspace].remove_window(handle);
        self.floating.remove(handle);
        // A drag whose target just died is over; queued motion events
        // must not act on the dead handle.
        match self.mode {
            Mode::MovingWindow(drag) | Mode::ResizingWindow(drag) if drag.handle == *handle => {
                self.mode = Mode::Normal;
                self.actions.push_back(DisplayAction::UngrabPointer);
            }
            _ => {}
        }
        self.actions.push_back(DisplayAction::DestroyedWindow(*handle));
        self.update_client_list();
        if self.focus_manager.window == Some(*handle) {
            // The window is gone; there is no border left to repaint.
            self.focus_manager.window = None;
            self.focus_manager.last_focused = None;
            match self.workspaces[workspace].focused {
                Some(next) if was_visible => {
                    self.focus_window(&next);
                }
                _ => self.actions.push_back(DisplayAction::Unfocus(None)),
            }
        }
        was_visible
    }

    /// Tiled windows do not get to pick their own geometry; retiling
    /// reimposes ours and the server emits the matching notify. Floating
    /// windows are re-asserted at their stored position, and windows not
    /// yet managed are told the geometry they will get.
    pub fn configure_request_handler(&mut self, handle: &WindowHandle) -> bool {
        if let Some(geometry) = self.floating.get(handle).copied() {
            self.actions
                .push_back(DisplayAction::ConfigureWindow(*handle, geometry));
            return false;
        }
        if self.manages(handle) {
            return true;
        }
        self.actions
            .push_back(DisplayAction::ConfigureNotify(*handle, self.screen.xyhw()));
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Screen;

    fn handle(id: u32) -> WindowHandle {
        WindowHandle::MockHandle(id)
    }

    #[test]
    fn new_windows_join_the_tail_and_take_focus() {
        let mut state = State::new(Screen::default());
        assert!(state.window_created_handler(handle(1)));
        assert!(state.window_created_handler(handle(2)));
        assert_eq!(state.current().windows, vec![handle(1), handle(2)]);
        assert_eq!(state.focus_manager.window, Some(handle(2)));
    }

    #[test]
    fn mapping_the_same_window_twice_is_a_noop() {
        let mut state = State::new(Screen::default());
        assert!(state.window_created_handler(handle(1)));
        state.actions.clear();
        assert!(!state.window_created_handler(handle(1)));
        assert!(state.actions.is_empty());
    }

    #[test]
    fn destroying_the_focused_window_refocuses_the_tail() {
        let mut state = State::new(Screen::default());
        state.window_created_handler(handle(1));
        state.window_created_handler(handle(2));
        state.window_created_handler(handle(3));
        state.actions.clear();
        assert!(state.window_destroyed_handler(&handle(3)));
        assert_eq!(state.focus_manager.window, Some(handle(2)));
    }

    #[test]
    fn destroying_an_unknown_window_is_a_noop() {
        let mut state = State::new(Screen::default());
        assert!(!state.window_destroyed_handler(&handle(42)));
        assert!(state.actions.is_empty());
    }

    #[test]
    fn destroying_a_hidden_window_needs_no_retile() {
        let mut state = State::new(Screen::default());
        state.workspaces[2].add_window(handle(5));
        assert!(!state.window_destroyed_handler(&handle(5)));
        assert!(!state.workspaces[2].contains(&handle(5)));
    }

    #[test]
    fn destroying_the_last_window_drops_focus_to_the_root() {
        let mut state = State::new(Screen::default());
        state.window_created_handler(handle(1));
        state.actions.clear();
        state.window_destroyed_handler(&handle(1));
        assert!(state
            .actions
            .iter()
            .any(|a| *a == DisplayAction::Unfocus(None)));
    }

    #[test]
    fn destroying_the_drag_target_ends_the_drag() {
        use crate::models::DragState;
        let mut state = State::new(Screen::default());
        state.window_created_handler(handle(1));
        let origin = crate::models::Xyhw::new(50, 60, 400, 300);
        state.floating.insert(handle(1), origin);
        state.mode = Mode::MovingWindow(DragState {
            handle: handle(1),
            start_x: 0,
            start_y: 0,
            origin,
        });
        state.actions.clear();
        state.window_destroyed_handler(&handle(1));
        assert_eq!(state.mode, Mode::Normal);
        assert!(state
            .actions
            .iter()
            .any(|a| *a == DisplayAction::UngrabPointer));
        assert!(state.floating.is_empty());
    }

    #[test]
    fn configure_requests_from_tiled_windows_force_a_retile() {
        let mut state = State::new(Screen::default());
        state.window_created_handler(handle(1));
        state.actions.clear();
        assert!(state.configure_request_handler(&handle(1)));
        assert!(state.actions.is_empty());
    }

    #[test]
    fn configure_requests_from_floating_windows_reassert_their_geometry() {
        let mut state = State::new(Screen::default());
        state.window_created_handler(handle(1));
        let geom = crate::models::Xyhw::new(10, 10, 300, 200);
        state.floating.insert(handle(1), geom);
        state.actions.clear();
        assert!(!state.configure_request_handler(&handle(1)));
        assert_eq!(
            state.actions.pop_back(),
            Some(DisplayAction::ConfigureWindow(handle(1), geom))
        );
    }
}
