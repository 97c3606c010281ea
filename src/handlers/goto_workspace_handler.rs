use crate::display_action::DisplayAction;
use crate::models::WorkspaceId;
use crate::state::State;

impl State {
    /// Switches the visible workspace. Windows on the old workspace are
    /// unmapped, not destroyed; they come back exactly as they were.
    /// Focus lands on the window the target workspace remembers, or its
    /// stack tail, or nowhere.
    pub fn goto_workspace(&mut self, id: WorkspaceId) -> bool {
        if id == self.current_workspace || id >= self.workspaces.len() {
            return false;
        }
        tracing::debug!("switching to workspace {id}");
        for handle in self.current().windows.clone() {
            self.actions.push_back(DisplayAction::HideWindow(handle));
        }
        for handle in self.workspaces[id].windows.clone() {
            self.actions.push_back(DisplayAction::ShowWindow(handle));
        }
        self.current_workspace = id;
        self.actions
            .push_back(DisplayAction::SetCurrentWorkspace(id));
        match self.current().focused.or_else(|| self.current().tail()) {
            Some(next) => {
                self.focus_window(&next);
            }
            None => self.unfocus(),
        }
        true
    }

    /// Moves the focused window to the bottom of another workspace's
    /// stack and hides it. Focus on the source workspace falls back to
    /// the new stack tail.
    pub fn send_window_to_workspace(&mut self, id: WorkspaceId) -> bool {
        if id == self.current_workspace || id >= self.workspaces.len() {
            return false;
        }
        let Some(handle) = self.focus_manager.window else {
            return false;
        };
        if !self.current().contains(&handle) {
            return false;
        }
        tracing::debug!("sending {handle:?} to workspace {id}");
        self.current_mut().remove_window(&handle);
        self.workspaces[id].add_window(handle);
        self.actions.push_back(DisplayAction::HideWindow(handle));
        self.actions
            .push_back(DisplayAction::SetWindowWorkspace(handle, id));
        match self.current().focused {
            Some(next) => {
                self.focus_window(&next);
            }
            None => self.unfocus(),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Screen, WindowHandle};

    fn handle(id: u32) -> WindowHandle {
        WindowHandle::MockHandle(id)
    }

    fn state_with_windows(ids: &[u32]) -> State {
        let mut state = State::new(Screen::default());
        for id in ids {
            state.window_created_handler(handle(*id));
        }
        state.actions.clear();
        state
    }

    #[test]
    fn switching_hides_old_windows_and_shows_new_ones() {
        let mut state = state_with_windows(&[1]);
        state.workspaces[1].add_window(handle(2));
        assert!(state.goto_workspace(1));
        let acts: Vec<DisplayAction> = state.actions.drain(..).collect();
        assert!(acts.contains(&DisplayAction::HideWindow(handle(1))));
        assert!(acts.contains(&DisplayAction::ShowWindow(handle(2))));
        assert!(acts.contains(&DisplayAction::SetCurrentWorkspace(1)));
        assert_eq!(state.current_workspace, 1);
    }

    #[test]
    fn switching_to_the_current_or_an_invalid_workspace_is_a_noop() {
        let mut state = state_with_windows(&[1]);
        assert!(!state.goto_workspace(0));
        assert!(!state.goto_workspace(99));
        assert!(state.actions.is_empty());
    }

    #[test]
    fn switching_restores_the_remembered_focus() {
        let mut state = state_with_windows(&[1, 2]);
        state.focus_window(&handle(1));
        state.goto_workspace(3);
        state.actions.clear();
        assert!(state.goto_workspace(0));
        assert_eq!(state.focus_manager.window, Some(handle(1)));
    }

    #[test]
    fn switching_to_an_empty_workspace_drops_focus() {
        let mut state = state_with_windows(&[1]);
        assert!(state.goto_workspace(5));
        assert_eq!(state.focus_manager.window, None);
        assert!(state
            .actions
            .iter()
            .any(|a| *a == DisplayAction::Unfocus(Some(handle(1)))));
    }

    #[test]
    fn sending_a_window_appends_it_to_the_target_tail() {
        let mut state = state_with_windows(&[1, 2]);
        state.workspaces[4].add_window(handle(9));
        state.focus_window(&handle(1));
        state.actions.clear();
        assert!(state.send_window_to_workspace(4));
        assert_eq!(state.workspaces[4].windows, vec![handle(9), handle(1)]);
        assert!(!state.current().contains(&handle(1)));
        assert_eq!(state.focus_manager.window, Some(handle(2)));
        assert!(state
            .actions
            .iter()
            .any(|a| *a == DisplayAction::HideWindow(handle(1))));
    }

    #[test]
    fn sending_without_a_focused_window_is_a_noop() {
        let mut state = state_with_windows(&[]);
        assert!(!state.send_window_to_workspace(2));
        assert!(state.actions.is_empty());
    }

    #[test]
    fn sending_the_last_window_leaves_the_workspace_unfocused() {
        let mut state = state_with_windows(&[1]);
        state.focus_window(&handle(1));
        state.actions.clear();
        assert!(state.send_window_to_workspace(1));
        assert_eq!(state.focus_manager.window, None);
    }
}
