use crate::display_action::DisplayAction;
use crate::models::WindowHandle;
use crate::state::State;

impl State {
    /// Moves focus to a window on the visible workspace. Focusing the
    /// already focused window, an unmanaged one, or a window hidden on
    /// another workspace does nothing. Returns whether focus actually
    /// moved.
    pub fn focus_window(&mut self, handle: &WindowHandle) -> bool {
        if !self.is_visible(handle) || self.focus_manager.window == Some(*handle) {
            return false;
        }
        let previous = self.focus_manager.window.take();
        self.focus_manager.window = Some(*handle);
        self.focus_manager.last_focused = previous;
        self.current_mut().focused = Some(*handle);
        self.actions.push_back(DisplayAction::WindowTakeFocus {
            handle: *handle,
            previous,
        });
        true
    }

    /// Activates a window the way a pager asks for it: switch to its
    /// workspace first when it is hidden, then focus it. Returns whether
    /// the visible workspace changed.
    pub fn activate_window(&mut self, handle: &WindowHandle) -> bool {
        let Some(workspace) = self.workspace_of(handle) else {
            return false;
        };
        let switched = workspace != self.current_workspace && self.goto_workspace(workspace);
        self.focus_window(handle);
        switched
    }

    /// Drops focus back to the root window, unpainting the border of
    /// whichever window held it.
    pub fn unfocus(&mut self) {
        let Some(previous) = self.focus_manager.window.take() else {
            return;
        };
        self.focus_manager.last_focused = Some(previous);
        self.actions
            .push_back(DisplayAction::Unfocus(Some(previous)));
    }

    /// Records a focus change the server reported on its own, without
    /// queuing actions. Used to keep bookkeeping honest when focus moved
    /// for reasons outside our control. Reports about hidden windows are
    /// ignored; global focus only ever points at the visible workspace.
    pub fn sync_focus_bookkeeping(&mut self, handle: &WindowHandle) {
        if !self.is_visible(handle) || self.focus_manager.window == Some(*handle) {
            return;
        }
        self.focus_manager.last_focused = self.focus_manager.window.take();
        self.focus_manager.window = Some(*handle);
        self.current_mut().focused = Some(*handle);
    }
}
