use crate::config;
use crate::display_servers::DisplayServer;
use crate::models::{Manager, Mode};
use crate::DisplayEvent;

impl<SERVER: DisplayServer> Manager<SERVER> {
    /// Routes a translated display event to its handler. Returns true when
    /// the visible workspace needs to be retiled.
    pub fn display_event_handler(&mut self, event: DisplayEvent) -> bool {
        let state = &mut self.state;
        match event {
            DisplayEvent::WindowCreate(handle) => state.window_created_handler(handle),
            DisplayEvent::WindowDestroy(handle) => state.window_destroyed_handler(&handle),
            DisplayEvent::ConfigureRequest(handle) => state.configure_request_handler(&handle),
            DisplayEvent::KeyCombo(mask, keysym) => {
                match config::command_for_key(mask, keysym) {
                    Some(command) => state.command_handler(&command),
                    None => false,
                }
            }
            DisplayEvent::SendCommand(command) => state.command_handler(&command),
            DisplayEvent::MouseCombo(mask, button, handle, x, y) => {
                state.mouse_combo_handler(mask, button, handle, x, y)
            }
            DisplayEvent::ButtonRelease => {
                // Always drop the grab, even if the drag never produced a
                // single motion event.
                state.mode = Mode::Normal;
                state
                    .actions
                    .push_back(crate::DisplayAction::UngrabPointer);
                false
            }
            DisplayEvent::Movement(x, y) => match state.mode {
                Mode::MovingWindow(drag) => state.window_move_handler(&drag, x, y),
                Mode::ResizingWindow(drag) => state.window_resize_handler(&drag, x, y),
                Mode::Normal => false,
            },
            DisplayEvent::MouseEnteredWindow(handle) => {
                if state.focus_manager.behaviour.is_sloppy() {
                    state.focus_window(&handle);
                }
                false
            }
            DisplayEvent::FocusedWindowChanged(handle) => {
                state.sync_focus_bookkeeping(&handle);
                false
            }
            DisplayEvent::WindowTakeFocus(handle) => state.activate_window(&handle),
            DisplayEvent::Unknown(kind) => {
                tracing::trace!("unhandled event of kind {kind}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Manager, Mode, WindowHandle};
    use crate::{DisplayAction, DisplayEvent};

    #[test]
    fn button_release_always_resets_the_mode() {
        let mut manager = Manager::new_test();
        manager.state.mode = Mode::MovingWindow(crate::models::DragState {
            handle: WindowHandle::MockHandle(1),
            start_x: 0,
            start_y: 0,
            origin: crate::models::Xyhw::new(0, 0, 100, 100),
        });
        assert!(!manager.display_event_handler(DisplayEvent::ButtonRelease));
        assert_eq!(manager.state.mode, Mode::Normal);
        assert_eq!(
            manager.state.actions.pop_back(),
            Some(DisplayAction::UngrabPointer)
        );
    }

    #[test]
    fn motion_outside_a_drag_is_ignored() {
        let mut manager = Manager::new_test();
        assert!(!manager.display_event_handler(DisplayEvent::Movement(50, 50)));
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn pager_activation_of_a_hidden_window_switches_workspaces() {
        let mut manager = Manager::new_test();
        let visible = WindowHandle::MockHandle(1);
        let hidden = WindowHandle::MockHandle(2);
        manager.state.current_mut().add_window(visible);
        manager.state.focus_window(&visible);
        manager.state.workspaces[1].add_window(hidden);
        assert!(manager.display_event_handler(DisplayEvent::WindowTakeFocus(hidden)));
        assert_eq!(manager.state.current_workspace, 1);
        assert_eq!(manager.state.focus_manager.window, Some(hidden));
    }

    #[test]
    fn pointer_entry_does_not_focus_with_click_to_focus() {
        let mut manager = Manager::new_test();
        let handle = WindowHandle::MockHandle(1);
        manager.state.current_mut().add_window(handle);
        assert!(!manager.display_event_handler(DisplayEvent::MouseEnteredWindow(handle)));
        assert_eq!(manager.state.focus_manager.window, None);
    }
}
