//! The blocking event loop at the heart of the window manager.
use crate::display_servers::DisplayServer;
use crate::models::Manager;

impl<SERVER: DisplayServer> Manager<SERVER> {
    /// Runs until a quit command is handled. Each iteration blocks on
    /// one display event, lets the handlers mutate the state, retiles if
    /// the handlers asked for it, then drains the queued actions back to
    /// the display server.
    pub fn event_loop(&mut self) {
        while !self.state.exit_requested {
            self.display_server.flush();
            let event = self.display_server.wait_for_event();
            let needs_update = self.display_event_handler(event);
            if needs_update {
                self.state.update_layout();
            }
            while let Some(action) = self.state.actions.pop_front() {
                self.display_server.execute_action(action);
            }
        }
        tracing::info!("exiting event loop");
    }
}

#[cfg(test)]
mod tests {
    use crate::display_servers::MockDisplayServer;
    use crate::models::{Manager, WindowHandle};
    use crate::{Command, DisplayAction, DisplayEvent};

    fn handle(id: u32) -> WindowHandle {
        WindowHandle::MockHandle(id)
    }

    fn quitting_manager(events: Vec<DisplayEvent>) -> Manager<MockDisplayServer> {
        let mut manager = Manager::new_test();
        manager.display_server.queued_events.extend(events);
        manager
            .display_server
            .queued_events
            .push_back(DisplayEvent::SendCommand(Command::Quit));
        manager
    }

    #[test]
    fn the_loop_stops_on_quit() {
        let mut manager = quitting_manager(vec![]);
        manager.event_loop();
        assert!(manager.state.exit_requested);
        assert!(manager
            .display_server
            .executed_actions
            .contains(&DisplayAction::TeardownGrabs));
    }

    #[test]
    fn a_mapped_window_gets_tiled_and_focused() {
        let mut manager = quitting_manager(vec![DisplayEvent::WindowCreate(handle(1))]);
        manager.event_loop();
        let acts = &manager.display_server.executed_actions;
        assert!(acts.contains(&DisplayAction::AddedWindow(handle(1))));
        assert!(acts.iter().any(|a| matches!(
            a,
            DisplayAction::ConfigureWindow(h, _) if *h == handle(1)
        )));
        assert!(acts.iter().any(|a| matches!(
            a,
            DisplayAction::WindowTakeFocus { handle: h, .. } if *h == handle(1)
        )));
    }

    #[test]
    fn actions_are_executed_in_queue_order() {
        let mut manager = quitting_manager(vec![
            DisplayEvent::WindowCreate(handle(1)),
            DisplayEvent::WindowCreate(handle(2)),
        ]);
        manager.event_loop();
        let acts = &manager.display_server.executed_actions;
        let added_1 = acts
            .iter()
            .position(|a| *a == DisplayAction::AddedWindow(handle(1)));
        let added_2 = acts
            .iter()
            .position(|a| *a == DisplayAction::AddedWindow(handle(2)));
        assert!(added_1 < added_2);
    }
}
