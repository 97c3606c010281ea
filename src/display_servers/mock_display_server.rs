use super::DisplayServer;
use crate::display_action::DisplayAction;
use crate::display_event::DisplayEvent;
use crate::models::Screen;
use crate::Result;
use std::collections::VecDeque;

/// An in-memory backend for tests. Events are queued by the test and
/// every executed action is recorded for assertions.
#[derive(Default)]
pub struct MockDisplayServer {
    pub screen: Screen,
    pub queued_events: VecDeque<DisplayEvent>,
    pub executed_actions: Vec<DisplayAction>,
}

impl DisplayServer for MockDisplayServer {
    fn new() -> Result<Self> {
        Ok(Self::default())
    }

    fn screen(&self) -> Screen {
        self.screen
    }

    fn wait_for_event(&mut self) -> DisplayEvent {
        self.queued_events
            .pop_front()
            .unwrap_or(DisplayEvent::Unknown(0))
    }

    fn execute_action(&mut self, action: DisplayAction) {
        self.executed_actions.push(action);
    }

    fn flush(&self) {}
}
