//! The owned, mutable aggregate the whole window manager runs on. Every
//! handler mutates this struct and queues [`DisplayAction`]s on it; the
//! event loop drains the queue after each handled event.

use crate::config;
use crate::display_action::DisplayAction;
use crate::layouts;
use crate::models::{FocusManager, Mode, Screen, WindowHandle, Workspace, WorkspaceId, Xyhw};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

#[derive(Serialize, Deserialize, Debug)]
pub struct State {
    pub screen: Screen,
    pub workspaces: Vec<Workspace>,
    pub current_workspace: WorkspaceId,
    /// Floating windows and the geometry they float at. Membership in
    /// this map is what makes a window floating; the window also stays
    /// in its workspace's ordered list so it keeps its slot when tiled
    /// again.
    pub floating: HashMap<WindowHandle, Xyhw>,
    pub focus_manager: FocusManager,
    pub mode: Mode,
    pub gap: i32,
    pub ratio: f32,
    #[serde(skip)]
    pub actions: VecDeque<DisplayAction>,
    #[serde(skip)]
    pub exit_requested: bool,
}

impl State {
    #[must_use]
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            workspaces: vec![Workspace::default(); config::MAX_WORKSPACES],
            current_workspace: 0,
            floating: HashMap::new(),
            focus_manager: FocusManager::new(config::FOCUS_BEHAVIOUR),
            mode: Mode::Normal,
            gap: config::DEFAULT_GAP,
            ratio: config::DEFAULT_RATIO,
            actions: VecDeque::new(),
            exit_requested: false,
        }
    }

    #[must_use]
    pub fn current(&self) -> &Workspace {
        &self.workspaces[self.current_workspace]
    }

    pub fn current_mut(&mut self) -> &mut Workspace {
        &mut self.workspaces[self.current_workspace]
    }

    /// The workspace a window lives on, if we manage it at all.
    #[must_use]
    pub fn workspace_of(&self, handle: &WindowHandle) -> Option<WorkspaceId> {
        self.workspaces.iter().position(|ws| ws.contains(handle))
    }

    #[must_use]
    pub fn manages(&self, handle: &WindowHandle) -> bool {
        self.workspace_of(handle).is_some()
    }

    /// Whether a window is on the visible workspace.
    #[must_use]
    pub fn is_visible(&self, handle: &WindowHandle) -> bool {
        self.current().contains(handle)
    }

    #[must_use]
    pub fn is_floating(&self, handle: &WindowHandle) -> bool {
        self.floating.contains_key(handle)
    }

    /// Every managed window, grouped by workspace in stacking-list order.
    #[must_use]
    pub fn all_windows(&self) -> Vec<WindowHandle> {
        self.workspaces
            .iter()
            .flat_map(|ws| ws.windows.iter().copied())
            .collect()
    }

    /// Retiles the visible workspace and queues the resulting geometry
    /// changes. Floating windows are skipped by the arithmetic but
    /// re-raised so they stay above freshly configured tiles.
    pub fn update_layout(&mut self) {
        let tiled: Vec<WindowHandle> = self
            .current()
            .windows
            .iter()
            .filter(|w| !self.floating.contains_key(w))
            .copied()
            .collect();
        let slots = layouts::master_stack(
            tiled.len(),
            self.screen.width,
            self.screen.height,
            self.gap,
            self.ratio,
        );
        for (handle, slot) in tiled.into_iter().zip(slots) {
            self.actions
                .push_back(DisplayAction::ConfigureWindow(handle, slot));
        }
        let floating: Vec<WindowHandle> = self
            .current()
            .windows
            .iter()
            .filter(|w| self.floating.contains_key(w))
            .copied()
            .collect();
        for handle in floating {
            self.actions.push_back(DisplayAction::MoveToTop(handle));
        }
    }

    /// Re-publishes the `_NET_CLIENT_LIST` from our bookkeeping.
    pub fn update_client_list(&mut self) {
        self.actions
            .push_back(DisplayAction::SetClientList(self.all_windows()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(id: u32) -> WindowHandle {
        WindowHandle::MockHandle(id)
    }

    fn state_with_windows(ids: &[u32]) -> State {
        let mut state = State::new(Screen::default());
        for id in ids {
            state.current_mut().add_window(handle(*id));
        }
        state
    }

    #[test]
    fn a_window_lives_on_at_most_one_workspace() {
        let state = state_with_windows(&[1, 2]);
        let on: usize = state
            .workspaces
            .iter()
            .filter(|ws| ws.contains(&handle(1)))
            .count();
        assert_eq!(on, 1);
        assert_eq!(state.workspace_of(&handle(1)), Some(0));
        assert_eq!(state.workspace_of(&handle(9)), None);
    }

    #[test]
    fn update_layout_configures_tiled_windows_in_order() {
        let mut state = state_with_windows(&[1, 2]);
        state.update_layout();
        let acts: Vec<DisplayAction> = state.actions.drain(..).collect();
        assert_eq!(
            acts,
            vec![
                DisplayAction::ConfigureWindow(handle(1), Xyhw::new(20, 20, 1132, 1040)),
                DisplayAction::ConfigureWindow(handle(2), Xyhw::new(1172, 20, 728, 1040)),
            ]
        );
    }

    #[test]
    fn update_layout_skips_and_raises_floating_windows() {
        let mut state = state_with_windows(&[1, 2]);
        state.floating.insert(handle(1), Xyhw::new(0, 0, 400, 300));
        state.update_layout();
        let acts: Vec<DisplayAction> = state.actions.drain(..).collect();
        assert_eq!(
            acts,
            vec![
                DisplayAction::ConfigureWindow(handle(2), Xyhw::new(20, 20, 1880, 1040)),
                DisplayAction::MoveToTop(handle(1)),
            ]
        );
    }

    #[test]
    fn client_list_spans_all_workspaces() {
        let mut state = state_with_windows(&[1]);
        state.workspaces[3].add_window(handle(7));
        state.update_client_list();
        assert_eq!(
            state.actions.pop_back(),
            Some(DisplayAction::SetClientList(vec![handle(1), handle(7)]))
        );
    }
}
