use crate::command::Command;
use crate::display_action::DisplayAction;
use crate::models::Xyhw;
use crate::state::State;
use crate::utils::child_process;

const GAP_STEP: i32 = 2;
const RATIO_STEP: f32 = 0.05;
const RATIO_MIN: f32 = 0.1;
const RATIO_MAX: f32 = 0.9;

impl State {
    /// Executes a user command. Returns true when the visible workspace
    /// needs to be retiled.
    pub fn command_handler(&mut self, command: &Command) -> bool {
        tracing::debug!("running command {command:?}");
        match command {
            Command::Execute(shell_command) => {
                child_process::spawn(shell_command);
                false
            }
            Command::CloseWindow => {
                if let Some(handle) = self.focus_manager.window {
                    // Removal happens when the destroy notification comes
                    // back, not here.
                    self.actions.push_back(DisplayAction::KillWindow(handle));
                }
                false
            }
            Command::Quit => {
                self.exit_requested = true;
                self.actions.push_back(DisplayAction::TeardownGrabs);
                false
            }
            Command::ToggleFloating => self.toggle_floating(),
            Command::FocusWindowDown => self.focus_relative(1),
            Command::FocusWindowUp => self.focus_relative(-1),
            Command::MoveWindowDown => self.current_mut().reorder_focused(1),
            Command::MoveWindowUp => self.current_mut().reorder_focused(-1),
            Command::IncreaseGap => {
                self.gap += GAP_STEP;
                true
            }
            Command::DecreaseGap => {
                let old = self.gap;
                self.gap = (self.gap - GAP_STEP).max(0);
                self.gap != old
            }
            Command::IncreaseMainWidth => self.adjust_ratio(RATIO_STEP),
            Command::DecreaseMainWidth => self.adjust_ratio(-RATIO_STEP),
            Command::GotoWorkspace(id) => self.goto_workspace(*id),
            Command::SendWindowToWorkspace(id) => self.send_window_to_workspace(*id),
        }
    }

    fn focus_relative(&mut self, shift: i32) -> bool {
        if let Some(next) = self.current().relative_window(shift) {
            self.focus_window(&next);
        }
        false
    }

    fn adjust_ratio(&mut self, step: f32) -> bool {
        let old = self.ratio;
        self.ratio = (self.ratio + step).clamp(RATIO_MIN, RATIO_MAX);
        (self.ratio - old).abs() > f32::EPSILON
    }

    /// Pops the focused window out of the tiling (or drops it back in).
    /// A freshly floated window gets a quarter-screen geometry centered
    /// on the screen and is raised above the tiles.
    fn toggle_floating(&mut self) -> bool {
        let Some(handle) = self.focus_manager.window else {
            return false;
        };
        if self.floating.remove(&handle).is_some() {
            return true;
        }
        let geometry = Xyhw::new(
            self.screen.width / 4,
            self.screen.height / 4,
            self.screen.width / 2,
            self.screen.height / 2,
        );
        self.floating.insert(handle, geometry);
        self.actions
            .push_back(DisplayAction::ConfigureWindow(handle, geometry));
        self.actions.push_back(DisplayAction::MoveToTop(handle));
        true
    }
}
