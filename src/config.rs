//! Compile-time configuration. There is no runtime config file; editing
//! these values and rebuilding is the supported way to customize.

use crate::command::Command;
use crate::models::FocusBehaviour;
use crate::utils::modmask_lookup::{ModMask, XKeysym};
use x11_dl::keysym;
use x11_dl::xlib;

pub const MAX_WORKSPACES: usize = 9;
pub const DEFAULT_GAP: i32 = 20;
pub const DEFAULT_RATIO: f32 = 0.6;
pub const BORDER_WIDTH: i32 = 2;
pub const MIN_FLOAT_SIZE: i32 = 100;
pub const FOCUS_BEHAVIOUR: FocusBehaviour = FocusBehaviour::ClickTo;

/// The Super/Windows key.
pub const MOD_KEY: ModMask = xlib::Mod4Mask;

pub const TERMINAL: &str = "st";
pub const LAUNCHER: &str = "dmenu_run";

/// (red, green, blue) in X11 16-bit channel values.
pub const FOCUSED_BORDER_COLOR: (u16, u16, u16) = (65535, 42405, 0);
pub const UNFOCUSED_BORDER_COLOR: (u16, u16, u16) = (30000, 30000, 30000);

pub struct Keybind {
    pub command: Command,
    pub modifier: ModMask,
    pub keysym: XKeysym,
}

#[must_use]
pub fn default_keybinds() -> Vec<Keybind> {
    let mut binds = vec![
        bind(Command::Execute(TERMINAL.to_owned()), MOD_KEY, keysym::XK_Return),
        bind(Command::Execute(LAUNCHER.to_owned()), MOD_KEY, keysym::XK_d),
        bind(Command::ToggleFloating, MOD_KEY, keysym::XK_space),
        bind(Command::Quit, MOD_KEY, keysym::XK_Escape),
        bind(Command::CloseWindow, MOD_KEY, keysym::XK_q),
        bind(Command::FocusWindowDown, MOD_KEY, keysym::XK_j),
        bind(Command::FocusWindowUp, MOD_KEY, keysym::XK_k),
        bind(Command::MoveWindowDown, MOD_KEY | xlib::ShiftMask, keysym::XK_j),
        bind(Command::MoveWindowUp, MOD_KEY | xlib::ShiftMask, keysym::XK_k),
        // The plus key reports XK_equal at shift level zero, so bind both.
        bind(Command::IncreaseGap, MOD_KEY, keysym::XK_plus),
        bind(Command::IncreaseGap, MOD_KEY, keysym::XK_equal),
        bind(Command::DecreaseGap, MOD_KEY, keysym::XK_minus),
        bind(Command::DecreaseMainWidth, MOD_KEY, keysym::XK_h),
        bind(Command::IncreaseMainWidth, MOD_KEY, keysym::XK_l),
    ];
    for i in 0..MAX_WORKSPACES {
        let key = keysym::XK_1 + i as u32;
        binds.push(bind(Command::GotoWorkspace(i), MOD_KEY, key));
        binds.push(bind(
            Command::SendWindowToWorkspace(i),
            MOD_KEY | xlib::ShiftMask,
            key,
        ));
    }
    binds
}

/// Looks up the command bound to a key combination. `mask` must already
/// be cleaned of NumLock and CapsLock bits.
#[must_use]
pub fn command_for_key(mask: ModMask, keysym: XKeysym) -> Option<Command> {
    default_keybinds()
        .into_iter()
        .find(|b| b.modifier == mask && b.keysym == keysym)
        .map(|b| b.command)
}

fn bind(command: Command, modifier: ModMask, keysym: u32) -> Keybind {
    Keybind {
        command,
        modifier,
        keysym,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_workspace_has_goto_and_send_binds() {
        let binds = default_keybinds();
        for i in 0..MAX_WORKSPACES {
            assert!(binds.iter().any(|b| b.command == Command::GotoWorkspace(i)));
            assert!(binds
                .iter()
                .any(|b| b.command == Command::SendWindowToWorkspace(i)));
        }
    }

    #[test]
    fn lookup_distinguishes_shifted_binds() {
        assert_eq!(
            command_for_key(MOD_KEY, keysym::XK_j),
            Some(Command::FocusWindowDown)
        );
        assert_eq!(
            command_for_key(MOD_KEY | xlib::ShiftMask, keysym::XK_j),
            Some(Command::MoveWindowDown)
        );
        assert_eq!(command_for_key(xlib::ShiftMask, keysym::XK_j), None);
    }

    #[test]
    fn the_unshifted_plus_key_still_grows_the_gap() {
        assert_eq!(
            command_for_key(MOD_KEY, keysym::XK_equal),
            Some(Command::IncreaseGap)
        );
        assert_eq!(
            command_for_key(MOD_KEY, keysym::XK_plus),
            Some(Command::IncreaseGap)
        );
    }
}
