//! The Xlib backend. Owns the only [`XWrap`] instance and maps
//! [`DisplayAction`]s onto Xlib calls.
mod event_translate;
mod xatom;
mod xwrap;

use self::event_translate::XEvent;
use self::xwrap::XWrap;
use super::DisplayServer;
use crate::config;
use crate::display_action::DisplayAction;
use crate::display_event::DisplayEvent;
use crate::models::{Screen, WindowHandle};
use crate::Result;
use x11_dl::xlib;

pub struct XlibDisplayServer {
    xw: XWrap,
}

impl DisplayServer for XlibDisplayServer {
    fn new() -> Result<Self> {
        let mut xw = XWrap::new()?;
        xw.init(&config::default_keybinds())?;
        Ok(Self { xw })
    }

    fn screen(&self) -> Screen {
        let (width, height) = self.xw.get_screen_size();
        Screen {
            root: WindowHandle::XlibHandle(self.xw.get_default_root()),
            width,
            height,
        }
    }

    fn wait_for_event(&mut self) -> DisplayEvent {
        loop {
            let raw_event = self.xw.next_event();
            if let Some(event) = Option::from(XEvent(&mut self.xw, raw_event)) {
                return event;
            }
        }
    }

    fn execute_action(&mut self, action: DisplayAction) {
        tracing::trace!("executing action {action:?}");
        match action {
            DisplayAction::AddedWindow(handle) => {
                if let WindowHandle::XlibHandle(window) = handle {
                    self.xw.setup_managed_window(window);
                }
            }
            DisplayAction::DestroyedWindow(handle) => {
                if let WindowHandle::XlibHandle(window) = handle {
                    self.xw.teardown_managed_window(window);
                }
            }
            DisplayAction::ConfigureWindow(handle, xyhw) => {
                if let WindowHandle::XlibHandle(window) = handle {
                    self.xw.move_resize_window(window, xyhw);
                }
            }
            DisplayAction::ConfigureNotify(handle, xyhw) => {
                if let WindowHandle::XlibHandle(window) = handle {
                    self.xw.configure_notify(window, xyhw);
                }
            }
            DisplayAction::MoveToTop(handle) => {
                if let WindowHandle::XlibHandle(window) = handle {
                    self.xw.move_to_top(window);
                }
            }
            DisplayAction::HideWindow(handle) => {
                if let WindowHandle::XlibHandle(window) = handle {
                    self.xw.hide_window(window);
                }
            }
            DisplayAction::ShowWindow(handle) => {
                if let WindowHandle::XlibHandle(window) = handle {
                    self.xw.show_window(window);
                }
            }
            DisplayAction::WindowTakeFocus { handle, previous } => {
                if let WindowHandle::XlibHandle(window) = handle {
                    self.xw.window_take_focus(window, as_xlib(previous));
                }
            }
            DisplayAction::Unfocus(previous) => self.xw.unfocus(as_xlib(previous)),
            DisplayAction::KillWindow(handle) => {
                if let WindowHandle::XlibHandle(window) = handle {
                    self.xw.kill_window(window);
                }
            }
            DisplayAction::GrabPointer => self.xw.grab_pointer(),
            DisplayAction::UngrabPointer => self.xw.ungrab_pointer(),
            DisplayAction::SetCurrentWorkspace(index) => self.xw.set_current_desktop(index),
            DisplayAction::SetWindowWorkspace(handle, index) => {
                if let WindowHandle::XlibHandle(window) = handle {
                    self.xw.set_window_desktop(window, index);
                }
            }
            DisplayAction::SetClientList(handles) => {
                let windows: Vec<xlib::Window> = handles
                    .into_iter()
                    .filter_map(|h| match h {
                        WindowHandle::XlibHandle(w) => Some(w),
                        WindowHandle::MockHandle(_) => None,
                    })
                    .collect();
                self.xw.set_client_list(&windows);
            }
            DisplayAction::TeardownGrabs => self.xw.teardown_grabs(),
        }
    }

    fn flush(&self) {
        self.xw.flush();
    }
}

fn as_xlib(handle: Option<WindowHandle>) -> Option<xlib::Window> {
    match handle {
        Some(WindowHandle::XlibHandle(window)) => Some(window),
        _ => None,
    }
}
