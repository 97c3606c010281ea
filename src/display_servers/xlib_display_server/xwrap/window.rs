//! Xlib calls related to a window.
use super::{XWrap, BUTTONMASK, MANAGED_WINDOW_EVENT_MASK};
use crate::config;
use crate::models::Xyhw;
use std::os::raw::c_long;
use x11_dl::xlib;

impl XWrap {
    /// Sets up a window that we want to manage: border, event
    /// subscriptions, button grabs, and finally the map.
    // `XSetWindowBorderWidth`: https://tronche.com/gui/x/xlib/window/XSetWindowBorderWidth.html
    // `XMapWindow`: https://tronche.com/gui/x/xlib/window/XMapWindow.html
    pub fn setup_managed_window(&mut self, window: xlib::Window) {
        self.managed_windows.push(window);
        unsafe {
            (self.xlib.XSetWindowBorderWidth)(
                self.display,
                window,
                config::BORDER_WIDTH as u32,
            );
            (self.xlib.XSelectInput)(self.display, window, MANAGED_WINDOW_EVENT_MASK);
        }
        self.set_window_border_color(window, self.colors.unfocused);
        self.grab_buttons(window);
        unsafe {
            (self.xlib.XMapWindow)(self.display, window);
        }
        self.sync();
    }

    /// Forgets a window that is gone from the server.
    pub fn teardown_managed_window(&mut self, window: xlib::Window) {
        self.managed_windows.retain(|w| *w != window);
        self.ungrab_buttons(window);
        self.sync();
    }

    // `XMoveResizeWindow`: https://tronche.com/gui/x/xlib/window/XMoveResizeWindow.html
    pub fn move_resize_window(&self, window: xlib::Window, xyhw: Xyhw) {
        unsafe {
            (self.xlib.XMoveResizeWindow)(
                self.display,
                window,
                xyhw.x,
                xyhw.y,
                xyhw.w as u32,
                xyhw.h as u32,
            );
        }
    }

    /// Sends a synthetic configure notify describing a geometry the
    /// window did not ask for.
    pub fn configure_notify(&self, window: xlib::Window, xyhw: Xyhw) {
        let mut configure: xlib::XConfigureEvent = unsafe { std::mem::zeroed() };
        configure.type_ = xlib::ConfigureNotify;
        configure.display = self.display;
        configure.event = window;
        configure.window = window;
        configure.x = xyhw.x;
        configure.y = xyhw.y;
        configure.width = xyhw.w;
        configure.height = xyhw.h;
        configure.border_width = config::BORDER_WIDTH;
        let mut ev: xlib::XEvent = configure.into();
        self.send_xevent(window, 0, xlib::StructureNotifyMask, &mut ev);
    }

    // `XUnmapWindow`: https://tronche.com/gui/x/xlib/window/XUnmapWindow.html
    pub fn hide_window(&self, window: xlib::Window) {
        unsafe {
            (self.xlib.XUnmapWindow)(self.display, window);
        }
    }

    // `XMapWindow`: https://tronche.com/gui/x/xlib/window/XMapWindow.html
    pub fn show_window(&self, window: xlib::Window) {
        unsafe {
            (self.xlib.XMapWindow)(self.display, window);
        }
    }

    /// Raise a window.
    // `XRaiseWindow`: https://tronche.com/gui/x/xlib/window/XRaiseWindow.html
    pub fn move_to_top(&self, window: xlib::Window) {
        unsafe {
            (self.xlib.XRaiseWindow)(self.display, window);
        }
    }

    /// Kills a window.
    // `XGrabServer`: https://tronche.com/gui/x/xlib/window-and-session-manager/XGrabServer.html
    // `XKillClient`: https://tronche.com/gui/x/xlib/window-and-session-manager/XKillClient.html
    // `XUngrabServer`: https://tronche.com/gui/x/xlib/window-and-session-manager/XUngrabServer.html
    pub fn kill_window(&self, window: xlib::Window) {
        // Nicely ask the window to close.
        if !self.send_xevent_atom(window, self.atoms.WMDelete) {
            // Force kill the app.
            unsafe {
                (self.xlib.XGrabServer)(self.display);
                (self.xlib.XSetCloseDownMode)(self.display, xlib::DestroyAll);
                (self.xlib.XKillClient)(self.display, window);
                (self.xlib.XSync)(self.display, xlib::False);
                (self.xlib.XUngrabServer)(self.display);
            }
        }
    }

    /// Makes a window take focus: input focus, the focused border color,
    /// raise, and the `_NET_ACTIVE_WINDOW` mark. The previous holder
    /// gets the unfocused color back.
    // `XSetInputFocus`: https://tronche.com/gui/x/xlib/input/XSetInputFocus.html
    pub fn window_take_focus(&self, window: xlib::Window, previous: Option<xlib::Window>) {
        if let Some(previous) = previous {
            self.set_window_border_color(previous, self.colors.unfocused);
        }
        self.set_window_border_color(window, self.colors.focused);
        self.move_to_top(window);
        unsafe {
            (self.xlib.XSetInputFocus)(
                self.display,
                window,
                xlib::RevertToPointerRoot,
                xlib::CurrentTime,
            );
        }
        self.replace_property_long(
            self.root,
            self.atoms.NetActiveWindow,
            xlib::XA_WINDOW,
            &[window as c_long],
        );
    }

    /// Drops input focus back to the root window.
    // `XSetInputFocus`: https://tronche.com/gui/x/xlib/input/XSetInputFocus.html
    pub fn unfocus(&self, previous: Option<xlib::Window>) {
        if let Some(previous) = previous {
            self.set_window_border_color(previous, self.colors.unfocused);
        }
        unsafe {
            (self.xlib.XSetInputFocus)(
                self.display,
                self.root,
                xlib::RevertToPointerRoot,
                xlib::CurrentTime,
            );
        }
        self.replace_property_long(
            self.root,
            self.atoms.NetActiveWindow,
            xlib::XA_WINDOW,
            &[c_long::MAX],
        );
    }

    /// Grabs the buttons we react to on a managed window. Every press is
    /// frozen until the event loop decides whether to replay it into the
    /// client or keep it for a drag.
    // `XGrabButton`: https://tronche.com/gui/x/xlib/input/XGrabButton.html
    pub fn grab_buttons(&self, window: xlib::Window) {
        self.ungrab_buttons(window);
        for button in [xlib::Button1, xlib::Button3] {
            unsafe {
                (self.xlib.XGrabButton)(
                    self.display,
                    button,
                    xlib::AnyModifier,
                    window,
                    0,
                    BUTTONMASK as u32,
                    xlib::GrabModeSync,
                    xlib::GrabModeAsync,
                    0,
                    0,
                );
            }
        }
    }

    // `XUngrabButton`: https://tronche.com/gui/x/xlib/input/XUngrabButton.html
    pub fn ungrab_buttons(&self, window: xlib::Window) {
        unsafe {
            (self.xlib.XUngrabButton)(self.display, xlib::AnyButton as u32, xlib::AnyModifier, window);
        }
    }

    /// Unfreezes a pending button press. Replaying sends the click on to
    /// the client; keeping it asynchronous swallows it for our own use.
    // `XAllowEvents`: https://tronche.com/gui/x/xlib/input/XAllowEvents.html
    pub fn allow_pointer_events(&self, replay: bool) {
        let mode = if replay {
            xlib::ReplayPointer
        } else {
            xlib::AsyncPointer
        };
        unsafe {
            (self.xlib.XAllowEvents)(self.display, mode, xlib::CurrentTime);
        }
    }

    /// Maps a window we decided not to manage.
    pub fn map_unmanaged_window(&self, window: xlib::Window) {
        unsafe {
            (self.xlib.XMapWindow)(self.display, window);
        }
    }
}
