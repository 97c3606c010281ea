//! A wrapper around calls to xlib and X related functions.
// We allow this so that extern "C" functions are not flagged as confusing. The current placement
// allows for easy reading.
#![allow(clippy::items_after_statements)]
use super::xatom::XAtom;
use crate::config::{self, Keybind};
use crate::{Result, StackWmError};
use std::os::raw::{c_int, c_long, c_ulong};
use std::sync::atomic::{AtomicBool, Ordering};
use std::{ptr, slice};
use x11_dl::xlib;

mod getters;
mod keyboard;
mod setters;
mod window;

pub const ROOT_EVENT_MASK: c_long = xlib::SubstructureRedirectMask
    | xlib::SubstructureNotifyMask
    | xlib::StructureNotifyMask
    | xlib::ButtonPressMask;

pub const MANAGED_WINDOW_EVENT_MASK: c_long =
    xlib::EnterWindowMask | xlib::FocusChangeMask | xlib::PropertyChangeMask;

const BUTTONMASK: c_long = xlib::ButtonPressMask | xlib::ButtonReleaseMask | xlib::ButtonMotionMask;
const MOUSEMASK: c_long = BUTTONMASK | xlib::PointerMotionMask;

static WM_DETECTED: AtomicBool = AtomicBool::new(false);

pub struct Colors {
    pub focused: c_ulong,
    pub unfocused: c_ulong,
}

/// Contains Xserver information and origins.
pub struct XWrap {
    xlib: xlib::Xlib,
    display: *mut xlib::Display,
    root: xlib::Window,
    pub atoms: XAtom,
    pub colors: Colors,
    pub managed_windows: Vec<xlib::Window>,
}

impl XWrap {
    /// Opens the display and allocates the resources every later call
    /// needs. Does not touch the root window yet; that happens in
    /// [`XWrap::init`].
    // `XOpenDisplay`: https://tronche.com/gui/x/xlib/display/opening.html
    // `XDefaultRootWindow`: https://tronche.com/gui/x/xlib/display/display-macros.html#DefaultRootWindow
    pub fn new() -> Result<Self> {
        let xlib = xlib::Xlib::open().map_err(|_| StackWmError::XConnectionFailed)?;
        let display = unsafe { (xlib.XOpenDisplay)(ptr::null()) };
        if display.is_null() {
            return Err(StackWmError::XConnectionFailed);
        }

        let atoms = XAtom::new(&xlib, display);
        let root = unsafe { (xlib.XDefaultRootWindow)(display) };

        let mut xw = Self {
            xlib,
            display,
            root,
            atoms,
            colors: Colors {
                focused: 0,
                unfocused: 0,
            },
            managed_windows: vec![],
        };
        xw.colors = Colors {
            focused: xw.alloc_color(config::FOCUSED_BORDER_COLOR, xw.white_pixel()),
            unfocused: xw.alloc_color(config::UNFOCUSED_BORDER_COLOR, xw.black_pixel()),
        };
        Ok(xw)
    }

    /// Registers as the window manager and sets up the root window.
    ///
    /// # Errors
    /// Fails when another window manager already holds the substructure
    /// redirection on the root window.
    // `XSetErrorHandler`: https://tronche.com/gui/x/xlib/event-handling/protocol-errors/XSetErrorHandler.html
    // `XSelectInput`: https://tronche.com/gui/x/xlib/event-handling/XSelectInput.html
    pub fn init(&mut self, keybinds: &[Keybind]) -> Result<()> {
        // Only one client may select substructure redirection; the
        // request fails with BadAccess when a WM is already running.
        extern "C" fn startup_check_for_other_wm(
            _: *mut xlib::Display,
            _: *mut xlib::XErrorEvent,
        ) -> c_int {
            WM_DETECTED.store(true, Ordering::SeqCst);
            0
        }
        unsafe {
            (self.xlib.XSetErrorHandler)(Some(startup_check_for_other_wm));
            (self.xlib.XSelectInput)(self.display, self.root, ROOT_EVENT_MASK);
        }
        self.sync();
        if WM_DETECTED.load(Ordering::SeqCst) {
            return Err(StackWmError::RootRegistrationDenied);
        }

        // This is allowed for now as const extern fns
        // are not yet stable (1.56.0, 16 Sept 2021)
        // see issue #64926 <https://github.com/rust-lang/rust/issues/64926> for more information.
        #[allow(clippy::missing_const_for_fn)]
        extern "C" fn on_error_from_xlib(
            _: *mut xlib::Display,
            er: *mut xlib::XErrorEvent,
        ) -> c_int {
            let err = unsafe { *er };
            // Ignore bad window errors; clients may be gone before our
            // requests about them arrive.
            if err.error_code == xlib::BadWindow {
                return 0;
            }
            1
        }
        unsafe { (self.xlib.XSetErrorHandler)(Some(on_error_from_xlib)) };

        // Setup cached keymap/modifier information, otherwise MappingNotify might never be called
        // from:
        // https://stackoverflow.com/questions/35569562/how-to-catch-keyboard-layout-change-event-and-get-current-new-keyboard-layout-on
        self.keysym_to_keycode(x11_dl::keysym::XK_F1);

        self.init_ewmh();
        self.reset_grabs(keybinds);
        self.sync();
        Ok(())
    }

    // EWMH compliance.
    // `XDeleteProperty`: https://tronche.com/gui/x/xlib/window-information/XDeleteProperty.html
    fn init_ewmh(&self) {
        let supported: Vec<c_long> = self
            .atoms
            .net_supported()
            .iter()
            .map(|&atom| atom as c_long)
            .collect();
        self.replace_property_long(self.root, self.atoms.NetSupported, xlib::XA_ATOM, &supported);
        unsafe {
            (self.xlib.XDeleteProperty)(self.display, self.root, self.atoms.NetClientList);
        }
        self.set_desktop_prop(&[config::MAX_WORKSPACES as u32], self.atoms.NetNumberOfDesktops);
        self.set_desktop_prop(&[0, xlib::CurrentTime as u32], self.atoms.NetCurrentDesktop);
        self.replace_property_long(
            self.root,
            self.atoms.NetSupportingWmCheck,
            xlib::XA_WINDOW,
            &[self.root as c_long],
        );
        self.set_desktop_prop_string("stackwm", self.atoms.NetWMName, self.atoms.UTF8String);
        self.init_desktops_hints();
    }

    /// EWMH support used for bars and pagers.
    fn init_desktops_hints(&self) {
        let names: Vec<String> = (1..=config::MAX_WORKSPACES).map(|i| i.to_string()).collect();
        self.set_desktop_names(&names);
        // Every workspace covers the whole screen; nothing reserves a strut.
        let (width, height) = self.get_screen_size();
        let mut workarea: Vec<c_long> = Vec::with_capacity(config::MAX_WORKSPACES * 4);
        for _ in 0..config::MAX_WORKSPACES {
            workarea.extend_from_slice(&[0, 0, c_long::from(width), c_long::from(height)]);
        }
        self.replace_property_long(self.root, self.atoms.NetWorkArea, xlib::XA_CARDINAL, &workarea);
    }

    /// Send a xevent atom for a window to X.
    // `XSendEvent`: https://tronche.com/gui/x/xlib/event-handling/XSendEvent.html
    fn send_xevent_atom(&self, window: xlib::Window, atom: xlib::Atom) -> bool {
        if self.can_send_xevent_atom(window, atom) {
            let mut msg: xlib::XClientMessageEvent = unsafe { std::mem::zeroed() };
            msg.type_ = xlib::ClientMessage;
            msg.window = window;
            msg.message_type = self.atoms.WMProtocols;
            msg.format = 32;
            msg.data.set_long(0, atom as c_long);
            msg.data.set_long(1, xlib::CurrentTime as c_long);
            let mut ev: xlib::XEvent = msg.into();
            self.send_xevent(window, 0, xlib::NoEventMask, &mut ev);
            return true;
        }
        false
    }

    /// Send a xevent for a window to X.
    // `XSendEvent`: https://tronche.com/gui/x/xlib/event-handling/XSendEvent.html
    pub fn send_xevent(
        &self,
        window: xlib::Window,
        propogate: i32,
        mask: c_long,
        event: &mut xlib::XEvent,
    ) {
        unsafe { (self.xlib.XSendEvent)(self.display, window, propogate, mask, event) };
        self.sync();
    }

    /// Returns whether a window can recieve a xevent atom.
    // `XGetWMProtocols`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetWMProtocols.html
    fn can_send_xevent_atom(&self, window: xlib::Window, atom: xlib::Atom) -> bool {
        unsafe {
            let mut array: *mut xlib::Atom = std::mem::zeroed();
            let mut length: c_int = std::mem::zeroed();
            let status: xlib::Status =
                (self.xlib.XGetWMProtocols)(self.display, window, &mut array, &mut length);
            let protocols: &[xlib::Atom] = slice::from_raw_parts(array, length as usize);
            status > 0 && protocols.contains(&atom)
        }
    }

    /// Grabs the pointer for the duration of a drag. Motion and release
    /// events flow to us even when the pointer leaves the window.
    // `XGrabPointer`: https://tronche.com/gui/x/xlib/input/XGrabPointer.html
    pub fn grab_pointer(&self) {
        unsafe {
            (self.xlib.XGrabPointer)(
                self.display,
                self.root,
                0,
                MOUSEMASK as u32,
                xlib::GrabModeAsync,
                xlib::GrabModeAsync,
                0,
                0,
                xlib::CurrentTime,
            );
        }
    }

    // `XUngrabPointer`: https://tronche.com/gui/x/xlib/input/XUngrabPointer.html
    pub fn ungrab_pointer(&self) {
        unsafe {
            (self.xlib.XUngrabPointer)(self.display, xlib::CurrentTime);
        }
    }

    /// Releases every grab we hold and stops listening on the root.
    /// Called right before exit so clients get their input back.
    pub fn teardown_grabs(&self) {
        self.ungrab_keys();
        for window in &self.managed_windows {
            self.ungrab_buttons(*window);
        }
        self.ungrab_pointer();
        unsafe {
            (self.xlib.XSelectInput)(self.display, self.root, xlib::NoEventMask);
        }
        self.sync();
    }

    /// Flush and sync the xserver.
    // `XSync`: https://tronche.com/gui/x/xlib/event-handling/XSync.html
    pub fn sync(&self) {
        unsafe { (self.xlib.XSync)(self.display, xlib::False) };
    }

    /// Flush the xserver.
    // `XFlush`: https://tronche.com/gui/x/xlib/event-handling/XFlush.html
    pub fn flush(&self) {
        unsafe { (self.xlib.XFlush)(self.display) };
    }

    /// Blocks until the next raw event arrives.
    // `XNextEvent`: https://tronche.com/gui/x/xlib/event-handling/manipulating-event-queue/XNextEvent.html
    pub fn next_event(&self) -> xlib::XEvent {
        let mut event: xlib::XEvent = unsafe { std::mem::zeroed() };
        unsafe {
            (self.xlib.XNextEvent)(self.display, &mut event);
        }
        event
    }
}
