//! `XWrap` setters.
use super::XWrap;
use std::ffi::CString;
use std::os::raw::{c_char, c_long, c_ulong};
use x11_dl::xlib;

impl XWrap {
    /// Sets the client list to the currently managed windows. The
    /// stacking variant mirrors it; stacking order is not tracked
    /// separately.
    // `XDeleteProperty`: https://tronche.com/gui/x/xlib/window-information/XDeleteProperty.html
    pub fn set_client_list(&self, windows: &[xlib::Window]) {
        for atom in [self.atoms.NetClientList, self.atoms.NetClientListStacking] {
            unsafe {
                (self.xlib.XDeleteProperty)(self.display, self.root, atom);
            }
            for w in windows {
                let list = [*w as c_long];
                self.append_property_long(self.root, atom, xlib::XA_WINDOW, &list);
            }
        }
    }

    /// Sets the names of the desktops.
    // `Xutf8TextListToTextProperty`: https://linux.die.net/man/3/xutf8textlisttotextproperty
    // `XSetTextProperty`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XSetTextProperty.html
    pub fn set_desktop_names(&self, names: &[String]) {
        let mut text: xlib::XTextProperty = unsafe { std::mem::zeroed() };
        unsafe {
            let mut clist: Vec<*mut c_char> = names
                .iter()
                .map(|name| CString::new(name.clone()).unwrap_or_default().into_raw())
                .collect();
            (self.xlib.Xutf8TextListToTextProperty)(
                self.display,
                clist.as_mut_ptr(),
                clist.len() as i32,
                xlib::XUTF8StringStyle,
                &mut text,
            );
            (self.xlib.XSetTextProperty)(
                self.display,
                self.root,
                &mut text,
                self.atoms.NetDesktopNames,
            );
        }
    }

    /// Sets the current desktop.
    pub fn set_current_desktop(&self, index: usize) {
        self.set_desktop_prop(&[index as u32], self.atoms.NetCurrentDesktop);
    }

    /// Sets what desktop a window is on.
    pub fn set_window_desktop(&self, window: xlib::Window, index: usize) {
        let data = [index as c_long];
        self.replace_property_long(window, self.atoms.NetWMDesktop, xlib::XA_CARDINAL, &data);
    }

    /// Sets a desktop property.
    pub fn set_desktop_prop(&self, data: &[u32], atom: c_ulong) {
        let x_data: Vec<c_long> = data.iter().map(|x| c_long::from(*x)).collect();
        self.replace_property_long(self.root, atom, xlib::XA_CARDINAL, &x_data);
    }

    /// Sets a desktop property with type string.
    // `XChangeProperty`: https://tronche.com/gui/x/xlib/window-information/XChangeProperty.html
    pub fn set_desktop_prop_string(&self, value: &str, atom: c_ulong, type_: c_ulong) {
        if let Ok(cstring) = CString::new(value) {
            unsafe {
                (self.xlib.XChangeProperty)(
                    self.display,
                    self.root,
                    atom,
                    type_,
                    8,
                    xlib::PropModeReplace,
                    cstring.as_ptr().cast::<u8>(),
                    value.len() as i32,
                );
            }
        }
    }

    /// Replaces a property of a window.
    // `XChangeProperty`: https://tronche.com/gui/x/xlib/window-information/XChangeProperty.html
    pub fn replace_property_long(
        &self,
        window: xlib::Window,
        property: xlib::Atom,
        type_: xlib::Atom,
        data: &[c_long],
    ) {
        unsafe {
            (self.xlib.XChangeProperty)(
                self.display,
                window,
                property,
                type_,
                32,
                xlib::PropModeReplace,
                data.as_ptr().cast::<u8>(),
                data.len() as i32,
            );
        }
    }

    /// Appends to a property of a window.
    // `XChangeProperty`: https://tronche.com/gui/x/xlib/window-information/XChangeProperty.html
    pub fn append_property_long(
        &self,
        window: xlib::Window,
        property: xlib::Atom,
        type_: xlib::Atom,
        data: &[c_long],
    ) {
        unsafe {
            (self.xlib.XChangeProperty)(
                self.display,
                window,
                property,
                type_,
                32,
                xlib::PropModeAppend,
                data.as_ptr().cast::<u8>(),
                data.len() as i32,
            );
        }
    }

    /// Sets the border color of a window.
    // `XSetWindowBorder`: https://tronche.com/gui/x/xlib/window/XSetWindowBorder.html
    pub fn set_window_border_color(&self, window: xlib::Window, color: c_ulong) {
        unsafe {
            (self.xlib.XSetWindowBorder)(self.display, window, color);
        }
    }
}
