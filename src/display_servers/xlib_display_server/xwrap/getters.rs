//! `XWrap` getters.
use super::XWrap;
use std::os::raw::c_ulong;
use x11_dl::xlib;

impl XWrap {
    #[must_use]
    pub const fn get_default_root(&self) -> xlib::Window {
        self.root
    }

    /// The size of the default screen in pixels.
    // `XDisplayWidth`: https://tronche.com/gui/x/xlib/display/display-macros.html#DisplayWidth
    #[must_use]
    pub fn get_screen_size(&self) -> (i32, i32) {
        unsafe {
            let screen = (self.xlib.XDefaultScreen)(self.display);
            (
                (self.xlib.XDisplayWidth)(self.display, screen),
                (self.xlib.XDisplayHeight)(self.display, screen),
            )
        }
    }

    /// The attributes of a window, if the server still knows it.
    // `XGetWindowAttributes`: https://tronche.com/gui/x/xlib/window-information/XGetWindowAttributes.html
    pub fn get_window_attrs(&self, window: xlib::Window) -> Option<xlib::XWindowAttributes> {
        let mut attrs: xlib::XWindowAttributes = unsafe { std::mem::zeroed() };
        let status = unsafe { (self.xlib.XGetWindowAttributes)(self.display, window, &mut attrs) };
        if status == 0 {
            return None;
        }
        Some(attrs)
    }

    /// Allocates a color in the default colormap, falling back to a
    /// known pixel when the allocation fails.
    // `XAllocColor`: https://tronche.com/gui/x/xlib/color/XAllocColor.html
    #[must_use]
    pub fn alloc_color(&self, (red, green, blue): (u16, u16, u16), fallback: c_ulong) -> c_ulong {
        unsafe {
            let screen = (self.xlib.XDefaultScreen)(self.display);
            let colormap = (self.xlib.XDefaultColormap)(self.display, screen);
            let mut color = xlib::XColor {
                pixel: 0,
                red,
                green,
                blue,
                flags: 0,
                pad: 0,
            };
            if (self.xlib.XAllocColor)(self.display, colormap, &mut color) == 0 {
                return fallback;
            }
            color.pixel
        }
    }

    #[must_use]
    pub fn black_pixel(&self) -> c_ulong {
        unsafe {
            let screen = (self.xlib.XDefaultScreen)(self.display);
            (self.xlib.XBlackPixel)(self.display, screen)
        }
    }

    #[must_use]
    pub fn white_pixel(&self) -> c_ulong {
        unsafe {
            let screen = (self.xlib.XDefaultScreen)(self.display);
            (self.xlib.XWhitePixel)(self.display, screen)
        }
    }
}
