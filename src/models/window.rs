//! Window identification.
#![allow(clippy::module_name_repetitions)]

use serde::{Deserialize, Serialize};
use std::os::raw::c_ulong;

/// An opaque identifier for a client window, issued by the display server.
/// The window manager never owns the window's content, only metadata keyed
/// by this handle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowHandle {
    MockHandle(u32),
    XlibHandle(c_ulong),
}
