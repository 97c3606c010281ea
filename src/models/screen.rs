use crate::models::{WindowHandle, Xyhw};
use serde::{Deserialize, Serialize};

/// The usable output as reported by the display server.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Screen {
    pub root: WindowHandle,
    pub width: i32,
    pub height: i32,
}

impl Screen {
    /// The full screen area at origin, used when overriding client
    /// configure requests.
    #[must_use]
    pub const fn xyhw(&self) -> Xyhw {
        Xyhw::new(0, 0, self.width, self.height)
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            root: WindowHandle::MockHandle(0),
            width: 1920,
            height: 1080,
        }
    }
}
