//! A workspace is an ordered list of windows plus the window it remembers
//! as focused. Slot 0 of the list is the master position; the rest are the
//! stack, top to bottom.
use crate::models::WindowHandle;
use crate::utils::helpers;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Workspace {
    pub windows: Vec<WindowHandle>,
    pub focused: Option<WindowHandle>,
}

impl Workspace {
    #[must_use]
    pub fn contains(&self, handle: &WindowHandle) -> bool {
        self.windows.contains(handle)
    }

    /// Appends a window at the bottom of the stack.
    pub fn add_window(&mut self, handle: WindowHandle) {
        if !self.contains(&handle) {
            self.windows.push(handle);
        }
    }

    /// Removes a window from this workspace. If it was the focused window
    /// the new tail of the list becomes the focus candidate.
    /// Returns whether the window was present.
    pub fn remove_window(&mut self, handle: &WindowHandle) -> bool {
        let len = self.windows.len();
        self.windows.retain(|w| w != handle);
        if self.focused.as_ref() == Some(handle) {
            self.focused = self.windows.last().copied();
        }
        self.windows.len() != len
    }

    /// The bottom of the stack, the fallback focus target.
    #[must_use]
    pub fn tail(&self) -> Option<WindowHandle> {
        self.windows.last().copied()
    }

    /// The window `shift` positions away from the focused one, wrapping at
    /// both ends. Falls back to the tail when nothing is focused.
    #[must_use]
    pub fn relative_window(&self, shift: i32) -> Option<WindowHandle> {
        match self.focused {
            Some(focused) => {
                helpers::relative_find(&self.windows, |w| *w == focused, shift).copied()
            }
            None => self.tail(),
        }
    }

    /// Moves the focused window `shift` positions in the stack, wrapping at
    /// both ends. Returns `false` when there is nothing to reorder.
    pub fn reorder_focused(&mut self, shift: i32) -> bool {
        match self.focused {
            Some(focused) => {
                helpers::reorder_vec(&mut self.windows, |w| *w == focused, shift).is_some()
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handles(ids: &[u32]) -> Vec<WindowHandle> {
        ids.iter().map(|i| WindowHandle::MockHandle(*i)).collect()
    }

    #[test]
    fn removing_the_focused_window_falls_back_to_the_tail() {
        let mut ws = Workspace {
            windows: handles(&[1, 2, 3]),
            focused: Some(WindowHandle::MockHandle(3)),
        };
        assert!(ws.remove_window(&WindowHandle::MockHandle(3)));
        assert_eq!(ws.focused, Some(WindowHandle::MockHandle(2)));
    }

    #[test]
    fn removing_the_last_window_clears_focus() {
        let mut ws = Workspace {
            windows: handles(&[1]),
            focused: Some(WindowHandle::MockHandle(1)),
        };
        assert!(ws.remove_window(&WindowHandle::MockHandle(1)));
        assert_eq!(ws.focused, None);
    }

    #[test]
    fn relative_window_wraps_both_ways() {
        let mut ws = Workspace {
            windows: handles(&[1, 2, 3]),
            focused: Some(WindowHandle::MockHandle(3)),
        };
        assert_eq!(ws.relative_window(1), Some(WindowHandle::MockHandle(1)));
        ws.focused = Some(WindowHandle::MockHandle(1));
        assert_eq!(ws.relative_window(-1), Some(WindowHandle::MockHandle(3)));
    }

    #[test]
    fn reordering_the_master_up_wraps_it_to_the_end() {
        let mut ws = Workspace {
            windows: handles(&[1, 2, 3]),
            focused: Some(WindowHandle::MockHandle(1)),
        };
        assert!(ws.reorder_focused(-1));
        assert_eq!(ws.windows, handles(&[3, 2, 1]));
    }
}
