//! Modifier mask plumbing shared by the key and button grab paths.

use x11_dl::xlib;

pub type ModMask = u32;
pub type Button = u32;
pub type XKeysym = u32;

/// The lock modifiers that must not change what a key combination means.
pub const IGNORED_MODS: ModMask = xlib::Mod2Mask | xlib::LockMask;

/// Strips NumLock and CapsLock from an event's modifier state so lookups
/// see the combination the user actually typed.
#[must_use]
pub fn clean_mask(mask: ModMask) -> ModMask {
    mask & !IGNORED_MODS
        & (xlib::ShiftMask
            | xlib::ControlMask
            | xlib::Mod1Mask
            | xlib::Mod3Mask
            | xlib::Mod4Mask
            | xlib::Mod5Mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_mask_drops_lock_bits() {
        let raw = xlib::Mod4Mask | xlib::Mod2Mask | xlib::LockMask;
        assert_eq!(clean_mask(raw), xlib::Mod4Mask);
    }

    #[test]
    fn clean_mask_keeps_shift() {
        let raw = xlib::Mod4Mask | xlib::ShiftMask | xlib::Mod2Mask;
        assert_eq!(clean_mask(raw), xlib::Mod4Mask | xlib::ShiftMask);
    }
}
