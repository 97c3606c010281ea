//! Master and vertical stack tiling arithmetic. Pure geometry; callers
//! own the mapping from window handles to the returned slots.

use crate::models::Xyhw;

/// Computes the geometry for `count` tiled windows on a screen of
/// `screen_w` by `screen_h` pixels. Slot 0 is the master; the rest
/// stack top to bottom on the right.
#[must_use]
pub fn master_stack(count: usize, screen_w: i32, screen_h: i32, gap: i32, ratio: f32) -> Vec<Xyhw> {
    if count == 0 {
        return Vec::new();
    }
    let usable_w = screen_w - 2 * gap;
    let usable_h = screen_h - 2 * gap;
    if count == 1 {
        return vec![Xyhw::new(gap, gap, usable_w, usable_h)];
    }

    #[allow(clippy::cast_possible_truncation)]
    let master_w = (screen_w as f32 * ratio).floor() as i32 - gap;
    let master = Xyhw::new(gap, gap, master_w, usable_h);

    let stack_count = (count - 1) as i32;
    let stack_x = gap + master_w + gap;
    let stack_w = usable_w - master_w - gap;
    let stack_h = (usable_h - (stack_count - 1) * gap) / stack_count;

    let mut slots = Vec::with_capacity(count);
    slots.push(master);
    for i in 0..stack_count {
        let y = gap + i * (stack_h + gap);
        slots.push(Xyhw::new(stack_x, y, stack_w, stack_h));
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_window_fills_screen_minus_gaps() {
        let slots = master_stack(1, 1920, 1080, 20, 0.6);
        assert_eq!(slots, vec![Xyhw::new(20, 20, 1880, 1040)]);
    }

    #[test]
    fn three_windows_split_master_and_stack() {
        let slots = master_stack(3, 1920, 1080, 20, 0.6);
        assert_eq!(slots[0], Xyhw::new(20, 20, 1132, 1040));
        assert_eq!(slots[1], Xyhw::new(1172, 20, 728, 510));
        assert_eq!(slots[2], Xyhw::new(1172, 550, 728, 510));
    }

    #[test]
    fn two_windows_give_stack_full_height() {
        let slots = master_stack(2, 1920, 1080, 20, 0.6);
        assert_eq!(slots[0], Xyhw::new(20, 20, 1132, 1040));
        assert_eq!(slots[1], Xyhw::new(1172, 20, 728, 1040));
    }

    #[test]
    fn zero_windows_yields_no_slots() {
        assert!(master_stack(0, 1920, 1080, 20, 0.6).is_empty());
    }

    #[test]
    fn zero_gap_tiles_edge_to_edge() {
        let slots = master_stack(2, 1000, 800, 0, 0.5);
        assert_eq!(slots[0], Xyhw::new(0, 0, 500, 800));
        assert_eq!(slots[1], Xyhw::new(500, 0, 500, 800));
    }
}
