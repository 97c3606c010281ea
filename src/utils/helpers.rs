//! Generic finding and reordering over slices and Vecs.

/// Find the element `shift` positions away from a reference element,
/// wrapping at both ends. Use `shift` 1 for the next element and -1 for
/// the previous one. Returns `None` when the reference is not present.
pub fn relative_find<T, F>(list: &[T], reference_finder: F, shift: i32) -> Option<&T>
where
    F: Fn(&T) -> bool,
{
    let len = list.len() as i32;
    if len == 0 {
        return None;
    }
    let reference_index = list.iter().position(reference_finder)? as i32;
    let shifted = (reference_index + shift).rem_euclid(len);
    list.get(shifted as usize)
}

/// Shift an element left or right in a Vec by a given amount. Moving past
/// either end wraps the whole list by one so the element lands on the
/// opposite side. Returns `None` when the list is too short to reorder or
/// the element is not present.
pub fn reorder_vec<T, F>(list: &mut Vec<T>, test: F, shift: i32) -> Option<()>
where
    F: Fn(&T) -> bool,
    T: Clone,
{
    let len = list.len() as i32;
    if len < 2 {
        return None;
    }
    let index = list.iter().position(test)?;
    let item = list.get(index)?.clone();

    let mut new_index = index as i32 + shift;
    list.remove(index);
    let v = &mut **list;

    if new_index < 0 {
        new_index += len;
        v.rotate_right(1);
    } else if new_index >= len {
        new_index -= len;
        v.rotate_left(1);
    }
    list.insert(new_index as usize, item);
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_find_works_both_ways() {
        let list = vec!["hello", "world", "foo", "bar"];
        assert_eq!(relative_find(&list, |&e| e == "hello", 2), Some(&"foo"));
        assert_eq!(relative_find(&list, |&e| e == "bar", -2), Some(&"world"));
    }

    #[test]
    fn relative_find_wraps_at_both_ends() {
        let list = vec!["hello", "world", "foo", "bar"];
        assert_eq!(relative_find(&list, |&e| e == "bar", 1), Some(&"hello"));
        assert_eq!(relative_find(&list, |&e| e == "hello", -1), Some(&"bar"));
    }

    #[test]
    fn relative_find_with_inexistent_reference_must_return_none() {
        let list = vec!["hello", "world", "foo", "bar"];
        assert_eq!(relative_find(&list, |&e| e == "inexistent", 2), None);
    }

    #[test]
    fn reorder_vec_swaps_neighbours() {
        let mut list = vec![1, 2, 3];
        reorder_vec(&mut list, |&e| e == 2, 1);
        assert_eq!(list, vec![1, 3, 2]);
    }

    #[test]
    fn reorder_vec_wraps_the_tail_forward() {
        let mut list = vec![1, 2, 3];
        reorder_vec(&mut list, |&e| e == 3, 1);
        assert_eq!(list, vec![3, 2, 1]);
    }

    #[test]
    fn reorder_vec_needs_two_elements() {
        let mut list = vec![1];
        assert_eq!(reorder_vec(&mut list, |&e| e == 1, 1), None);
    }
}
