//! Functions for driving cursors to completion.
//!
//! These operate on the bare [`Cursor`] contract, so they work for any chain,
//! boxed or not. [`Sequence`](crate::Sequence)'s terminal operations are thin
//! wrappers that open a fresh cursor and hand it to one of these.

use crate::Cursor;

/// Fold every remaining element into an accumulator.
pub fn fold<C, B, F>(mut cursor: C, init: B, mut f: F) -> B
where
    C: Cursor,
    F: FnMut(B, C::Item) -> B,
{
    let mut acc = init;
    while let Some(item) = cursor.poll() {
        acc = f(acc, item);
    }
    acc
}

/// Count the remaining elements.
pub fn count<C>(cursor: C) -> usize
where
    C: Cursor,
{
    fold(cursor, 0, |n, _| n + 1)
}

/// The last remaining element, if any.
pub fn last<C>(cursor: C) -> Option<C::Item>
where
    C: Cursor,
{
    fold(cursor, None, |_, item| Some(item))
}

/// The element `n` positions ahead (zero-based), if there are that many.
pub fn nth<C>(mut cursor: C, n: usize) -> Option<C::Item>
where
    C: Cursor,
{
    if cursor.skip(n) < n {
        return None;
    }
    cursor.poll()
}

/// Whether any remaining element matches, stopping at the first match.
pub fn any<C, P>(mut cursor: C, mut predicate: P) -> bool
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    while let Some(item) = cursor.poll() {
        if predicate(&item) {
            return true;
        }
    }
    false
}

/// Whether all remaining elements match, stopping at the first mismatch.
pub fn all<C, P>(cursor: C, mut predicate: P) -> bool
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    !any(cursor, |item| !predicate(item))
}

/// Collect the remaining elements into a vector.
pub fn to_vec<C>(cursor: C) -> Vec<C::Item>
where
    C: Cursor,
{
    fold(cursor, Vec::new(), |mut items, item| {
        items.push(item);
        items
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, recurse, ArrayCursor};

    #[test]
    fn test_fold_and_count() {
        assert_eq!(fold(ArrayCursor::new([1, 2, 3]), 10, |a, b| a + b), 16);
        assert_eq!(count(ArrayCursor::new("hello".chars())), 5);
        assert_eq!(count(empty::<u8>()), 0);
    }

    #[test]
    fn test_last_and_nth() {
        assert_eq!(last(ArrayCursor::new([1, 2, 3])), Some(3));
        assert_eq!(last(empty::<u8>()), None);
        assert_eq!(nth(ArrayCursor::new([1, 2, 3]), 0), Some(1));
        assert_eq!(nth(ArrayCursor::new([1, 2, 3]), 2), Some(3));
        assert_eq!(nth(ArrayCursor::new([1, 2, 3]), 3), None);
    }

    #[test]
    fn test_any_stops_on_unbounded_source() {
        assert!(any(recurse(1, |x| x + 1), |x| *x == 50));
        assert!(!all(recurse(1, |x| x + 1), |x| *x < 50));
    }

    #[test]
    fn test_all_of_empty_is_true() {
        assert!(all(empty::<i32>(), |_| false));
        assert!(!any(empty::<i32>(), |_| true));
    }

    #[test]
    fn test_to_vec_preserves_order() {
        assert_eq!(to_vec(ArrayCursor::new([3, 1, 2])), vec![3, 1, 2]);
    }
}
