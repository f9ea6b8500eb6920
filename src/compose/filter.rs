//! Lookahead-based filtering.

use crate::{Cursor, Lookahead, MutCursor, Result, SeqError};

/// Yields only the upstream elements matching a predicate.
///
/// `has_next()` pulls from upstream until a match is found or upstream runs
/// out, and holds the match until `next()` hands it out.
pub struct Filter<C, P>
where
    C: Cursor,
{
    cursor: C,
    predicate: P,
    pending: Lookahead<C::Item>,
}

/// Create a cursor yielding the elements of `cursor` that match `predicate`.
pub fn filter<C, P>(cursor: C, predicate: P) -> Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    Filter {
        cursor,
        predicate,
        pending: Lookahead::Unpolled,
    }
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        let Self {
            cursor,
            predicate,
            pending,
        } = self;
        pending.fill_with(|| {
            while let Some(item) = cursor.poll() {
                if predicate(&item) {
                    return Some(item);
                }
            }
            None
        })
    }

    fn next(&mut self) -> Result<C::Item> {
        if !self.has_next() {
            return Err(SeqError::Exhausted);
        }
        self.pending.take().ok_or(SeqError::Exhausted)
    }
}

/// Removal is only possible while the backing cursor still sits on the element
/// last returned, that is, before `has_next()` scans ahead.
impl<C, P> MutCursor for Filter<C, P>
where
    C: MutCursor,
    P: FnMut(&C::Item) -> bool,
{
    fn remove(&mut self) -> Result<()> {
        if !self.pending.is_unpolled() {
            return Err(SeqError::LookedAhead);
        }
        self.cursor.remove()
    }
}

/// Like [`Filter`], but the predicate also sees each candidate's upstream
/// position.
pub struct FilterIndexed<C, P>
where
    C: Cursor,
{
    cursor: C,
    predicate: P,
    index: usize,
    pending: Lookahead<C::Item>,
}

/// Create a cursor filtering on both element and zero-based upstream index.
pub fn filter_indexed<C, P>(cursor: C, predicate: P) -> FilterIndexed<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item, usize) -> bool,
{
    FilterIndexed {
        cursor,
        predicate,
        index: 0,
        pending: Lookahead::Unpolled,
    }
}

impl<C, P> Cursor for FilterIndexed<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item, usize) -> bool,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        let Self {
            cursor,
            predicate,
            index,
            pending,
        } = self;
        pending.fill_with(|| {
            while let Some(item) = cursor.poll() {
                let position = *index;
                *index += 1;
                if predicate(&item, position) {
                    return Some(item);
                }
            }
            None
        })
    }

    fn next(&mut self) -> Result<C::Item> {
        if !self.has_next() {
            return Err(SeqError::Exhausted);
        }
        self.pending.take().ok_or(SeqError::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, generate, ArrayCursor, VecCursor};

    #[test]
    fn test_filter_keeps_matches_in_order() {
        let odds: Vec<_> = ArrayCursor::new([1, 2, 3, 4, 5])
            .filter(|x| x % 2 == 1)
            .iter()
            .collect();
        assert_eq!(odds, vec![1, 3, 5]);
    }

    #[test]
    fn test_filter_has_next_does_not_skip_matches() {
        let mut cursor = ArrayCursor::new([2, 4, 5, 6, 7]).filter(|x| x % 2 == 1);
        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(cursor.next(), Ok(5));
        assert_eq!(cursor.next(), Ok(7));
        assert!(!cursor.has_next());
        assert_eq!(cursor.next(), Err(SeqError::Exhausted));
    }

    #[test]
    fn test_filter_with_no_matches() {
        let mut cursor = ArrayCursor::new([1, 3, 5]).filter(|x| x % 2 == 0);
        assert!(!cursor.has_next());
        let mut cursor = empty::<i32>().filter(|_| true);
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_filter_over_unbounded_source() {
        let mut n = 0;
        let mut cursor = generate(move || {
            n += 1;
            n
        })
        .filter(|x| x % 3 == 0);
        assert_eq!(cursor.next(), Ok(3));
        assert_eq!(cursor.next(), Ok(6));
    }

    #[test]
    fn test_filter_remove_deletes_from_backing_vec() {
        let mut numbers = vec![1, 2, 3, 4, 5, 6];
        let mut evens = VecCursor::new(&mut numbers).filter(|x| x % 2 == 0);
        assert_eq!(evens.next(), Ok(2));
        assert_eq!(evens.remove(), Ok(()));
        assert_eq!(evens.next(), Ok(4));
        assert!(evens.has_next());
        assert_eq!(evens.remove(), Err(SeqError::LookedAhead));
        assert_eq!(evens.next(), Ok(6));
        assert_eq!(evens.remove(), Ok(()));
        assert_eq!(numbers, vec![1, 3, 4, 5]);
    }

    #[test]
    fn test_filter_indexed_sees_upstream_positions() {
        let picked: Vec<_> = ArrayCursor::new(['a', 'b', 'c', 'd', 'e'])
            .filter_indexed(|_, i| i % 2 == 0)
            .iter()
            .collect();
        assert_eq!(picked, vec!['a', 'c', 'e']);
    }

    #[test]
    fn test_filter_indexed_combines_value_and_index() {
        let picked: Vec<_> = ArrayCursor::new([5, 1, 5, 1, 5])
            .filter_indexed(|x, i| *x == 5 && i > 0)
            .iter()
            .collect();
        assert_eq!(picked, vec![5, 5]);
    }
}
