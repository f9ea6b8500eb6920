use std::rc::Rc;

use crate::{Cursor, Lookahead, MutCursor, Result, SeqError};

/// Cursor over a shared, immutable array of elements.
///
/// Cloning the cursor or the backing `Rc<[T]>` is cheap, which is what makes
/// sequences built from literal values restartable.
#[derive(Debug, Clone)]
pub struct ArrayCursor<T> {
    items: Rc<[T]>,
    index: usize,
}

impl<T> ArrayCursor<T> {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::shared(items.into_iter().collect())
    }

    /// Start a fresh traversal over already shared elements.
    pub fn shared(items: Rc<[T]>) -> Self {
        Self { items, index: 0 }
    }
}

impl<T> Cursor for ArrayCursor<T>
where
    T: Clone,
{
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.index < self.items.len()
    }

    fn next(&mut self) -> Result<T> {
        let item = self.items.get(self.index).cloned().ok_or(SeqError::Exhausted)?;
        self.index += 1;
        Ok(item)
    }

    fn skip(&mut self, n: usize) -> usize {
        let skipped = n.min(self.items.len() - self.index);
        self.index += skipped;
        skipped
    }
}

/// Mutable cursor over a borrowed `Vec`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut numbers = vec![1, 2, 3, 4];
/// let mut cursor = VecCursor::new(&mut numbers);
/// while cursor.has_next() {
///     if cursor.next()? % 2 == 0 {
///         cursor.remove()?;
///     }
/// }
/// assert_eq!(numbers, vec![1, 3]);
/// # Ok::<(), SeqError>(())
/// ```
#[derive(Debug)]
pub struct VecCursor<'v, T> {
    vec: &'v mut Vec<T>,
    index: usize,
    current: Option<usize>,
}

impl<'v, T> VecCursor<'v, T> {
    pub fn new(vec: &'v mut Vec<T>) -> Self {
        Self {
            vec,
            index: 0,
            current: None,
        }
    }
}

impl<T> Cursor for VecCursor<'_, T>
where
    T: Clone,
{
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.index < self.vec.len()
    }

    fn next(&mut self) -> Result<T> {
        let item = self.vec.get(self.index).cloned().ok_or(SeqError::Exhausted)?;
        self.current = Some(self.index);
        self.index += 1;
        Ok(item)
    }
}

impl<T> MutCursor for VecCursor<'_, T>
where
    T: Clone,
{
    fn remove(&mut self) -> Result<()> {
        let current = self.current.take().ok_or(SeqError::NoCurrent)?;
        self.vec.remove(current);
        self.index = current;
        Ok(())
    }
}

/// Cursor over a std [`Iterator`].
///
/// `has_next()` pulls one element ahead and holds it until `next()`.
pub struct IterCursor<I>
where
    I: Iterator,
{
    iter: I,
    pending: Lookahead<I::Item>,
}

impl<I> IterCursor<I>
where
    I: Iterator,
{
    pub fn new<T>(iter: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: iter.into_iter(),
            pending: Lookahead::Unpolled,
        }
    }
}

impl<I> Cursor for IterCursor<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        let iter = &mut self.iter;
        self.pending.fill_with(|| iter.next())
    }

    fn next(&mut self) -> Result<I::Item> {
        if !self.has_next() {
            return Err(SeqError::Exhausted);
        }
        self.pending.take().ok_or(SeqError::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_cursor_clones_are_independent() {
        let mut first = ArrayCursor::new([1, 2]);
        let mut second = first.clone();
        assert_eq!(first.next(), Ok(1));
        assert_eq!(first.next(), Ok(2));
        assert_eq!(second.next(), Ok(1));
    }

    #[test]
    fn test_array_cursor_skip_clamps() {
        let mut cursor = ArrayCursor::new(0..10);
        assert_eq!(cursor.skip(7), 7);
        assert_eq!(cursor.skip(7), 3);
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_vec_cursor_remove_keeps_position() {
        let mut letters = vec!['a', 'b', 'c'];
        let mut cursor = VecCursor::new(&mut letters);
        assert_eq!(cursor.next(), Ok('a'));
        assert_eq!(cursor.next(), Ok('b'));
        assert_eq!(cursor.remove(), Ok(()));
        assert_eq!(cursor.next(), Ok('c'));
        assert!(!cursor.has_next());
        assert_eq!(letters, vec!['a', 'c']);
    }

    #[test]
    fn test_vec_cursor_remove_requires_current() {
        let mut numbers = vec![1, 2];
        let mut cursor = VecCursor::new(&mut numbers);
        assert_eq!(cursor.remove(), Err(SeqError::NoCurrent));
        assert_eq!(cursor.next(), Ok(1));
        assert_eq!(cursor.remove(), Ok(()));
        assert_eq!(cursor.remove(), Err(SeqError::NoCurrent));
        assert_eq!(numbers, vec![2]);
    }

    #[test]
    fn test_iter_cursor_pulls_lazily() {
        let mut pulled = 0;
        let mut cursor = IterCursor::new((1..=3).inspect(|_| pulled += 1));
        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(cursor.next(), Ok(1));
        assert_eq!(cursor.next(), Ok(2));
        drop(cursor);
        assert_eq!(pulled, 2);
    }
}
