//! Iterator adapters between cursors and [`std::iter::Iterator`].
//!
//! [`CursorIter`] drives any [`Cursor`] through the standard `Iterator`
//! protocol, so cursor chains work with `for` loops and the usual adapters.
//! The other direction lives in [`IterCursor`](crate::build::IterCursor).
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut iter = ArrayCursor::new([1, 2, 3, 4]).iter();
//! let firsts: Vec<_> = (&mut iter).take(2).collect();
//! assert_eq!(firsts, vec![1, 2]);
//! assert!(!iter.is_exhausted());
//! assert_eq!(iter.collect::<Vec<_>>(), vec![3, 4]);
//! ```

use crate::Cursor;

/// Iterator adapter for [`Cursor`].
///
/// Both `CursorIter` and `&mut CursorIter` implement `Iterator`, so part of a
/// cursor can be consumed and the rest handed back with
/// [`into_inner`](CursorIter::into_inner).
pub struct CursorIter<C> {
    cursor: C,
    exhausted: bool,
}

impl<C> CursorIter<C>
where
    C: Cursor,
{
    /// Create a new iterator from a cursor.
    pub fn new(cursor: C) -> Self {
        Self {
            cursor,
            exhausted: false,
        }
    }

    /// Check if the wrapped cursor has run out.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Give back the wrapped cursor.
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C> Iterator for CursorIter<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.cursor.poll();
        self.exhausted = item.is_none();
        item
    }
}
