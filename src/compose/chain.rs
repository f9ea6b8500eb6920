use std::iter::Fuse;

use crate::{Cursor, Lookahead, Result, SeqError};

/// Drains a series of cursors one after another.
///
/// Holds an iterator over the sources and the cursor currently being drained.
/// Sources are opened lazily: the next one is only pulled from the iterator
/// once the current one reports exhaustion, and empty sources are passed over.
/// An exhausted source is dropped and never asked again, and once the sources
/// run out the chain stays exhausted.
pub struct Chaining<I>
where
    I: Iterator,
{
    sources: Fuse<I>,
    current: Option<I::Item>,
}

/// Create a cursor that drains every cursor yielded by `sources`, in order.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let chained: Vec<_> = chaining([
///     ArrayCursor::new(vec![1, 2]),
///     ArrayCursor::new(vec![]),
///     ArrayCursor::new(vec![3]),
/// ])
/// .iter()
/// .collect();
/// assert_eq!(chained, vec![1, 2, 3]);
/// ```
pub fn chaining<S>(sources: S) -> Chaining<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Cursor,
{
    Chaining {
        sources: sources.into_iter().fuse(),
        current: None,
    }
}

impl<I> Cursor for Chaining<I>
where
    I: Iterator,
    I::Item: Cursor,
{
    type Item = <I::Item as Cursor>::Item;

    fn has_next(&mut self) -> bool {
        loop {
            if let Some(current) = &mut self.current {
                if current.has_next() {
                    return true;
                }
            }
            match self.sources.next() {
                Some(next) => self.current = Some(next),
                None => {
                    self.current = None;
                    return false;
                }
            }
        }
    }

    fn next(&mut self) -> Result<Self::Item> {
        if !self.has_next() {
            return Err(SeqError::Exhausted);
        }
        self.current.next()
    }
}

/// Alternates between two cursors, one element from each in turn.
///
/// A new round pulls the left element into a holding slot and only starts
/// once the right side also has an element, so the traversal never ends on a
/// half-finished pair, even when both sides share one underlying source.
pub struct Interleave<L, R>
where
    L: Cursor,
{
    left: L,
    right: R,
    held: Lookahead<L::Item>,
    right_turn: bool,
}

pub fn interleave<L, R>(left: L, right: R) -> Interleave<L, R>
where
    L: Cursor,
    R: Cursor<Item = L::Item>,
{
    Interleave {
        left,
        right,
        held: Lookahead::Unpolled,
        right_turn: false,
    }
}

impl<L, R> Cursor for Interleave<L, R>
where
    L: Cursor,
    R: Cursor<Item = L::Item>,
{
    type Item = L::Item;

    fn has_next(&mut self) -> bool {
        if self.right_turn {
            return self.right.has_next();
        }
        let left = &mut self.left;
        self.held.fill_with(|| left.poll()) && self.right.has_next()
    }

    fn next(&mut self) -> Result<L::Item> {
        if !self.has_next() {
            return Err(SeqError::Exhausted);
        }
        let item = if self.right_turn {
            self.right.next()?
        } else {
            self.held.take().ok_or(SeqError::Exhausted)?
        };
        self.right_turn = !self.right_turn;
        Ok(item)
    }
}
