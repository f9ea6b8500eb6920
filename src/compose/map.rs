//! Transforming cursor elements, with or without a view of their neighbours.
//!
//! [`Map`] and [`Peek`] are pure pass-throughs. [`MapBack`] remembers the
//! element before the current one and [`MapForward`] reads one element ahead,
//! so their mappers receive `None` at the start or end of the traversal
//! respectively.

use crate::{Cursor, Lookahead, MutCursor, Result, SeqError};

/// Transforms each element of the wrapped cursor.
pub struct Map<C, F> {
    cursor: C,
    f: F,
}

/// Create a cursor applying `f` to each element of `cursor`.
pub fn map<C, U, F>(cursor: C, f: F) -> Map<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> U,
{
    Map { cursor, f }
}

impl<C, U, F> Cursor for Map<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> U,
{
    type Item = U;

    fn has_next(&mut self) -> bool {
        self.cursor.has_next()
    }

    fn next(&mut self) -> Result<U> {
        self.cursor.next().map(&mut self.f)
    }

    fn skip(&mut self, n: usize) -> usize {
        self.cursor.skip(n)
    }
}

impl<C, U, F> MutCursor for Map<C, F>
where
    C: MutCursor,
    F: FnMut(C::Item) -> U,
{
    fn remove(&mut self) -> Result<()> {
        self.cursor.remove()
    }
}

/// Calls an action on each element as it is returned.
pub struct Peek<C, F> {
    cursor: C,
    action: F,
}

/// Create a cursor that runs `action` on every element it hands out.
pub fn peek<C, F>(cursor: C, action: F) -> Peek<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item),
{
    Peek { cursor, action }
}

impl<C, F> Cursor for Peek<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item),
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        self.cursor.has_next()
    }

    fn next(&mut self) -> Result<C::Item> {
        let item = self.cursor.next()?;
        (self.action)(&item);
        Ok(item)
    }
}

impl<C, F> MutCursor for Peek<C, F>
where
    C: MutCursor,
    F: FnMut(&C::Item),
{
    fn remove(&mut self) -> Result<()> {
        self.cursor.remove()
    }
}

/// Maps each element together with the element before it.
pub struct MapBack<C, F>
where
    C: Cursor,
{
    cursor: C,
    f: F,
    previous: Option<C::Item>,
}

/// Create a cursor calling `f(previous, current)` per element; `previous` is
/// `None` for the first element.
pub fn map_back<C, U, F>(cursor: C, f: F) -> MapBack<C, F>
where
    C: Cursor,
    F: FnMut(Option<&C::Item>, &C::Item) -> U,
{
    MapBack {
        cursor,
        f,
        previous: None,
    }
}

impl<C, U, F> Cursor for MapBack<C, F>
where
    C: Cursor,
    F: FnMut(Option<&C::Item>, &C::Item) -> U,
{
    type Item = U;

    fn has_next(&mut self) -> bool {
        self.cursor.has_next()
    }

    fn next(&mut self) -> Result<U> {
        let current = self.cursor.next()?;
        let mapped = (self.f)(self.previous.as_ref(), &current);
        self.previous = Some(current);
        Ok(mapped)
    }
}

/// Maps each element together with the element after it.
pub struct MapForward<C, F>
where
    C: Cursor,
{
    cursor: C,
    f: F,
    following: Lookahead<C::Item>,
}

/// Create a cursor calling `f(current, following)` per element; `following`
/// is `None` for the last element.
pub fn map_forward<C, U, F>(cursor: C, f: F) -> MapForward<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item, Option<&C::Item>) -> U,
{
    MapForward {
        cursor,
        f,
        following: Lookahead::Unpolled,
    }
}

impl<C, U, F> Cursor for MapForward<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item, Option<&C::Item>) -> U,
{
    type Item = U;

    fn has_next(&mut self) -> bool {
        match self.following {
            Lookahead::Ready(_) => true,
            Lookahead::Exhausted => false,
            Lookahead::Unpolled => self.cursor.has_next(),
        }
    }

    fn next(&mut self) -> Result<U> {
        if !self.has_next() {
            return Err(SeqError::Exhausted);
        }
        let current = match self.following.take() {
            Some(item) => item,
            None => self.cursor.next()?,
        };
        self.following = self.cursor.poll().into();
        Ok((self.f)(&current, self.following.as_ref()))
    }
}
