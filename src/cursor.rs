//! Core cursor contract.
//!
//! This module defines the [`Cursor`] trait, the building block every sequence
//! operation in this crate is assembled from. A cursor is mutable traversal
//! state that is always in exactly one of three conditions: not yet advanced,
//! holding a pending element, or exhausted.
//!
//! # The Cursor Trait
//!
//! [`Cursor`] exposes:
//! - [`has_next`](Cursor::has_next): whether another element can be returned.
//!   Repeated calls have no effect beyond caching a lookahead element.
//! - [`next`](Cursor::next): advance once and return the element, or
//!   [`SeqError::Exhausted`] when nothing is left.
//!
//! Cursors that can delete the element they last returned from a backing
//! structure additionally implement [`MutCursor`]. Read-only cursors simply do
//! not have a `remove` method.
//!
//! A cursor chain is owned by the single consumer driving it. Traversing one
//! chain from two places at once is not supported; obtain a second cursor from
//! the [`Sequence`](crate::Sequence) instead.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut odds = ArrayCursor::new([1, 2, 3, 4, 5]).filter(|x| x % 2 == 1);
//! assert_eq!(odds.next(), Ok(1));
//! assert_eq!(odds.next(), Ok(3));
//! assert_eq!(odds.next(), Ok(5));
//! assert_eq!(odds.next(), Err(SeqError::Exhausted));
//! ```

use std::{cell::RefCell, rc::Rc};

use either::Either;

use crate::{
    compose::{
        self, Chaining, EndingAt, Filter, FilterIndexed, Interleave, Limit, Map, MapBack,
        MapForward, Partition, Peek, Skipping, Stepping, Until,
    },
    error::{Result, SeqError},
    iter::CursorIter,
};

/// A boxed cursor, the unit a [`Sequence`](crate::Sequence) producer hands out.
pub type BoxCursor<'a, T> = Box<dyn Cursor<Item = T> + 'a>;

/// Stateful, single-pass traversal with a has-more/advance protocol.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut cursor = ArrayCursor::new([10, 20, 30]).limit(2);
/// assert!(cursor.has_next());
/// assert_eq!(cursor.next(), Ok(10));
/// assert_eq!(cursor.next(), Ok(20));
/// assert!(!cursor.has_next());
/// ```
pub trait Cursor {
    /// Type of element this cursor yields.
    type Item;

    /// Whether a call to [`next`](Cursor::next) would succeed.
    fn has_next(&mut self) -> bool;

    /// Advance once and return the element.
    ///
    /// Fails with [`SeqError::Exhausted`] when `has_next()` is false.
    fn next(&mut self) -> Result<Self::Item>;

    /// Return the next element if there is one.
    fn poll(&mut self) -> Option<Self::Item> {
        if self.has_next() {
            self.next().ok()
        } else {
            None
        }
    }

    /// Advance up to `n` times, stopping early at exhaustion.
    ///
    /// Returns how many elements were actually skipped.
    fn skip(&mut self, n: usize) -> usize {
        let mut skipped = 0;
        while skipped < n && self.poll().is_some() {
            skipped += 1;
        }
        skipped
    }

    fn boxed<'a>(self) -> BoxCursor<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Adapt into a [`std::iter::Iterator`].
    fn iter(self) -> CursorIter<Self>
    where
        Self: Sized,
    {
        CursorIter::new(self)
    }

    /// Keep only the elements matching `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        compose::filter(self, predicate)
    }

    /// Keep only the elements matching `predicate`, which also receives the
    /// zero-based upstream position of each candidate.
    fn filter_indexed<P>(self, predicate: P) -> FilterIndexed<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item, usize) -> bool,
    {
        compose::filter_indexed(self, predicate)
    }

    /// Transform each element.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        compose::map(self, f)
    }

    /// Observe each element as it passes through.
    fn peek<F>(self, action: F) -> Peek<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        compose::peek(self, action)
    }

    /// Transform each element with a view of the element before it.
    fn map_back<U, F>(self, f: F) -> MapBack<Self, F>
    where
        Self: Sized,
        F: FnMut(Option<&Self::Item>, &Self::Item) -> U,
    {
        compose::map_back(self, f)
    }

    /// Transform each element with a view of the element after it.
    fn map_forward<U, F>(self, f: F) -> MapForward<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item, Option<&Self::Item>) -> U,
    {
        compose::map_forward(self, f)
    }

    /// Stop after `limit` elements.
    fn limit(self, limit: usize) -> Limit<Self>
    where
        Self: Sized,
    {
        compose::limit(self, limit)
    }

    /// Lazily drop the first `skip` elements.
    fn skipping(self, skip: usize) -> Skipping<Self>
    where
        Self: Sized,
    {
        compose::skipping(self, skip)
    }

    /// Return every `step`th element, starting with the first.
    fn stepping(self, step: usize) -> Stepping<Self>
    where
        Self: Sized,
    {
        compose::stepping(self, step)
    }

    /// Stop before the first element matching `terminal`.
    fn until<P>(self, terminal: P) -> Until<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        compose::until(self, terminal)
    }

    /// Stop after the first element matching `terminal`.
    fn ending_at<P>(self, terminal: P) -> EndingAt<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        compose::ending_at(self, terminal)
    }

    /// Continue with `other` once this cursor is exhausted.
    fn chain<C>(self, other: C) -> Chaining<std::array::IntoIter<Either<Self, C>, 2>>
    where
        Self: Sized,
        C: Cursor<Item = Self::Item>,
    {
        compose::chaining([Either::Left(self), Either::Right(other)])
    }

    /// Alternate elements with `other`, stopping when either runs out.
    fn interleave<C>(self, other: C) -> Interleave<Self, C>
    where
        Self: Sized,
        C: Cursor<Item = Self::Item>,
    {
        compose::interleave(self, other)
    }

    /// Group adjacent elements into batches, splitting wherever
    /// `split(held, following)` is true.
    fn partition<P>(self, split: P) -> Partition<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        compose::partition(self, split)
    }
}

/// A cursor that can delete the element it last returned from its backing
/// structure.
///
/// After a successful `remove()` the cursor keeps pointing at the element that
/// followed the removed one. Structural changes to the backing store made
/// through anything other than this cursor while it is alive are not
/// supported.
pub trait MutCursor: Cursor {
    /// Delete the element most recently returned by [`Cursor::next`].
    fn remove(&mut self) -> Result<()>;
}

impl<C> Cursor for Box<C>
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Result<Self::Item> {
        (**self).next()
    }

    fn skip(&mut self, n: usize) -> usize {
        (**self).skip(n)
    }
}

impl<C> MutCursor for Box<C>
where
    C: MutCursor + ?Sized,
{
    fn remove(&mut self) -> Result<()> {
        (**self).remove()
    }
}

impl<C> Cursor for &'_ mut C
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Result<Self::Item> {
        (**self).next()
    }

    fn skip(&mut self, n: usize) -> usize {
        (**self).skip(n)
    }
}

impl<C> MutCursor for &'_ mut C
where
    C: MutCursor + ?Sized,
{
    fn remove(&mut self) -> Result<()> {
        (**self).remove()
    }
}

/// Every handle to a shared cursor advances the same traversal.
impl<C> Cursor for Rc<RefCell<C>>
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        self.borrow_mut().has_next()
    }

    fn next(&mut self) -> Result<Self::Item> {
        self.borrow_mut().next()
    }

    fn skip(&mut self, n: usize) -> usize {
        self.borrow_mut().skip(n)
    }
}

/// An absent cursor behaves as an empty one.
impl<C> Cursor for Option<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        self.as_mut().is_some_and(Cursor::has_next)
    }

    fn next(&mut self) -> Result<Self::Item> {
        match self {
            Some(c) => c.next(),
            None => Err(SeqError::Exhausted),
        }
    }
}

impl<L, R> Cursor for Either<L, R>
where
    L: Cursor,
    R: Cursor<Item = L::Item>,
{
    type Item = L::Item;

    fn has_next(&mut self) -> bool {
        match self {
            Either::Left(l) => l.has_next(),
            Either::Right(r) => r.has_next(),
        }
    }

    fn next(&mut self) -> Result<Self::Item> {
        match self {
            Either::Left(l) => l.next(),
            Either::Right(r) => r.next(),
        }
    }

    fn skip(&mut self, n: usize) -> usize {
        match self {
            Either::Left(l) => l.skip(n),
            Either::Right(r) => r.skip(n),
        }
    }
}
