//! Bounding a traversal by element count.

use crate::{Cursor, Lookahead, MutCursor, Result, SeqError};

/// Hands out at most `limit` elements, regardless of upstream state.
pub struct Limit<C> {
    cursor: C,
    limit: usize,
    count: usize,
}

pub fn limit<C>(cursor: C, limit: usize) -> Limit<C>
where
    C: Cursor,
{
    Limit {
        cursor,
        limit,
        count: 0,
    }
}

impl<C> Cursor for Limit<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        self.count < self.limit && self.cursor.has_next()
    }

    fn next(&mut self) -> Result<C::Item> {
        if self.count >= self.limit {
            return Err(SeqError::Exhausted);
        }
        let item = self.cursor.next()?;
        self.count += 1;
        Ok(item)
    }

    fn skip(&mut self, n: usize) -> usize {
        let skipped = self.cursor.skip(n.min(self.limit - self.count));
        self.count += skipped;
        skipped
    }
}

impl<C> MutCursor for Limit<C>
where
    C: MutCursor,
{
    fn remove(&mut self) -> Result<()> {
        self.cursor.remove()
    }
}

/// Drops the first `skip` upstream elements.
///
/// The skip happens once, on the first `has_next()` (or `next()`), not when
/// the cursor is built.
pub struct Skipping<C> {
    cursor: C,
    skip: usize,
    skipped: bool,
}

pub fn skipping<C>(cursor: C, skip: usize) -> Skipping<C>
where
    C: Cursor,
{
    Skipping {
        cursor,
        skip,
        skipped: false,
    }
}

impl<C> Cursor for Skipping<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        if !self.skipped {
            self.cursor.skip(self.skip);
            self.skipped = true;
        }
        self.cursor.has_next()
    }

    fn next(&mut self) -> Result<C::Item> {
        if !self.has_next() {
            return Err(SeqError::Exhausted);
        }
        self.cursor.next()
    }
}

impl<C> MutCursor for Skipping<C>
where
    C: MutCursor,
{
    fn remove(&mut self) -> Result<()> {
        self.cursor.remove()
    }
}

/// Hands out the first element and then every `step`th one after it.
///
/// The `step - 1` elements between two returned ones are consumed inside
/// `has_next()`, right after the next element is pulled, so `next()` never
/// skips and polling `has_next()` again does not skip twice. A step of `0`
/// behaves like `1`.
pub struct Stepping<C>
where
    C: Cursor,
{
    cursor: C,
    step: usize,
    pending: Lookahead<C::Item>,
}

pub fn stepping<C>(cursor: C, step: usize) -> Stepping<C>
where
    C: Cursor,
{
    Stepping {
        cursor,
        step: step.max(1),
        pending: Lookahead::Unpolled,
    }
}

impl<C> Cursor for Stepping<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        let Self {
            cursor,
            step,
            pending,
        } = self;
        pending.fill_with(|| {
            let item = cursor.poll()?;
            cursor.skip(*step - 1);
            Some(item)
        })
    }

    fn next(&mut self) -> Result<C::Item> {
        if !self.has_next() {
            return Err(SeqError::Exhausted);
        }
        self.pending.take().ok_or(SeqError::Exhausted)
    }
}
