//! Cutting a traversal short at a terminal element.
//!
//! [`Until`] stops before the terminal and never hands it out. [`EndingAt`]
//! hands out the terminal and stops after it. Both stop testing once the
//! terminal was seen, so upstream is never pulled past it.

use crate::{Cursor, Lookahead, Result, SeqError};

/// Stops before the first element matching the terminal predicate.
pub struct Until<C, P>
where
    C: Cursor,
{
    cursor: C,
    terminal: P,
    pending: Lookahead<C::Item>,
}

pub fn until<C, P>(cursor: C, terminal: P) -> Until<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    Until {
        cursor,
        terminal,
        pending: Lookahead::Unpolled,
    }
}

impl<C, P> Cursor for Until<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        let Self {
            cursor,
            terminal,
            pending,
        } = self;
        pending.fill_with(|| cursor.poll().filter(|item| !terminal(item)))
    }

    fn next(&mut self) -> Result<C::Item> {
        if !self.has_next() {
            return Err(SeqError::Exhausted);
        }
        self.pending.take().ok_or(SeqError::Exhausted)
    }
}

/// Hands out elements up to and including the first one matching the
/// terminal predicate.
pub struct EndingAt<C, P> {
    cursor: C,
    terminal: P,
    reached: bool,
}

pub fn ending_at<C, P>(cursor: C, terminal: P) -> EndingAt<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    EndingAt {
        cursor,
        terminal,
        reached: false,
    }
}

impl<C, P> Cursor for EndingAt<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        !self.reached && self.cursor.has_next()
    }

    fn next(&mut self) -> Result<C::Item> {
        if self.reached {
            return Err(SeqError::Exhausted);
        }
        let item = self.cursor.next()?;
        self.reached = (self.terminal)(&item);
        Ok(item)
    }
}
