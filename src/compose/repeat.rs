use tracing::trace;

use crate::{Cursor, Result, SeqError};

/// Replays a source by asking a factory for a fresh cursor each time the
/// current one runs out.
///
/// The factory, not the drained cursor, is what gets restarted, so repeating
/// only yields more than one pass when the factory can produce a rewound
/// cursor. A pass that turns out empty ends the repetition, which keeps an
/// endless repeat of an empty or drained source from spinning.
pub struct Repeating<F, C> {
    factory: F,
    current: Option<C>,
    remaining: Option<usize>,
    done: bool,
}

/// Create a cursor making `times` passes over cursors from `factory`, or
/// passing forever when `times` is `None`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let values: Vec<_> = repeating(|| ArrayCursor::new([1, 2]), Some(3)).iter().collect();
/// assert_eq!(values, vec![1, 2, 1, 2, 1, 2]);
/// ```
pub fn repeating<F, C>(factory: F, times: Option<usize>) -> Repeating<F, C>
where
    F: FnMut() -> C,
    C: Cursor,
{
    Repeating {
        factory,
        current: None,
        remaining: times,
        done: false,
    }
}

impl<F, C> Cursor for Repeating<F, C>
where
    F: FnMut() -> C,
    C: Cursor,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        if self.done {
            return false;
        }
        if let Some(current) = &mut self.current {
            if current.has_next() {
                return true;
            }
        }
        match &mut self.remaining {
            Some(0) => {
                self.done = true;
                return false;
            }
            Some(n) => *n -= 1,
            None => {}
        }
        let mut fresh = (self.factory)();
        let has_next = fresh.has_next();
        trace!(has_next, remaining = ?self.remaining, "restarted repeated source");
        self.current = Some(fresh);
        self.done = !has_next;
        has_next
    }

    fn next(&mut self) -> Result<C::Item> {
        if !self.has_next() {
            return Err(SeqError::Exhausted);
        }
        self.current.next()
    }
}
