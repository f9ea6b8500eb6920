use tracing::trace;

use crate::{Cursor, Lookahead, Result, SeqError};

/// Starting capacity of every partition batch buffer.
pub const INITIAL_BATCH_CAPACITY: usize = 3;

/// Groups adjacent elements into batches.
///
/// One element is always held back as the head of the next batch. Building a
/// batch pushes the held element, then keeps pulling `following` elements and
/// testing `split(held, following)`: a split closes the batch and makes
/// `following` the new held element, otherwise `following` joins the batch.
/// When upstream runs out the batch closes with nothing held.
///
/// Batch buffers start at [`INITIAL_BATCH_CAPACITY`], double when full and
/// are trimmed to their exact length when closed, so peak memory tracks the
/// largest batch rather than the whole traversal.
pub struct Partition<C, P>
where
    C: Cursor,
{
    cursor: C,
    split: P,
    held: Lookahead<C::Item>,
}

pub fn partition<C, P>(cursor: C, split: P) -> Partition<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item, &C::Item) -> bool,
{
    Partition {
        cursor,
        split,
        held: Lookahead::Unpolled,
    }
}

impl<C, P> Cursor for Partition<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item, &C::Item) -> bool,
{
    type Item = Vec<C::Item>;

    fn has_next(&mut self) -> bool {
        let cursor = &mut self.cursor;
        self.held.fill_with(|| cursor.poll())
    }

    fn next(&mut self) -> Result<Vec<C::Item>> {
        if !self.has_next() {
            return Err(SeqError::Exhausted);
        }
        let mut held = self.held.take().ok_or(SeqError::Exhausted)?;
        let mut batch = Vec::with_capacity(INITIAL_BATCH_CAPACITY);
        loop {
            let Some(following) = self.cursor.poll() else {
                push_doubling(&mut batch, held);
                self.held = Lookahead::Exhausted;
                break;
            };
            let split = (self.split)(&held, &following);
            push_doubling(&mut batch, held);
            if split {
                self.held = Lookahead::Ready(following);
                break;
            }
            held = following;
        }
        let batch = batch.into_boxed_slice().into_vec();
        trace!(len = batch.len(), more = self.held.is_ready(), "closed partition batch");
        Ok(batch)
    }
}

fn push_doubling<T>(batch: &mut Vec<T>, item: T) {
    if batch.len() == batch.capacity() {
        batch.reserve_exact(batch.capacity().max(1));
    }
    batch.push(item);
}
