//! Errors raised when a cursor contract is violated.

/// Contract violations surfaced by cursors and views.
///
/// Every variant is a local programming error: the caller should have checked
/// [`Cursor::has_next`](crate::Cursor::has_next) or the view's length first.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    /// `next()` was called on a cursor with no remaining elements.
    #[error("cursor is exhausted")]
    Exhausted,

    /// `remove()` was called before `next()`, or twice for the same element.
    #[error("no current element to remove")]
    NoCurrent,

    /// `remove()` was called after `has_next()` advanced the backing cursor
    /// past the element last returned.
    #[error("cannot remove after has_next() looked ahead")]
    LookedAhead,

    /// A list-like view was indexed out of range.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },
}

/// Shorthand for results carrying a [`SeqError`].
pub type Result<T, E = SeqError> = std::result::Result<T, E>;
