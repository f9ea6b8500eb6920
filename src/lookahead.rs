/// State of a single-element lookahead slot.
///
/// Cursors that must inspect an upstream element before they can answer
/// `has_next()` hold one of these. The slot is either untouched since the
/// last `next()`, holding an element that has been pulled but not yet handed
/// out, or known to be exhausted.
///
/// # Examples
///
/// ```rust
/// use lazyseq::Lookahead;
///
/// let mut slot: Lookahead<i32> = Lookahead::Unpolled;
/// slot.fill_with(|| Some(4));
/// assert!(slot.is_ready());
/// assert_eq!(slot.take(), Some(4));
/// assert!(slot.is_unpolled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lookahead<T> {
    /// Nothing has been pulled since the slot was last emptied.
    #[default]
    Unpolled,
    /// An element was pulled and waits to be returned.
    Ready(T),
    /// Upstream reported no more elements.
    Exhausted,
}

impl<T> Lookahead<T> {
    /// Returns `true` if the slot holds a pending element.
    #[inline]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Lookahead::Ready(_))
    }

    /// Returns `true` if nothing has been pulled into the slot.
    #[inline]
    pub const fn is_unpolled(&self) -> bool {
        matches!(self, Lookahead::Unpolled)
    }

    /// Returns `true` if upstream was found exhausted.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Lookahead::Exhausted)
    }

    /// Takes the pending element, leaving the slot unpolled.
    ///
    /// An exhausted slot stays exhausted and yields `None`.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        match std::mem::take(self) {
            Lookahead::Ready(value) => Some(value),
            Lookahead::Exhausted => {
                *self = Lookahead::Exhausted;
                None
            }
            Lookahead::Unpolled => None,
        }
    }

    /// Polls `f` if the slot is unpolled, recording either the element or
    /// exhaustion. Returns whether an element is now pending.
    #[inline]
    pub fn fill_with<F>(&mut self, f: F) -> bool
    where
        F: FnOnce() -> Option<T>,
    {
        if self.is_unpolled() {
            *self = f().into();
        }
        self.is_ready()
    }

    /// Borrows the pending element, if any.
    #[inline]
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Lookahead::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Option<T>> for Lookahead<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Lookahead::Ready(v),
            None => Lookahead::Exhausted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_with_polls_only_once() {
        let mut calls = 0;
        let mut slot = Lookahead::Unpolled;
        assert!(slot.fill_with(|| {
            calls += 1;
            Some('a')
        }));
        assert!(slot.fill_with(|| {
            calls += 1;
            Some('b')
        }));
        assert_eq!(calls, 1);
        assert_eq!(slot.take(), Some('a'));
    }

    #[test]
    fn test_exhaustion_is_sticky() {
        let mut slot: Lookahead<u8> = Lookahead::Unpolled;
        assert!(!slot.fill_with(|| None));
        assert_eq!(slot.take(), None);
        assert!(slot.is_exhausted());
        assert!(!slot.fill_with(|| Some(1)));
    }
}
