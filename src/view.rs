//! Filtered, list-like view over a vector.
//!
//! A [`FilteredView`] shows only the elements of a borrowed `Vec` that match a
//! predicate. Reads, replacements and removals go through to the vector;
//! there is no way to add elements through the view.

use crate::{
    build::VecCursor,
    compose::{filter, Filter},
    Cursor, Result, SeqError,
};

/// The matching elements of a borrowed vector, in order.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut numbers = vec![1, 2, 3, 4, 5, 6];
/// let mut evens = FilteredView::new(&mut numbers, |x: &i32| x % 2 == 0);
/// assert_eq!(evens.len(), 3);
/// assert_eq!(evens.get(1), Ok(&4));
/// assert_eq!(evens.get(3), Err(SeqError::OutOfBounds { index: 3, len: 3 }));
///
/// let mut cursor = evens.cursor_at(1)?;
/// assert_eq!(cursor.next(), Ok(4));
/// cursor.remove()?;
/// assert_eq!(numbers, vec![1, 2, 3, 5, 6]);
/// # Ok::<(), SeqError>(())
/// ```
pub struct FilteredView<'v, T, P> {
    vec: &'v mut Vec<T>,
    predicate: P,
}

impl<'v, T, P> FilteredView<'v, T, P>
where
    P: Fn(&T) -> bool,
{
    pub fn new(vec: &'v mut Vec<T>, predicate: P) -> Self {
        Self { vec, predicate }
    }

    /// Number of matching elements. Walks the whole vector.
    pub fn len(&self) -> usize {
        self.vec.iter().filter(|item| (self.predicate)(item)).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.vec.iter().any(|item| (self.predicate)(item))
    }

    /// The `index`th matching element.
    pub fn get(&self, index: usize) -> Result<&T> {
        let position = self.position(index)?;
        Ok(&self.vec[position])
    }

    /// Whether a matching element equals `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.vec
            .iter()
            .any(|candidate| candidate == item && (self.predicate)(candidate))
    }

    /// Replace the `index`th matching element, returning the old one.
    ///
    /// A replacement that does not match the predicate drops out of the view.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let position = self.position(index)?;
        Ok(std::mem::replace(&mut self.vec[position], value))
    }

    /// Remove the `index`th matching element from the vector.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let position = self.position(index)?;
        Ok(self.vec.remove(position))
    }

    /// Remove the first matching element equal to `item`. Returns whether one
    /// was found.
    pub fn remove_item(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let predicate = &self.predicate;
        match self
            .vec
            .iter()
            .position(|candidate| candidate == item && predicate(candidate))
        {
            Some(position) => {
                self.vec.remove(position);
                true
            }
            None => false,
        }
    }

    /// Vector position of the `index`th matching element.
    fn position(&self, index: usize) -> Result<usize> {
        self.vec
            .iter()
            .enumerate()
            .filter(|(_, item)| (self.predicate)(item))
            .map(|(position, _)| position)
            .nth(index)
            .ok_or_else(|| SeqError::OutOfBounds {
                index,
                len: self.len(),
            })
    }

    /// A removable cursor over the matching elements.
    pub fn cursor(&mut self) -> Filter<VecCursor<'_, T>, &P>
    where
        T: Clone,
    {
        filter(VecCursor::new(self.vec), &self.predicate)
    }

    /// A removable cursor positioned before the `index`th matching element.
    ///
    /// `index` may equal the number of matches, giving an exhausted cursor.
    pub fn cursor_at(&mut self, index: usize) -> Result<Filter<VecCursor<'_, T>, &P>>
    where
        T: Clone,
    {
        let len = self.len();
        if index > len {
            return Err(SeqError::OutOfBounds { index, len });
        }
        let mut cursor = self.cursor();
        cursor.skip(index);
        Ok(cursor)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.vec
            .iter()
            .filter(|item| (self.predicate)(item))
            .cloned()
            .collect()
    }
}
