use std::marker::PhantomData;

use crate::{Cursor, Result, SeqError};

/// A cursor with no elements.
pub struct Empty<T>(PhantomData<T>);

/// Create a cursor that is exhausted from the start.
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Cursor for Empty<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        false
    }

    fn next(&mut self) -> Result<T> {
        Err(SeqError::Exhausted)
    }
}

/// Yields `seed`, then `step(seed)`, then `step(step(seed))`, and so on.
///
/// Never exhausts on its own; bound it with a terminal or limiting combinator
/// before draining it.
pub struct Recurse<T, F> {
    seed: T,
    previous: Option<T>,
    step: F,
}

/// Create an unbounded cursor from a seed and a step function.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut powers = recurse(1, |x: u32| x * 2);
/// assert_eq!(powers.next(), Ok(1));
/// assert_eq!(powers.next(), Ok(2));
/// assert_eq!(powers.next(), Ok(4));
/// ```
pub fn recurse<T, F>(seed: T, step: F) -> Recurse<T, F>
where
    T: Clone,
    F: FnMut(T) -> T,
{
    Recurse {
        seed,
        previous: None,
        step,
    }
}

impl<T, F> Cursor for Recurse<T, F>
where
    T: Clone,
    F: FnMut(T) -> T,
{
    type Item = T;

    fn has_next(&mut self) -> bool {
        true
    }

    fn next(&mut self) -> Result<T> {
        let next = match self.previous.take() {
            Some(previous) => (self.step)(previous),
            None => self.seed.clone(),
        };
        self.previous = Some(next.clone());
        Ok(next)
    }
}

/// Yields whatever the supplier returns, forever.
pub struct Generate<F>(F);

/// Create an unbounded cursor from a supplier.
pub fn generate<T, F>(supplier: F) -> Generate<F>
where
    F: FnMut() -> T,
{
    Generate(supplier)
}

impl<T, F> Cursor for Generate<F>
where
    F: FnMut() -> T,
{
    type Item = T;

    fn has_next(&mut self) -> bool {
        true
    }

    fn next(&mut self) -> Result<T> {
        Ok((self.0)())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recurse_starts_with_seed() {
        let mut letters = recurse('a', |c| (c as u8 + 1) as char);
        assert_eq!(letters.next(), Ok('a'));
        assert_eq!(letters.next(), Ok('b'));
        assert_eq!(letters.next(), Ok('c'));
        assert!(letters.has_next());
    }

    #[test]
    fn test_recurse_composed_with_limit() {
        let squares: Vec<_> = recurse(2u64, |x| x * x).limit(4).iter().collect();
        assert_eq!(squares, vec![2, 4, 16, 256]);
    }

    #[test]
    fn test_generate_calls_supplier_per_element() {
        let mut counter = 0;
        let mut cursor = generate(|| {
            counter += 1;
            counter
        });
        assert_eq!(cursor.next(), Ok(1));
        assert_eq!(cursor.next(), Ok(2));
        assert_eq!(cursor.skip(3), 3);
        assert_eq!(cursor.next(), Ok(6));
    }

    #[test]
    fn test_empty_never_has_next() {
        let mut cursor = empty::<String>();
        assert!(!cursor.has_next());
        assert_eq!(cursor.skip(10), 0);
    }
}
