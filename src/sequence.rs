//! Lazy, possibly restartable sequences.
//!
//! A [`Sequence`] is a shared function that produces a fresh cursor each time
//! it is called. Combinator methods return a new `Sequence` whose producer
//! wraps the previous one's cursor in one more combinator; nothing is pulled
//! until a terminal operation such as [`to_vec`](Sequence::to_vec) or
//! [`count`](Sequence::count) drives the composed cursor.
//!
//! # Restartability
//!
//! Sequences built from literal values ([`of`](Sequence::of)), from
//! re-iterable sources ([`from_iter_fn`](Sequence::from_iter_fn),
//! [`from_cursor_fn`](Sequence::from_cursor_fn)) or from generators
//! ([`recurse`](Sequence::recurse)) hand out independent, rewound cursors on
//! every traversal.
//!
//! Sequences built around a single external iterator or cursor
//! ([`once`](Sequence::once), [`once_cursor`](Sequence::once_cursor)) are
//! one-shot: every traversal shares the same underlying source, so once it
//! has been drained any further traversal is simply empty. This is not an
//! error.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let numbers = Sequence::of([1, 2, 3, 4, 5]);
//! let odds = numbers.filter(|x| x % 2 == 1);
//! assert_eq!(odds.to_vec(), vec![1, 3, 5]);
//! assert_eq!(odds.to_vec(), vec![1, 3, 5]);
//!
//! assert_eq!(numbers.until(4).to_vec(), vec![1, 2, 3]);
//! assert_eq!(numbers.ending_at(4).to_vec(), vec![1, 2, 3, 4]);
//! ```

use std::{
    cell::{Cell, RefCell},
    cmp::Ordering,
    fmt::{self, Display},
    rc::Rc,
};

use tracing::{debug, trace};

use crate::{
    build::{self, ArrayCursor, IterCursor},
    compose::{chaining, repeating},
    cursor::{BoxCursor, Cursor},
    drive,
    iter::CursorIter,
};

type Producer<'a, T> = dyn Fn() -> BoxCursor<'a, T> + 'a;

/// A lazy producer of ordered traversals.
///
/// Cloning a `Sequence` is cheap and shares the producer. A `Sequence` and
/// the cursors it hands out are single-threaded; independent traversals of a
/// restartable sequence each call [`cursor`](Sequence::cursor) themselves.
pub struct Sequence<'a, T> {
    producer: Rc<Producer<'a, T>>,
}

impl<'a, T> Clone for Sequence<'a, T> {
    fn clone(&self) -> Self {
        Self {
            producer: Rc::clone(&self.producer),
        }
    }
}

impl<T> fmt::Debug for Sequence<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence").finish_non_exhaustive()
    }
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Build a sequence from a function producing a fresh cursor per traversal.
    pub fn from_cursor_fn<C, F>(producer: F) -> Self
    where
        F: Fn() -> C + 'a,
        C: Cursor<Item = T> + 'a,
    {
        Self {
            producer: Rc::new(move || producer().boxed()),
        }
    }

    /// Build a sequence from a function producing a fresh iterable per
    /// traversal.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let evens = Sequence::from_iter_fn(|| (0..10).filter(|x| x % 2 == 0));
    /// assert_eq!(evens.count(), 5);
    /// assert_eq!(evens.count(), 5);
    /// ```
    pub fn from_iter_fn<I, F>(f: F) -> Self
    where
        F: Fn() -> I + 'a,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self::from_cursor_fn(move || IterCursor::new(f()))
    }

    pub fn empty() -> Self {
        Self::from_cursor_fn(build::empty::<T>)
    }

    /// A restartable sequence of the given values.
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone,
    {
        let items: Rc<[T]> = items.into_iter().collect();
        Self::from_cursor_fn(move || ArrayCursor::shared(Rc::clone(&items)))
    }

    /// A one-shot sequence over a single external iterator.
    ///
    /// Every traversal continues the same iterator, so a traversal after it
    /// has been drained is empty.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let lines = Sequence::once(vec!["a", "b"]);
    /// assert_eq!(lines.to_vec(), vec!["a", "b"]);
    /// assert!(lines.to_vec().is_empty());
    /// ```
    pub fn once<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self::once_cursor(IterCursor::new(iter))
    }

    /// A one-shot sequence over a single cursor.
    pub fn once_cursor<C>(cursor: C) -> Self
    where
        C: Cursor<Item = T> + 'a,
    {
        let shared = Rc::new(RefCell::new(cursor));
        let opened = Cell::new(false);
        Self::from_cursor_fn(move || {
            if opened.replace(true) {
                trace!("re-entered one-shot sequence");
            }
            Rc::clone(&shared)
        })
    }

    /// An unbounded sequence `seed, step(seed), step(step(seed)), ...`.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let powers = Sequence::recurse(1u32, |x| x * 2);
    /// assert_eq!(powers.limit(5).to_vec(), vec![1, 2, 4, 8, 16]);
    /// assert_eq!(powers.until(64).last(), Some(32));
    /// ```
    pub fn recurse<F>(seed: T, step: F) -> Self
    where
        T: Clone,
        F: Fn(T) -> T + 'a,
    {
        let step = Rc::new(step);
        Self::from_cursor_fn(move || {
            let step = Rc::clone(&step);
            build::recurse(seed.clone(), move |previous| step(previous))
        })
    }

    /// An unbounded sequence of values from `supplier`.
    ///
    /// All traversals share the supplier, so a stateful supplier carries its
    /// state from one traversal into the next.
    pub fn generate<F>(supplier: F) -> Self
    where
        F: FnMut() -> T + 'a,
    {
        let supplier = Rc::new(RefCell::new(supplier));
        Self::from_cursor_fn(move || {
            let supplier = Rc::clone(&supplier);
            build::generate(move || (&mut *supplier.borrow_mut())())
        })
    }

    /// Chain whole sequences one after another.
    pub fn concat<I>(sequences: I) -> Self
    where
        I: IntoIterator<Item = Sequence<'a, T>>,
    {
        let parts: Rc<[Sequence<'a, T>]> = sequences.into_iter().collect();
        Self::from_cursor_fn(move || {
            let parts = Rc::clone(&parts);
            let len = parts.len();
            chaining((0..len).map(move |i| parts[i].cursor()))
        })
    }

    /// Open a fresh cursor over this sequence.
    pub fn cursor(&self) -> BoxCursor<'a, T> {
        (self.producer)()
    }

    /// Open a fresh traversal as a std [`Iterator`].
    pub fn iter(&self) -> CursorIter<BoxCursor<'a, T>> {
        self.cursor().iter()
    }

    fn wrap<U, C, F>(&self, f: F) -> Sequence<'a, U>
    where
        U: 'a,
        F: Fn(BoxCursor<'a, T>) -> C + 'a,
        C: Cursor<Item = U> + 'a,
    {
        let source = self.clone();
        Sequence::from_cursor_fn(move || f(source.cursor()))
    }

    pub fn map<U, F>(&self, f: F) -> Sequence<'a, U>
    where
        U: 'a,
        F: Fn(T) -> U + 'a,
    {
        let f = Rc::new(f);
        self.wrap(move |cursor| {
            let f = Rc::clone(&f);
            cursor.map(move |item| f(item))
        })
    }

    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'a,
    {
        let predicate = Rc::new(predicate);
        self.wrap(move |cursor| {
            let predicate = Rc::clone(&predicate);
            cursor.filter(move |item| predicate(item))
        })
    }

    /// Filter on each element and its zero-based position in this sequence.
    pub fn filter_indexed<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T, usize) -> bool + 'a,
    {
        let predicate = Rc::new(predicate);
        self.wrap(move |cursor| {
            let predicate = Rc::clone(&predicate);
            cursor.filter_indexed(move |item, index| predicate(item, index))
        })
    }

    /// Run `action` on each element as a traversal passes it.
    pub fn peek<F>(&self, action: F) -> Self
    where
        F: Fn(&T) + 'a,
    {
        let action = Rc::new(action);
        self.wrap(move |cursor| {
            let action = Rc::clone(&action);
            cursor.peek(move |item| action(item))
        })
    }

    /// Map each element together with the one before it (`None` for the
    /// first element).
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let gaps = Sequence::of([1, 4, 6]).map_back(|prev, cur| cur - prev.unwrap_or(cur));
    /// assert_eq!(gaps.to_vec(), vec![0, 3, 2]);
    /// ```
    pub fn map_back<U, F>(&self, f: F) -> Sequence<'a, U>
    where
        U: 'a,
        F: Fn(Option<&T>, &T) -> U + 'a,
    {
        let f = Rc::new(f);
        self.wrap(move |cursor| {
            let f = Rc::clone(&f);
            cursor.map_back(move |previous, current| f(previous, current))
        })
    }

    /// Map each element together with the one after it (`None` for the last
    /// element).
    pub fn map_forward<U, F>(&self, f: F) -> Sequence<'a, U>
    where
        U: 'a,
        F: Fn(&T, Option<&T>) -> U + 'a,
    {
        let f = Rc::new(f);
        self.wrap(move |cursor| {
            let f = Rc::clone(&f);
            cursor.map_forward(move |current, following| f(current, following))
        })
    }

    pub fn limit(&self, limit: usize) -> Self {
        self.wrap(move |cursor| cursor.limit(limit))
    }

    pub fn skip(&self, skip: usize) -> Self {
        self.wrap(move |cursor| cursor.skipping(skip))
    }

    /// Every `step`th element, starting with the first. A step of `0` is
    /// treated as `1`.
    pub fn step(&self, step: usize) -> Self {
        self.wrap(move |cursor| cursor.stepping(step))
    }

    /// End before the first element equal to `terminal`.
    pub fn until(&self, terminal: T) -> Self
    where
        T: PartialEq,
    {
        let terminal = Rc::new(terminal);
        self.until_where(move |item| *item == *terminal)
    }

    /// End before the first element matching `terminal`.
    pub fn until_where<P>(&self, terminal: P) -> Self
    where
        P: Fn(&T) -> bool + 'a,
    {
        let terminal = Rc::new(terminal);
        self.wrap(move |cursor| {
            let terminal = Rc::clone(&terminal);
            cursor.until(move |item| terminal(item))
        })
    }

    /// End with the first element equal to `terminal`.
    pub fn ending_at(&self, terminal: T) -> Self
    where
        T: PartialEq,
    {
        let terminal = Rc::new(terminal);
        self.ending_at_where(move |item| *item == *terminal)
    }

    /// End with the first element matching `terminal`.
    pub fn ending_at_where<P>(&self, terminal: P) -> Self
    where
        P: Fn(&T) -> bool + 'a,
    {
        let terminal = Rc::new(terminal);
        self.wrap(move |cursor| {
            let terminal = Rc::clone(&terminal);
            cursor.ending_at(move |item| terminal(item))
        })
    }

    /// Drain this sequence now and return a restartable, sorted copy.
    pub fn sorted(&self) -> Self
    where
        T: Ord + Clone,
    {
        self.sorted_by(T::cmp)
    }

    /// Drain this sequence now and return a restartable copy sorted by
    /// `compare`.
    pub fn sorted_by<F>(&self, compare: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut items = self.to_vec();
        items.sort_by(compare);
        debug!(len = items.len(), "materialized sorted sequence");
        Self::of(items)
    }

    /// Drain this sequence now and return a restartable, reversed copy.
    pub fn reverse(&self) -> Self
    where
        T: Clone,
    {
        let mut items = self.to_vec();
        items.reverse();
        debug!(len = items.len(), "materialized reversed sequence");
        Self::of(items)
    }

    /// Continue with `other` after this sequence.
    pub fn append(&self, other: &Sequence<'a, T>) -> Self {
        Self::concat([self.clone(), other.clone()])
    }

    /// Put `items` in front of this sequence.
    pub fn prefix<I>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone,
    {
        Self::of(items).append(self)
    }

    /// Put `items` after this sequence.
    pub fn suffix<I>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone,
    {
        self.append(&Self::of(items))
    }

    /// Alternate elements with `other`, ending as soon as either side cannot
    /// contribute its element to a full pair.
    pub fn interleave(&self, other: &Sequence<'a, T>) -> Self {
        let (left, right) = (self.clone(), other.clone());
        Self::from_cursor_fn(move || left.cursor().interleave(right.cursor()))
    }

    /// Repeat this sequence forever, restarting it whenever it runs out.
    ///
    /// A one-shot or empty sequence yields at most one pass.
    pub fn repeat(&self) -> Self {
        self.repeat_passes(None)
    }

    /// Repeat this sequence `times` times in total.
    pub fn repeat_times(&self, times: usize) -> Self {
        self.repeat_passes(Some(times))
    }

    fn repeat_passes(&self, times: Option<usize>) -> Self {
        let source = self.clone();
        Self::from_cursor_fn(move || {
            let source = source.clone();
            repeating(move || source.cursor(), times)
        })
    }

    /// Group adjacent elements into batches, starting a new batch wherever
    /// `split(previous, next)` is true.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let runs = Sequence::of("abbc".chars()).partition(|a, b| a != b);
    /// let runs = runs.map(|run| run.iter().collect::<String>()).to_vec();
    /// assert_eq!(runs, vec!["a", "bb", "c"]);
    /// ```
    pub fn partition<P>(&self, split: P) -> Sequence<'a, Sequence<'a, T>>
    where
        T: Clone,
        P: Fn(&T, &T) -> bool + 'a,
    {
        let split = Rc::new(split);
        self.wrap(move |cursor| {
            let split = Rc::clone(&split);
            cursor
                .partition(move |held, following| split(held, following))
                .map(|batch| Sequence::of(batch))
        })
    }

    pub fn first(&self) -> Option<T> {
        drive::nth(self.cursor(), 0)
    }

    pub fn second(&self) -> Option<T> {
        drive::nth(self.cursor(), 1)
    }

    pub fn third(&self) -> Option<T> {
        drive::nth(self.cursor(), 2)
    }

    pub fn last(&self) -> Option<T> {
        drive::last(self.cursor())
    }

    pub fn count(&self) -> usize {
        drive::count(self.cursor())
    }

    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        drive::all(self.cursor(), predicate)
    }

    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        drive::any(self.cursor(), predicate)
    }

    pub fn none<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.any(predicate)
    }

    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(T),
    {
        drive::fold(self.cursor(), (), |(), item| f(item));
    }

    /// Reduce with an identity value; an empty sequence yields `identity`.
    pub fn fold<B, F>(&self, identity: B, op: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        drive::fold(self.cursor(), identity, op)
    }

    /// Reduce using the first element as the starting value.
    pub fn reduce<F>(&self, op: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        let mut cursor = self.cursor();
        let first = cursor.poll()?;
        Some(drive::fold(cursor, first, op))
    }

    pub fn min(&self) -> Option<T>
    where
        T: PartialOrd,
    {
        self.reduce(|a, b| if b < a { b } else { a })
    }

    pub fn max(&self) -> Option<T>
    where
        T: PartialOrd,
    {
        self.reduce(|a, b| if b > a { b } else { a })
    }

    pub fn to_vec(&self) -> Vec<T> {
        drive::to_vec(self.cursor())
    }

    pub fn collect<B>(&self) -> B
    where
        B: FromIterator<T>,
    {
        self.iter().collect()
    }

    /// Collect into a container built by `constructor`, adding each element
    /// with `accumulator`.
    pub fn collect_into<B, N, A>(&self, constructor: N, mut accumulator: A) -> B
    where
        N: FnOnce() -> B,
        A: FnMut(&mut B, T),
    {
        let mut result = constructor();
        self.for_each(|item| accumulator(&mut result, item));
        result
    }

    pub fn join(&self, delimiter: &str) -> String
    where
        T: Display,
    {
        self.join_wrapped("", delimiter, "")
    }

    /// Render every element with `delimiter` between them, surrounded by
    /// `prefix` and `suffix`.
    pub fn join_wrapped(&self, prefix: &str, delimiter: &str, suffix: &str) -> String
    where
        T: Display,
    {
        let mut result = String::from(prefix);
        let mut started = false;
        self.for_each(|item| {
            if started {
                result.push_str(delimiter);
            }
            started = true;
            result.push_str(&item.to_string());
        });
        result.push_str(suffix);
        result
    }
}

impl<'a, T: 'a> Sequence<'a, &'a T> {
    /// A restartable sequence of references into `slice`.
    pub fn from_slice(slice: &'a [T]) -> Self {
        Self::from_iter_fn(move || slice.iter())
    }
}

macro_rules! integer_ranges {
    ($($t:ty),* $(,)?) => {$(
        impl<'a> Sequence<'a, $t> {
            /// Every value from `start` to `end` inclusive, counting down when
            /// `end` is below `start`.
            pub fn range(start: $t, end: $t) -> Self {
                Self::range_by(start, end, 1)
            }

            /// Like [`range`](Self::range), moving `step` values at a time. A
            /// step of `0` is treated as `1`.
            pub fn range_by(start: $t, end: $t, step: usize) -> Self {
                let step = step.max(1);
                if start <= end {
                    Self::from_iter_fn(move || (start..=end).step_by(step))
                } else {
                    Self::from_iter_fn(move || (end..=start).rev().step_by(step))
                }
            }

            /// Every value from `start` up to the type's maximum.
            pub fn starting_at(start: $t) -> Self {
                Self::range(start, <$t>::MAX)
            }

            /// Every value from `1` up to the type's maximum.
            pub fn positive() -> Self {
                Self::starting_at(1)
            }
        }
    )*};
}

integer_ranges!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! signed_ranges {
    ($($t:ty),* $(,)?) => {$(
        impl<'a> Sequence<'a, $t> {
            /// Every value from `-1` down to the type's minimum.
            pub fn negative() -> Self {
                Self::range(-1, <$t>::MIN)
            }
        }
    )*};
}

signed_ranges!(i8, i16, i32, i64, i128, isize);

macro_rules! float_ranges {
    ($($t:ty),* $(,)?) => {$(
        impl<'a> Sequence<'a, $t> {
            /// Every value from `start` towards `end` in unit steps, stopping
            /// before passing `end`.
            pub fn range(start: $t, end: $t) -> Self {
                Self::range_by(start, end, 1.0)
            }

            /// Like [`range`](Self::range), moving by the magnitude of
            /// `step`. The `i`th value is computed as `start ± i * step`, so
            /// rounding does not accumulate.
            ///
            /// A zero step yields `start` alone. If `start`, `end` or `step`
            /// is NaN the sequence is empty.
            pub fn range_by(start: $t, end: $t, step: $t) -> Self {
                let step = step.abs();
                if start.is_nan() || end.is_nan() || step.is_nan() {
                    return Self::empty();
                }
                if step == 0.0 {
                    return Self::of([start]);
                }
                if start <= end {
                    Self::from_iter_fn(move || {
                        (0u64..)
                            .map(move |i| start + step * i as $t)
                            .take_while(move |x| *x <= end)
                    })
                } else {
                    Self::from_iter_fn(move || {
                        (0u64..)
                            .map(move |i| start - step * i as $t)
                            .take_while(move |x| *x >= end)
                    })
                }
            }

            /// Unit steps from `start` up to the type's maximum.
            pub fn starting_at(start: $t) -> Self {
                Self::range(start, <$t>::MAX)
            }

            /// Unit steps from `1` up to the type's maximum.
            pub fn positive() -> Self {
                Self::starting_at(1.0)
            }

            /// Unit steps from `-1` down to the type's minimum.
            pub fn negative() -> Self {
                Self::range(-1.0, <$t>::MIN)
            }
        }
    )*};
}

float_ranges!(f32, f64);

impl<'a, T> FromIterator<T> for Sequence<'a, T>
where
    T: Clone + 'a,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<'s, 'a, T: 'a> IntoIterator for &'s Sequence<'a, T> {
    type Item = T;
    type IntoIter = CursorIter<BoxCursor<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_is_restartable() {
        let sequence = Sequence::of([1, 2, 3]);
        assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
        assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_sequence() {
        let sequence = Sequence::<i32>::empty();
        assert_eq!(sequence.count(), 0);
        assert_eq!(sequence.first(), None);
        assert_eq!(sequence.last(), None);
        assert_eq!(sequence.reduce(|a, b| a + b), None);
        assert_eq!(sequence.fold(7, |a, b| a + b), 7);
    }

    #[test]
    fn test_composition_is_lazy() {
        let pulled = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulled);
        let sequence = Sequence::of([1, 2, 3, 4])
            .peek(move |_| counter.set(counter.get() + 1))
            .map(|x| x * 10)
            .filter(|x| *x > 10);
        assert_eq!(pulled.get(), 0);
        assert_eq!(sequence.first(), Some(20));
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_once_degrades_to_empty() {
        let sequence = Sequence::once(vec![1, 2, 3]);
        assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
        assert_eq!(sequence.to_vec(), Vec::<i32>::new());
        assert_eq!(sequence.count(), 0);
    }

    #[test]
    fn test_once_partially_consumed_continues() {
        let sequence = Sequence::once(vec![1, 2, 3, 4]);
        assert_eq!(sequence.first(), Some(1));
        assert_eq!(sequence.to_vec(), vec![2, 3, 4]);
    }

    #[test]
    fn test_once_cursor_over_advanced_cursor() {
        let mut cursor = ArrayCursor::new([1, 2, 3]);
        assert_eq!(cursor.next(), Ok(1));
        let sequence = Sequence::once_cursor(cursor);
        assert_eq!(sequence.to_vec(), vec![2, 3]);
        assert!(sequence.to_vec().is_empty());
    }

    #[test]
    fn test_ordinal_terminals() {
        let sequence = Sequence::of(['a', 'b', 'c', 'd']);
        assert_eq!(sequence.first(), Some('a'));
        assert_eq!(sequence.second(), Some('b'));
        assert_eq!(sequence.third(), Some('c'));
        assert_eq!(sequence.last(), Some('d'));
        assert_eq!(sequence.limit(2).third(), None);
    }

    #[test]
    fn test_predicates() {
        let sequence = Sequence::of([2, 4, 6]);
        assert!(sequence.all(|x| x % 2 == 0));
        assert!(sequence.any(|x| *x == 4));
        assert!(sequence.none(|x| *x > 6));
        assert!(Sequence::<i32>::empty().all(|_| false));
    }

    #[test]
    fn test_reductions() {
        let sequence = Sequence::of([3, 1, 4, 1, 5]);
        assert_eq!(sequence.fold(0, |a, b| a + b), 14);
        assert_eq!(sequence.reduce(|a, b| a * b), Some(60));
        assert_eq!(sequence.min(), Some(1));
        assert_eq!(sequence.max(), Some(5));
    }

    #[test]
    fn test_limit_skip_step() {
        let sequence = Sequence::<i32>::range(1, 10);
        assert_eq!(sequence.limit(3).to_vec(), vec![1, 2, 3]);
        assert_eq!(sequence.skip(7).to_vec(), vec![8, 9, 10]);
        assert_eq!(sequence.step(4).to_vec(), vec![1, 5, 9]);
        assert_eq!(sequence.skip(20).count(), 0);
    }

    #[test]
    fn test_recurse_restarts_from_seed() {
        let sequence = Sequence::recurse(1, |x| x + 1).limit(3);
        assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
        assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_generate_shares_supplier() {
        let mut n = 0;
        let sequence = Sequence::generate(move || {
            n += 1;
            n
        });
        assert_eq!(sequence.limit(3).to_vec(), vec![1, 2, 3]);
        assert_eq!(sequence.limit(2).to_vec(), vec![4, 5]);
    }

    #[test]
    fn test_terminal_values_and_predicates() {
        let sequence = Sequence::of([1, 2, 3, 4, 5]);
        assert_eq!(sequence.until(4).to_vec(), vec![1, 2, 3]);
        assert_eq!(sequence.ending_at(4).to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(sequence.until_where(|x| *x > 1).to_vec(), vec![1]);
        assert_eq!(sequence.ending_at_where(|x| *x > 1).to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_map_back_and_forward() {
        let sequence = Sequence::of([1, 2, 3]);
        let back = sequence.map_back(|prev, cur| (prev.copied(), *cur));
        assert_eq!(back.to_vec(), vec![(None, 1), (Some(1), 2), (Some(2), 3)]);
        let forward = sequence.map_forward(|cur, next| (*cur, next.copied()));
        assert_eq!(forward.to_vec(), vec![(1, Some(2)), (2, Some(3)), (3, None)]);
    }

    #[test]
    fn test_sorted_and_reverse_are_eager() {
        let source = Rc::new(RefCell::new(vec![3, 1, 2]));
        let shared = Rc::clone(&source);
        let sequence = Sequence::from_iter_fn(move || shared.borrow().clone());
        let sorted = sequence.sorted();
        let reversed = sequence.reverse();
        source.borrow_mut().push(0);
        assert_eq!(sorted.to_vec(), vec![1, 2, 3]);
        assert_eq!(reversed.to_vec(), vec![2, 1, 3]);
        assert_eq!(sequence.to_vec(), vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_sorted_by_floats() {
        let sorted = Sequence::of([2.5, -1.0, 0.5]).sorted_by(f64::total_cmp);
        assert_eq!(sorted.to_vec(), vec![-1.0, 0.5, 2.5]);
    }

    #[test]
    fn test_append_prefix_suffix() {
        let middle = Sequence::of([3, 4]);
        let whole = middle.prefix([1, 2]).suffix([5]).append(&Sequence::of([6]));
        assert_eq!(whole.to_vec(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(whole.to_vec(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_concat_skips_empty_parts() {
        let sequence = Sequence::concat([
            Sequence::empty(),
            Sequence::of(['a']),
            Sequence::empty(),
            Sequence::of(['b', 'c']),
        ]);
        assert_eq!(sequence.collect::<String>(), "abc");
    }

    #[test]
    fn test_interleave_sequences() {
        let letters = Sequence::of(['a', 'b', 'c']);
        let digits = Sequence::of(['1', '2']);
        assert_eq!(letters.interleave(&digits).collect::<String>(), "a1b2");
    }

    #[test]
    fn test_repeat_times_and_forever() {
        let sequence = Sequence::of([1, 2]);
        assert_eq!(sequence.repeat_times(3).to_vec(), vec![1, 2, 1, 2, 1, 2]);
        assert_eq!(sequence.repeat_times(0).count(), 0);
        assert_eq!(sequence.repeat().limit(5).to_vec(), vec![1, 2, 1, 2, 1]);
        assert_eq!(Sequence::<i32>::empty().repeat().first(), None);
    }

    #[test]
    fn test_repeat_of_one_shot_is_one_pass() {
        let sequence = Sequence::once(vec![1, 2]);
        assert_eq!(sequence.repeat().to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_partition_into_sequences() {
        let batches = Sequence::of(['a', 'b', 'b', 'c']).partition(|a, b| a != b);
        let batches: Vec<Vec<char>> = batches.map(|batch| batch.to_vec()).to_vec();
        assert_eq!(batches, vec![vec!['a'], vec!['b', 'b'], vec!['c']]);
    }

    #[test]
    fn test_partition_batches_are_restartable() {
        let first = Sequence::of([1, 1, 2]).partition(|a, b| a != b).first();
        let first = first.unwrap_or_else(Sequence::empty);
        assert_eq!(first.to_vec(), vec![1, 1]);
        assert_eq!(first.to_vec(), vec![1, 1]);
    }

    #[test]
    fn test_join() {
        let sequence = Sequence::of([1, 2, 3]);
        assert_eq!(sequence.join(", "), "1, 2, 3");
        assert_eq!(sequence.join_wrapped("[", "|", "]"), "[1|2|3]");
        assert_eq!(Sequence::<i32>::empty().join_wrapped("<", ",", ">"), "<>");
    }

    #[test]
    fn test_collect_into() {
        let sequence = Sequence::of(["x", "y"]);
        let joined = sequence.collect_into(String::new, |acc, item| acc.push_str(item));
        assert_eq!(joined, "xy");
        let set: std::collections::BTreeSet<_> = Sequence::of([3, 1, 3]).collect();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_integer_ranges() {
        assert_eq!(Sequence::<u8>::range(1, 4).to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(Sequence::<i32>::range(3, -1).to_vec(), vec![3, 2, 1, 0, -1]);
        assert_eq!(Sequence::<usize>::range_by(0, 10, 4).to_vec(), vec![0, 4, 8]);
        assert_eq!(Sequence::<i64>::range_by(10, 0, 5).to_vec(), vec![10, 5, 0]);
        assert_eq!(Sequence::<u8>::range(0, 255).count(), 256);
    }

    #[test]
    fn test_float_ranges() {
        assert_eq!(Sequence::<f64>::range(1.0, 3.0).to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(Sequence::<f64>::range_by(1.0, 0.0, 0.5).to_vec(), vec![1.0, 0.5, 0.0]);
        assert_eq!(Sequence::<f32>::range_by(2.0, 5.0, 0.0).to_vec(), vec![2.0]);
        assert_eq!(Sequence::<f64>::range_by(0.0, 0.3, 0.1).count(), 3);
    }

    #[test]
    fn test_float_ranges_with_nan_are_empty() {
        assert_eq!(Sequence::<f64>::range_by(0.0, 1.0, f64::NAN).count(), 0);
        assert_eq!(Sequence::<f64>::range(f64::NAN, 1.0).count(), 0);
        assert_eq!(Sequence::<f32>::range(0.0, f32::NAN).count(), 0);
    }

    #[test]
    fn test_open_ended_ranges() {
        assert_eq!(Sequence::<u8>::positive().count(), 255);
        assert_eq!(Sequence::<i8>::negative().count(), 128);
        assert_eq!(Sequence::<i8>::negative().last(), Some(i8::MIN));
        assert_eq!(Sequence::<u16>::starting_at(65_530).to_vec().len(), 6);
        assert_eq!(Sequence::<i64>::positive().limit(3).to_vec(), vec![1, 2, 3]);
        assert_eq!(Sequence::<f64>::positive().limit(3).to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(Sequence::<f64>::negative().limit(2).to_vec(), vec![-1.0, -2.0]);
        assert_eq!(Sequence::<f32>::starting_at(0.5).limit(2).to_vec(), vec![0.5, 1.5]);
    }

    #[test]
    fn test_from_slice_borrows() {
        let words = vec![String::from("a"), String::from("bc")];
        let lengths = Sequence::from_slice(&words).map(|w| w.len());
        assert_eq!(lengths.fold(0, |a, b| a + b), 3);
        assert_eq!(Sequence::from_slice(&words).last(), Some(&words[1]));
    }

    #[test]
    fn test_for_loop_over_sequence() {
        let sequence: Sequence<'_, i32> = (1..=3).collect();
        let mut total = 0;
        for x in &sequence {
            total += x;
        }
        assert_eq!(total, 6);
    }
}
