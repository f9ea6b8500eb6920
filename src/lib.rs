//! # Lazyseq: Lazy, Restartable Sequences
//!
//! Build chains of lazy transformations over ordered elements and drive them
//! with terminal operations. Nothing is pulled from a source until a terminal
//! operation asks for it.
//!
//! ## Core Types
//!
//! - **[`Cursor`]**: A one-pass traversal with an idempotent `has_next()` lookahead
//! - **[`MutCursor`]**: A cursor that can also remove the element it last returned
//! - **[`Sequence`]**: A shared producer of fresh cursors, with combinator methods
//!
//! ## Key Features
//!
//! - **Composable**: Every combinator wraps a cursor in one more cursor
//! - **Restartable**: Sequences over re-iterable sources can be traversed any number of times
//! - **Lazy**: Unbounded sources like [`Sequence::recurse`] are fine as long as something bounds them
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let squares = Sequence::recurse(1u32, |x| x + 1).map(|x| x * x);
//! let small = squares.until_where(|x| *x > 50);
//!
//! assert_eq!(small.to_vec(), vec![1, 4, 9, 16, 25, 36, 49]);
//! assert_eq!(small.join(", "), "1, 4, 9, 16, 25, 36, 49");
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`Sequence::of(items)`](Sequence::of) - Restartable sequence over literal values
//! - [`Sequence::from_iter_fn(f)`](Sequence::from_iter_fn) - Restartable sequence over a re-iterable source
//! - [`Sequence::once(iter)`](Sequence::once) - One-shot sequence over a single iterator
//! - [`Sequence::recurse(seed, f)`](Sequence::recurse) - Unbounded `seed, f(seed), f(f(seed)), ...`
//!
//! **Cursor-level Building Blocks:**
//! - [`chaining(sources)`](compose::chaining) - Drain cursors one after another
//! - [`repeating(factory, times)`](compose::repeating) - Replay fresh cursors from a factory
//! - [`drive::fold`] and friends - Drive any cursor to completion

pub mod build;
pub mod compose;
mod cursor;
pub mod drive;
mod error;
mod iter;
mod lookahead;
pub mod prelude;
mod sequence;
mod view;

pub use cursor::*;
pub use error::*;
pub use iter::*;
pub use lookahead::*;
pub use sequence::*;
pub use view::*;
