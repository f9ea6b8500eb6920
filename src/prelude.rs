//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Cursor, FilteredView, Lookahead, MutCursor, SeqError, Sequence};

// Sources
pub use crate::build::{empty, generate, recurse, ArrayCursor, IterCursor, VecCursor};

// Composition
pub use crate::compose::{chaining, interleave, repeating};
