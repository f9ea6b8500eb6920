//! Building cursors from scratch
//!
//! This module provides the source cursors every chain starts from: literal
//! arrays, borrowed vectors, adapted std iterators, and unbounded generators.

mod func;
mod source;

pub use func::{empty, generate, recurse, Empty, Generate, Recurse};
pub use source::{ArrayCursor, IterCursor, VecCursor};
