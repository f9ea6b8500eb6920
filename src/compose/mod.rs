//! Combinator cursors
//!
//! Each cursor here wraps one or two upstream cursors and changes how the
//! traversal proceeds. None of them buffers more than a single lookahead
//! element, except [`Partition`], which holds the batch it is building.

mod bound;
mod chain;
mod filter;
mod map;
mod partition;
mod repeat;
mod terminal;

pub use bound::{limit, skipping, stepping, Limit, Skipping, Stepping};
pub use chain::{chaining, interleave, Chaining, Interleave};
pub use filter::{filter, filter_indexed, Filter, FilterIndexed};
pub use map::{map, map_back, map_forward, peek, Map, MapBack, MapForward, Peek};
pub use partition::{partition, Partition, INITIAL_BATCH_CAPACITY};
pub use repeat::{repeating, Repeating};
pub use terminal::{ending_at, until, EndingAt, Until};
