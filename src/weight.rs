use std::fmt::Debug;

use num_traits::{CheckedAdd, One, Zero};

/// A numeric edge weight.
///
/// Any totally ordered number with a zero and a one will do, e.g. `u32`,
/// `u64`, `i64` or `usize`.  Shortest-path searches assume weights are never
/// negative; a graph with negative weights gives unspecified results.  A
/// route whose total cost would overflow `W` is treated as unusable.
pub trait Weight: Copy + Ord + Debug + Zero + One + CheckedAdd {}

impl<W> Weight for W where W: Copy + Ord + Debug + Zero + One + CheckedAdd {}
