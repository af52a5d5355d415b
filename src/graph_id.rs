use std::sync::atomic::{AtomicUsize, Ordering};

/// A global graph identifier counter. Wrapping around would only let two
/// graphs share an id, which weakens the foreign-vertex check but never
/// breaks a graph's own bookkeeping.
static GRAPH_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A unique identifier for a graph instance.  Clones of a graph keep the id
/// of the graph they were cloned from.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct GraphId(usize);

impl GraphId {
    /// Create a new unique graph identifier.
    pub fn new() -> Self {
        GraphId(GRAPH_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}
