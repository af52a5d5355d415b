use crate::graph::Mode;

/// Errors reported by the containers in this crate.
///
/// Every operation that returns an error leaves its container unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An index was outside `0..len`.
    #[error("index {index} is out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },
    /// A mode flag was changed after edges were added to the graph.
    #[error("cannot change the {mode} flag once the graph has edges")]
    InvalidState { mode: Mode },
    /// A vertex handle that does not belong to the graph it was used with.
    #[error("vertex #{index} does not belong to this graph")]
    ForeignVertex { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
