pub use crate::edge::{Edge, EdgeId, OtherEnd};
pub use crate::error::{Error, Result};
pub use crate::graph::{Graph, Mode};
pub use crate::path::Path;
pub use crate::search::{BfsIterator, DfsIterator};
pub use crate::sequential_list::SequentialList;
pub use crate::vertex::{Vertex, VertexId};
pub use crate::weight::Weight;
