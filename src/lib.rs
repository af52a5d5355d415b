//! Small generic containers: [`SequentialList`], an ordered list with O(1)
//! operations at both ends, and [`Graph`], a vertex/edge graph with
//! breadth-first traversal and Dijkstra shortest paths over optionally
//! directed, optionally weighted edges.

pub mod edge;
pub mod error;
pub mod graph;
pub mod path;
pub mod prelude;
pub mod search;
pub mod sequential_list;
pub mod tracing_support;
pub mod vertex;
pub mod weight;

mod graph_id;
mod visited;

#[cfg(test)]
mod graph_tests;
#[cfg(test)]
mod test_util;

pub use edge::{Edge, EdgeId};
pub use error::{Error, Result};
pub use graph::{Graph, Mode};
pub use path::Path;
pub use sequential_list::SequentialList;
pub use vertex::{Vertex, VertexId};
pub use weight::Weight;
