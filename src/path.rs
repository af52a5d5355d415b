use derivative::Derivative;

use crate::{edge::EdgeId, vertex::VertexId};

/// A path found by a shortest-path search: the vertices visited, the edges
/// followed between them and the total cost.
///
/// A path always has at least one vertex, and exactly one more vertex than
/// edges.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "W: Clone"),
    Debug(bound = "W: std::fmt::Debug"),
    PartialEq(bound = "W: PartialEq"),
    Eq(bound = "W: Eq")
)]
pub struct Path<T, W> {
    vertices: Vec<VertexId<T>>,
    edges: Vec<EdgeId>,
    cost: W,
}

impl<T, W: Copy> Path<T, W> {
    pub(crate) fn new(vertices: Vec<VertexId<T>>, edges: Vec<EdgeId>, cost: W) -> Self {
        debug_assert_eq!(vertices.len(), edges.len() + 1);
        Self {
            vertices,
            edges,
            cost,
        }
    }

    /// The vertices along the path, from start to end.
    pub fn vertices(&self) -> &[VertexId<T>] {
        &self.vertices
    }

    /// The edges followed, in order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Total cost of the path, counting each edge as one in an unweighted
    /// graph.
    pub fn cost(&self) -> W {
        self.cost
    }

    pub fn first(&self) -> Option<VertexId<T>> {
        self.vertices.first().copied()
    }

    pub fn last(&self) -> Option<VertexId<T>> {
        self.vertices.last().copied()
    }

    /// Number of edges in the path.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True for the trivial path from a vertex to itself.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn into_vertices(self) -> Vec<VertexId<T>> {
        self.vertices
    }
}
