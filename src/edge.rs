use derivative::Derivative;

use crate::vertex::VertexId;

/// Identifies an edge by its position in the graph's edge insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Return type of [`Edge::other_end`].
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Copy(bound = ""),
    Debug(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub enum OtherEnd<T> {
    /// The source of the edge for which the target was passed.
    Source(VertexId<T>),
    /// The target of the edge for which the source was passed.
    Target(VertexId<T>),
    /// The edge is a self-loop; both ends are the same vertex.
    SelfLoop(VertexId<T>),
}

impl<T> OtherEnd<T> {
    /// Consumes the `OtherEnd`, returning the vertex it names.
    pub fn into_inner(self) -> VertexId<T> {
        match self {
            OtherEnd::Source(v) | OtherEnd::Target(v) | OtherEnd::SelfLoop(v) => v,
        }
    }
}

/// An edge record.  The graph stores every edge with a source and a target;
/// whether the edge can also be followed from target to source is decided by
/// the graph's `directed` flag, not by the edge.
///
/// The weight is always stored, even in an unweighted graph, where searches
/// treat every edge as costing one.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "W: Clone"),
    Debug(bound = "W: std::fmt::Debug"),
    PartialEq(bound = "W: PartialEq"),
    Eq(bound = "W: Eq")
)]
pub struct Edge<T, W> {
    id: EdgeId,
    source: VertexId<T>,
    target: VertexId<T>,
    weight: W,
}

impl<T, W: Copy> Edge<T, W> {
    pub(crate) fn new(id: EdgeId, source: VertexId<T>, target: VertexId<T>, weight: W) -> Self {
        Self {
            id,
            source,
            target,
            weight,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn source(&self) -> VertexId<T> {
        self.source
    }

    pub fn target(&self) -> VertexId<T> {
        self.target
    }

    /// The weight the edge was added with.
    pub fn weight(&self) -> W {
        self.weight
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Given one end of the edge, returns the other end, or `None` if
    /// `vertex` is not an endpoint of this edge.
    pub fn other_end(&self, vertex: VertexId<T>) -> Option<OtherEnd<T>> {
        if self.is_self_loop() && vertex == self.source {
            Some(OtherEnd::SelfLoop(vertex))
        } else if vertex == self.source {
            Some(OtherEnd::Target(self.target))
        } else if vertex == self.target {
            Some(OtherEnd::Source(self.source))
        } else {
            None
        }
    }
}
