use std::{fmt::Debug, marker::PhantomData};

use derivative::Derivative;

use crate::graph_id::GraphId;

/// An opaque handle to a vertex in a [`Graph`](crate::Graph).
///
/// Handles compare by identity: two vertices holding equal values still have
/// different handles.  A handle is only meaningful for the graph that created
/// it (and clones of that graph); passing it to another graph fails with
/// [`Error::ForeignVertex`](crate::Error::ForeignVertex).
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Copy(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Hash(bound = ""),
    PartialOrd(bound = ""),
    Ord(bound = "")
)]
pub struct VertexId<T> {
    index: usize,
    pub(crate) graph_id: GraphId,
    #[derivative(PartialEq = "ignore", Hash = "ignore", PartialOrd = "ignore", Ord = "ignore")]
    _value: PhantomData<fn() -> T>,
}

impl<T> VertexId<T> {
    pub(crate) fn new(index: usize, graph_id: GraphId) -> Self {
        Self {
            index,
            graph_id,
            _value: PhantomData,
        }
    }

    /// The position of the vertex in its graph's insertion order.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T> Debug for VertexId<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VertexId({})", self.index)
    }
}

/// A vertex stored in a graph: its handle and its value.  Vertices are never
/// changed once added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vertex<T> {
    id: VertexId<T>,
    value: T,
}

impl<T> Vertex<T> {
    pub(crate) fn new(id: VertexId<T>, value: T) -> Self {
        Self { id, value }
    }

    pub fn id(&self) -> VertexId<T> {
        self.id
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_identity_ignores_value_type() {
        let graph_id = GraphId::new();
        let a = VertexId::<String>::new(0, graph_id);
        let b = VertexId::<String>::new(1, graph_id);
        assert_ne!(a, b);
        let copy = a;
        assert_eq!(a, copy);
        assert!(a < b);
        assert_eq!(HashSet::from([a, b, a]).len(), 2);
        assert_eq!(format!("{:?}", b), "VertexId(1)");
    }

    #[test]
    fn test_same_index_different_graph() {
        let a = VertexId::<()>::new(0, GraphId::new());
        let b = VertexId::<()>::new(0, GraphId::new());
        assert_ne!(a, b);
    }
}
