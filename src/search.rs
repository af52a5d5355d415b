use crate::{
    graph::Graph, sequential_list::SequentialList, vertex::VertexId, visited::VisitedSet,
    weight::Weight,
};

/// Breadth-first iterator over the vertices reachable from a start vertex.
///
/// Neighbours are queued in the order their edges were added to the graph,
/// and a vertex is marked visited when it is queued, so no vertex is queued
/// twice.
pub struct BfsIterator<'g, T, W> {
    graph: &'g Graph<T, W>,
    visited: VisitedSet,
    queue: SequentialList<VertexId<T>>,
}

impl<'g, T, W: Weight> BfsIterator<'g, T, W> {
    /// `start` must already be known to belong to `graph`.
    pub(crate) fn new(graph: &'g Graph<T, W>, start: VertexId<T>) -> Self {
        let mut visited = VisitedSet::new(graph.num_vertices());
        visited.insert(start.index());
        let mut queue = SequentialList::new();
        queue.append(start);
        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<T, W: Weight> Iterator for BfsIterator<'_, T, W> {
    type Item = VertexId<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let vid = self.queue.remove_first()?;
        for (_, neighbor) in self.graph.adjacent(vid.index()) {
            if self.visited.insert(neighbor.index()) {
                self.queue.append(neighbor);
            }
        }
        Some(vid)
    }
}

/// Depth-first (pre-order) iterator over the vertices reachable from a start
/// vertex.  Among the neighbours of a vertex, the one whose edge was added
/// first is explored first.
pub struct DfsIterator<'g, T, W> {
    graph: &'g Graph<T, W>,
    visited: VisitedSet,
    stack: Vec<VertexId<T>>,
}

impl<'g, T, W: Weight> DfsIterator<'g, T, W> {
    /// `start` must already be known to belong to `graph`.
    pub(crate) fn new(graph: &'g Graph<T, W>, start: VertexId<T>) -> Self {
        Self {
            graph,
            visited: VisitedSet::new(graph.num_vertices()),
            stack: vec![start],
        }
    }
}

impl<T, W: Weight> Iterator for DfsIterator<'_, T, W> {
    type Item = VertexId<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(vid) = self.stack.pop() {
            if self.visited.insert(vid.index()) {
                let mut successors = self
                    .graph
                    .adjacent(vid.index())
                    .map(|(_, neighbor)| neighbor)
                    .filter(|neighbor| !self.visited.contains(neighbor.index()))
                    .collect::<Vec<_>>();
                successors.reverse();
                self.stack.extend(successors);
                return Some(vid);
            }
        }
        None
    }
}
