//! [`Graph`] is the one graph type in this crate: an arena of vertices plus
//! an insertion-ordered list of edges, with two runtime mode flags.
//!
//! - `directed`: when false, every edge can be followed in both directions.
//! - `weighted`: when false, every edge costs one, whatever weight it was
//!   added with.
//!
//! Both flags default to false and can only be changed while the graph has no
//! edges.  Vertices are addressed by [`VertexId`] handles, which compare by
//! identity, so a graph may hold several vertices with equal values.
//!
//! All searches share a single adjacency query that reports a vertex's
//! neighbours in the order their edges were added.  That order is what makes
//! breadth-first traversal and shortest-path tie-breaking deterministic.
//!
//! # Example
//!
//! ```
//! use simplegraph::Graph;
//!
//! let mut graph: Graph<&str> = Graph::new(["a", "b", "c"]);
//! graph.set_weighted(true)?;
//! let (a, b, c) = (graph.vertex(0)?, graph.vertex(1)?, graph.vertex(2)?);
//! graph.add_edge(a, b, 5)?;
//! graph.add_edge(a, c, 1)?;
//! graph.add_edge(c, b, 1)?;
//!
//! let path = graph.shortest_path(a, b)?.expect("b is reachable");
//! assert_eq!(path.cost(), 2);
//! assert_eq!(path.vertices(), &[a, c, b]);
//! # Ok::<(), simplegraph::Error>(())
//! ```

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
    fmt::{self, Display},
    ops::Index,
};

use crate::{
    edge::{Edge, EdgeId},
    error::{Error, Result},
    graph_id::GraphId,
    path::Path,
    search::{BfsIterator, DfsIterator},
    sequential_list::SequentialList,
    tracing_support::info_span,
    vertex::{Vertex, VertexId},
    visited::VisitedSet,
    weight::Weight,
};

/// The graph's mode flags, named in [`Error::InvalidState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Directed,
    Weighted,
}

impl Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Directed => f.write_str("directed"),
            Mode::Weighted => f.write_str("weighted"),
        }
    }
}

/// Distances and predecessor links produced by one run of Dijkstra's
/// algorithm, indexed by vertex index.  `None` distance means unreached.
struct ShortestPathTree<W> {
    distance: Vec<Option<W>>,
    predecessor: Vec<Option<(EdgeId, usize)>>,
}

/// A graph of values of type `T` joined by edges weighted with `W`.
///
/// The graph owns its vertices and edges; callers hold [`VertexId`] and
/// [`EdgeId`] handles.  Mutation needs `&mut self` and searches borrow the
/// graph, so the graph cannot change while a traversal is in flight.
#[derive(Clone, Debug)]
pub struct Graph<T, W = u64> {
    vertices: SequentialList<Vertex<T>>,
    edges: SequentialList<Edge<T, W>>,
    // Incident edge ids per vertex index, in insertion order.  An edge is
    // listed at both of its ends, and once for a self-loop.
    incidence: Vec<Vec<EdgeId>>,
    directed: bool,
    weighted: bool,
    id: GraphId,
}

impl<T, W: Weight> Default for Graph<T, W> {
    fn default() -> Self {
        Self {
            vertices: SequentialList::new(),
            edges: SequentialList::new(),
            incidence: Vec::new(),
            directed: false,
            weighted: false,
            id: GraphId::new(),
        }
    }
}

impl<T, W: Weight> Graph<T, W> {
    /// Creates an undirected, unweighted graph with one vertex per value, in
    /// the order given.
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        let mut graph = Self::default();
        for value in values {
            graph.add_vertex(value);
        }
        graph
    }

    // Mode flags

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Sets whether edges are one-way.  Fails with [`Error::InvalidState`] if
    /// this would change the flag after an edge has been added.
    pub fn set_directed(&mut self, directed: bool) -> Result<()> {
        self.set_mode(Mode::Directed, directed)
    }

    /// Sets whether searches use edge weights.  Fails with
    /// [`Error::InvalidState`] if this would change the flag after an edge has
    /// been added.
    pub fn set_weighted(&mut self, weighted: bool) -> Result<()> {
        self.set_mode(Mode::Weighted, weighted)
    }

    fn set_mode(&mut self, mode: Mode, value: bool) -> Result<()> {
        let current = match mode {
            Mode::Directed => self.directed,
            Mode::Weighted => self.weighted,
        };
        if current == value {
            return Ok(());
        }
        if !self.edges.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(%mode, value, num_edges = self.edges.len(), "rejected mode change");
            return Err(Error::InvalidState { mode });
        }
        match mode {
            Mode::Directed => self.directed = value,
            Mode::Weighted => self.weighted = value,
        }
        Ok(())
    }

    // Vertices

    /// Adds a vertex holding `value`, returning its handle.
    pub fn add_vertex(&mut self, value: T) -> VertexId<T> {
        let id = self.vertex_id(self.vertices.len());
        self.vertices.append(Vertex::new(id, value));
        self.incidence.push(Vec::new());
        id
    }

    /// Gets the handle of the vertex at position `index` in insertion order.
    pub fn vertex(&self, index: usize) -> Result<VertexId<T>> {
        self.vertices.at(index).map(Vertex::id)
    }

    /// Gets the first vertex, in insertion order, whose value equals `value`.
    pub fn find(&self, value: &T) -> Option<VertexId<T>>
    where
        T: PartialEq,
    {
        self.vertices
            .iter()
            .find(|vertex| vertex.value() == value)
            .map(Vertex::id)
    }

    /// Gets the value stored in a vertex.
    pub fn value(&self, id: VertexId<T>) -> Result<&T> {
        let index = self.check_owned(id)?;
        Ok(self.vertices[index].value())
    }

    /// Gets an iterator over all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> + '_ {
        self.vertices.iter()
    }

    /// Gets an iterator over all vertex handles in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId<T>> + '_ {
        self.vertices.iter().map(Vertex::id)
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn vertex_id(&self, index: usize) -> VertexId<T> {
        VertexId::new(index, self.id)
    }

    /// Returns the index of `id` if it belongs to this graph.
    fn check_owned(&self, id: VertexId<T>) -> Result<usize> {
        if id.graph_id == self.id && id.index() < self.vertices.len() {
            Ok(id.index())
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(?id, "rejected foreign vertex");
            Err(Error::ForeignVertex { index: id.index() })
        }
    }

    // Edges

    /// Adds an edge from `from` to `to`.  The weight is stored even when the
    /// graph is unweighted, but is then ignored by searches.  Parallel edges
    /// and self-loops are allowed.
    ///
    /// Fails with [`Error::ForeignVertex`] without changing the graph if
    /// either vertex belongs to another graph.
    pub fn add_edge(&mut self, from: VertexId<T>, to: VertexId<T>, weight: W) -> Result<EdgeId> {
        let source = self.check_owned(from)?;
        let target = self.check_owned(to)?;
        let id = EdgeId(self.edges.len());
        self.edges.append(Edge::new(id, from, to, weight));
        self.incidence[source].push(id);
        if target != source {
            self.incidence[target].push(id);
        }
        Ok(id)
    }

    /// Adds an edge with weight one.
    pub fn connect(&mut self, from: VertexId<T>, to: VertexId<T>) -> Result<EdgeId> {
        self.add_edge(from, to, W::one())
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge<T, W>> {
        self.edges.get(id.index())
    }

    /// Gets an iterator over all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<T, W>> + '_ {
        self.edges.iter()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// The cost searches charge for following `edge`: its weight in a
    /// weighted graph, otherwise one.
    pub fn effective_weight(&self, edge: &Edge<T, W>) -> W {
        if self.weighted {
            edge.weight()
        } else {
            W::one()
        }
    }

    /// Gets the edges that can be followed out of the vertex at `index`,
    /// paired with the vertex each one leads to, in edge insertion order.
    /// In an undirected graph this includes edges that end at the vertex.
    pub(crate) fn adjacent(
        &self,
        index: usize,
    ) -> impl Iterator<Item = (&Edge<T, W>, VertexId<T>)> + '_ {
        let directed = self.directed;
        self.incidence
            .get(index)
            .into_iter()
            .flatten()
            .filter_map(move |&eid| {
                let edge = self.edges.get(eid.index())?;
                if edge.source().index() == index {
                    Some((edge, edge.target()))
                } else if !directed {
                    Some((edge, edge.source()))
                } else {
                    None
                }
            })
    }

    /// Gets the distinct vertices reachable from `vertex` by one edge, in the
    /// order their first connecting edge was added.
    pub fn successors(&self, vertex: VertexId<T>) -> Result<Vec<VertexId<T>>> {
        let index = self.check_owned(vertex)?;
        let mut seen = VisitedSet::new(self.vertices.len());
        Ok(self
            .adjacent(index)
            .filter_map(|(_, neighbor)| seen.insert(neighbor.index()).then_some(neighbor))
            .collect())
    }

    // Traversal

    /// Traverses the graph breadth-first from its first vertex.  Returns an
    /// empty vector for an empty graph.
    pub fn traverse_breadth_first(&self) -> Vec<VertexId<T>> {
        let _span = info_span!("traverse_breadth_first").entered();
        match self.vertices.first() {
            Some(first) => self.bfs_from_owned(first.id()).collect(),
            None => Vec::new(),
        }
    }

    /// Traverses the graph breadth-first from `start`, returning every
    /// reachable vertex exactly once.  Neighbours are visited in the order
    /// their edges were added.
    pub fn traverse_breadth_first_from(&self, start: VertexId<T>) -> Result<Vec<VertexId<T>>> {
        let _span = info_span!("traverse_breadth_first").entered();
        Ok(self.bfs(start)?.collect())
    }

    /// Lazy form of [`Self::traverse_breadth_first_from`].
    pub fn bfs(&self, start: VertexId<T>) -> Result<BfsIterator<'_, T, W>> {
        self.check_owned(start)?;
        Ok(self.bfs_from_owned(start))
    }

    fn bfs_from_owned(&self, start: VertexId<T>) -> BfsIterator<'_, T, W> {
        BfsIterator::new(self, start)
    }

    /// Traverses the graph depth-first (pre-order) from `start`.
    pub fn traverse_depth_first_from(&self, start: VertexId<T>) -> Result<Vec<VertexId<T>>> {
        let _span = info_span!("traverse_depth_first").entered();
        Ok(self.dfs(start)?.collect())
    }

    /// Lazy form of [`Self::traverse_depth_first_from`].
    pub fn dfs(&self, start: VertexId<T>) -> Result<DfsIterator<'_, T, W>> {
        self.check_owned(start)?;
        Ok(DfsIterator::new(self, start))
    }

    // Shortest paths

    /// Finds a cheapest path from `from` to `to` with Dijkstra's algorithm.
    ///
    /// Returns `Ok(None)` when `to` cannot be reached.  When several paths
    /// cost the same, the one found first wins, where vertices are explored
    /// in the order of the edges that reached them.  The path from a vertex to
    /// itself is that vertex alone, at cost zero.
    ///
    /// Weights must not be negative; this is not checked.  Routes whose cost
    /// would overflow `W` are skipped, so a target reachable only that way is
    /// reported as unreachable.
    pub fn shortest_path(
        &self,
        from: VertexId<T>,
        to: VertexId<T>,
    ) -> Result<Option<Path<T, W>>> {
        let source = self.check_owned(from)?;
        let target = self.check_owned(to)?;
        let _span = info_span!("shortest_path").entered();
        let tree = self.dijkstra(source, Some(target));
        Ok(self.path_to(&tree, source, target))
    }

    /// Finds a cheapest path from `from` to every vertex reachable from it,
    /// including `from` itself.
    pub fn shortest_paths_from(
        &self,
        from: VertexId<T>,
    ) -> Result<HashMap<VertexId<T>, Path<T, W>>> {
        let source = self.check_owned(from)?;
        let _span = info_span!("shortest_paths_from").entered();
        let tree = self.dijkstra(source, None);
        Ok((0..self.vertices.len())
            .filter_map(|target| {
                self.path_to(&tree, source, target)
                    .map(|path| (self.vertex_id(target), path))
            })
            .collect())
    }

    /// Runs Dijkstra's algorithm from `source`, stopping as soon as `target`
    /// (if given) is finalized.
    fn dijkstra(&self, source: usize, target: Option<usize>) -> ShortestPathTree<W> {
        let n = self.vertices.len();
        let mut tree = ShortestPathTree {
            distance: vec![None; n],
            predecessor: vec![None; n],
        };
        let mut finalized = VisitedSet::new(n);
        // Entries are (cost, push order, vertex); the push order breaks ties
        // in favour of the vertex reached first.
        let mut frontier = BinaryHeap::new();
        let mut pushes = 0usize;

        tree.distance[source] = Some(W::zero());
        frontier.push(Reverse((W::zero(), pushes, source)));

        while let Some(Reverse((cost, _, current))) = frontier.pop() {
            if !finalized.insert(current) {
                continue;
            }
            if Some(current) == target {
                break;
            }
            for (edge, neighbor) in self.adjacent(current) {
                let next = neighbor.index();
                if finalized.contains(next) {
                    continue;
                }
                let Some(candidate) = cost.checked_add(&self.effective_weight(edge)) else {
                    continue;
                };
                if tree.distance[next].is_none_or(|known| candidate < known) {
                    tree.distance[next] = Some(candidate);
                    tree.predecessor[next] = Some((edge.id(), current));
                    pushes += 1;
                    frontier.push(Reverse((candidate, pushes, next)));
                }
            }
        }

        tree
    }

    /// Follows predecessor links back from `target` to `source`.
    fn path_to(
        &self,
        tree: &ShortestPathTree<W>,
        source: usize,
        target: usize,
    ) -> Option<Path<T, W>> {
        let cost = (*tree.distance.get(target)?)?;
        let mut vertices = vec![self.vertex_id(target)];
        let mut edges = Vec::new();
        let mut current = target;
        while current != source {
            let (edge, previous) = tree.predecessor[current]?;
            edges.push(edge);
            vertices.push(self.vertex_id(previous));
            current = previous;
        }
        vertices.reverse();
        edges.reverse();
        Some(Path::new(vertices, edges, cost))
    }

    // Components

    /// Partitions the graph into connected components (undirected graphs) or
    /// strongly connected components (directed graphs).  Each component is
    /// listed in vertex insertion order, and components are ordered by their
    /// first vertex.
    #[cfg(feature = "pathfinding")]
    pub fn components(&self) -> Vec<Vec<VertexId<T>>> {
        let _span = info_span!("components").entered();
        let ids: Vec<_> = self.vertex_ids().collect();
        let neighbors = |vid: &VertexId<T>| {
            self.adjacent(vid.index())
                .map(|(_, neighbor)| neighbor)
                .collect::<Vec<_>>()
        };
        let mut components: Vec<Vec<VertexId<T>>> = if self.directed {
            pathfinding::prelude::strongly_connected_components(&ids, neighbors)
        } else {
            pathfinding::prelude::connected_components(&ids, neighbors)
                .into_iter()
                .map(|component| component.into_iter().collect())
                .collect()
        };
        for component in &mut components {
            component.sort();
        }
        components.sort_by_key(|component| component.first().map(VertexId::index));
        components
    }
}

impl<T, W> Index<usize> for Graph<T, W> {
    type Output = Vertex<T>;

    /// Panics if `index` is out of bounds; use [`Graph::vertex`] for a
    /// fallible lookup.
    fn index(&self, index: usize) -> &Vertex<T> {
        &self.vertices[index]
    }
}
