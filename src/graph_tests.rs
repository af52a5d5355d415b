//! Property tests over randomly generated graphs.

use std::collections::{HashMap, HashSet};

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use crate::prelude::*;

/// A random graph description.  It is kept separate from [`Graph`] so the
/// same edges can be built into both a weighted and an unweighted graph.
#[derive(Clone, Debug)]
pub struct ArbGraph {
    num_vertices: usize,
    edges: Vec<(usize, usize, u32)>,
    directed: bool,
    start: usize,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        // Limit size for testing
        Self::generate(g, 20, 50)
    }
}

impl ArbGraph {
    fn generate(g: &mut Gen, max_vertices: usize, max_edges: usize) -> Self {
        let num_vertices = 1 + usize::arbitrary(g) % max_vertices;
        let num_edges = usize::arbitrary(g) % max_edges;
        let edges = (0..num_edges)
            .map(|_| {
                (
                    usize::arbitrary(g) % num_vertices,
                    usize::arbitrary(g) % num_vertices,
                    u32::from(u8::arbitrary(g)),
                )
            })
            .collect();
        ArbGraph {
            num_vertices,
            edges,
            directed: bool::arbitrary(g),
            start: usize::arbitrary(g) % num_vertices,
        }
    }

    fn build(&self, weighted: bool) -> Graph<usize, u32> {
        let mut graph = Graph::new(0..self.num_vertices);
        graph.set_directed(self.directed).unwrap();
        graph.set_weighted(weighted).unwrap();
        for &(from, to, weight) in &self.edges {
            let from = graph.vertex(from).unwrap();
            let to = graph.vertex(to).unwrap();
            graph.add_edge(from, to, weight).unwrap();
        }
        graph
    }

    fn start(&self, graph: &Graph<usize, u32>) -> VertexId<usize> {
        graph.vertex(self.start).unwrap()
    }
}

/// Hop counts from `start`, computed level by level.
fn hop_counts(
    graph: &Graph<usize, u32>,
    start: VertexId<usize>,
) -> HashMap<VertexId<usize>, u32> {
    let mut hops = HashMap::from([(start, 0)]);
    let mut level = vec![start];
    let mut depth = 0;
    while !level.is_empty() {
        depth += 1;
        let mut next = Vec::new();
        for vertex in level {
            for neighbor in graph.successors(vertex).unwrap() {
                if !hops.contains_key(&neighbor) {
                    hops.insert(neighbor, depth);
                    next.push(neighbor);
                }
            }
        }
        level = next;
    }
    hops
}

#[quickcheck]
fn prop_bfs_visits_each_reachable_vertex_once(arb: ArbGraph) -> bool {
    let graph = arb.build(false);
    let start = arb.start(&graph);
    let order = graph.traverse_breadth_first_from(start).unwrap();
    let visited: HashSet<_> = order.iter().copied().collect();
    let reachable: HashSet<_> = hop_counts(&graph, start).into_keys().collect();
    order.first() == Some(&start) && visited.len() == order.len() && visited == reachable
}

#[quickcheck]
fn prop_bfs_visits_in_level_order(arb: ArbGraph) -> bool {
    let graph = arb.build(false);
    let start = arb.start(&graph);
    let hops = hop_counts(&graph, start);
    let order = graph.traverse_breadth_first_from(start).unwrap();
    order.windows(2).all(|pair| hops[&pair[0]] <= hops[&pair[1]])
}

#[quickcheck]
fn prop_dfs_visits_same_vertices_as_bfs(arb: ArbGraph) -> bool {
    let graph = arb.build(false);
    let start = arb.start(&graph);
    let bfs: HashSet<_> = graph.bfs(start).unwrap().collect();
    let dfs: Vec<_> = graph.dfs(start).unwrap().collect();
    dfs.len() == bfs.len() && dfs.iter().all(|vertex| bfs.contains(vertex))
}

#[quickcheck]
fn prop_unweighted_cost_is_hop_count(arb: ArbGraph) -> bool {
    let graph = arb.build(false);
    let start = arb.start(&graph);
    let hops = hop_counts(&graph, start);
    graph.vertex_ids().all(|target| {
        let path = graph.shortest_path(start, target).unwrap();
        path.map(|path| path.cost()) == hops.get(&target).copied()
    })
}

#[quickcheck]
fn prop_weighted_cost_matches_pathfinding(arb: ArbGraph) -> bool {
    let graph = arb.build(true);
    let start = arb.start(&graph);
    graph.vertex_ids().all(|target| {
        let expected = pathfinding::prelude::dijkstra(
            &start,
            |&vertex| {
                graph
                    .adjacent(vertex.index())
                    .map(|(edge, neighbor)| (neighbor, edge.weight()))
                    .collect::<Vec<_>>()
            },
            |&vertex| vertex == target,
        )
        .map(|(_, cost)| cost);
        let actual = graph.shortest_path(start, target).unwrap().map(|path| path.cost());
        actual == expected
    })
}

#[quickcheck]
fn prop_paths_follow_edges(arb: ArbGraph) -> bool {
    let graph = arb.build(true);
    let start = arb.start(&graph);
    let paths = graph.shortest_paths_from(start).unwrap();
    paths.values().all(|path| {
        let vertices = path.vertices();
        let mut cost = 0;
        let edges_ok = path.edges().iter().enumerate().all(|(i, &eid)| {
            let edge = graph.edge(eid).unwrap();
            cost += graph.effective_weight(edge);
            let (from, to) = (vertices[i], vertices[i + 1]);
            (edge.source() == from && edge.target() == to)
                || (!graph.is_directed() && edge.source() == to && edge.target() == from)
        });
        path.first() == Some(start) && edges_ok && cost == path.cost()
    })
}

#[quickcheck]
fn prop_single_target_agrees_with_full_tree(arb: ArbGraph) -> bool {
    let graph = arb.build(true);
    let start = arb.start(&graph);
    let paths = graph.shortest_paths_from(start).unwrap();
    graph.vertex_ids().all(|target| {
        let single = graph.shortest_path(start, target).unwrap().map(|p| p.cost());
        single == paths.get(&target).map(|p| p.cost())
    })
}

#[quickcheck]
fn prop_queries_are_idempotent(arb: ArbGraph) -> bool {
    let graph = arb.build(true);
    let start = arb.start(&graph);
    let last = graph.vertex(arb.num_vertices - 1).unwrap();
    graph.traverse_breadth_first() == graph.traverse_breadth_first()
        && graph.shortest_path(start, last) == graph.shortest_path(start, last)
}

#[quickcheck]
fn prop_mode_changes_rejected_once_edges_exist(arb: ArbGraph) -> bool {
    let mut graph = arb.build(false);
    let directed = graph.is_directed();
    let result = graph.set_directed(!directed);
    if graph.num_edges() == 0 {
        result.is_ok()
    } else {
        result
            == Err(Error::InvalidState {
                mode: Mode::Directed,
            })
            && graph.is_directed() == directed
    }
}

#[cfg(feature = "slow_tests")]
#[test]
fn test_large_graph_costs_match_pathfinding() {
    use crate::tracing_support::{dump_span_timings, info_span, reset_span_timings};

    reset_span_timings();
    let _test_span = info_span!("test_large_graph_costs_match_pathfinding").entered();
    let mut g = Gen::new(1000);
    for _ in 0..5 {
        let arb = {
            let _span = info_span!("generate_large_graph").entered();
            ArbGraph::generate(&mut g, 2000, 10_000)
        };
        let graph = arb.build(true);
        let start = arb.start(&graph);
        let paths = graph.shortest_paths_from(start).unwrap();
        let reachable: HashSet<_> = graph.bfs(start).unwrap().collect();
        assert_eq!(paths.len(), reachable.len());

        // Spot-check single-target searches against an independent Dijkstra.
        for target in graph.vertex_ids().step_by(97) {
            let expected = pathfinding::prelude::dijkstra(
                &start,
                |&vertex| {
                    graph
                        .adjacent(vertex.index())
                        .map(|(edge, neighbor)| (neighbor, edge.weight()))
                        .collect::<Vec<_>>()
                },
                |&vertex| vertex == target,
            )
            .map(|(_, cost)| cost);
            let actual = graph.shortest_path(start, target).unwrap().map(|p| p.cost());
            assert_eq!(actual, expected);
            assert_eq!(paths.get(&target).map(|p| p.cost()), expected);
        }
    }
    dump_span_timings();
}
