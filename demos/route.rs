//! Builds a graph from the command line and prints its breadth-first order
//! and a shortest path.
//!
//! ```text
//! cargo run --example route -- --directed --weighted \
//!     --edge 1:2:2 --edge 1:3:3 --edge 1:5:6 --edge 2:4:1 --edge 4:5:1 --edge 5:6:10 \
//!     --from 1 --to 5 1 7 4 3 5 2 6
//! ```

use std::str::FromStr;

use clap::Parser;
use simplegraph::{Graph, VertexId};

/// An edge given as `FROM:TO` or `FROM:TO:WEIGHT`, naming vertices by value.
#[derive(Clone, Debug)]
struct EdgeArg {
    from: i64,
    to: i64,
    weight: u64,
}

impl FromStr for EdgeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        let parse_value = |part: &str| {
            part.parse::<i64>()
                .map_err(|e| format!("bad vertex {part:?}: {e}"))
        };
        match parts.as_slice() {
            [from, to] => Ok(EdgeArg {
                from: parse_value(from)?,
                to: parse_value(to)?,
                weight: 1,
            }),
            [from, to, weight] => Ok(EdgeArg {
                from: parse_value(from)?,
                to: parse_value(to)?,
                weight: weight
                    .parse()
                    .map_err(|e| format!("bad weight {weight:?}: {e}"))?,
            }),
            _ => Err(format!("expected FROM:TO[:WEIGHT], got {s:?}")),
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Breadth-first order and shortest path over a small graph")]
struct Args {
    /// Vertex values, in insertion order.
    #[arg(required = true)]
    values: Vec<i64>,

    /// Edges as FROM:TO or FROM:TO:WEIGHT.
    #[arg(long = "edge")]
    edges: Vec<EdgeArg>,

    /// Treat edges as one-way.
    #[arg(long)]
    directed: bool,

    /// Use edge weights instead of counting edges.
    #[arg(long)]
    weighted: bool,

    /// Start vertex (defaults to the first value).
    #[arg(long)]
    from: Option<i64>,

    /// Target vertex for the shortest path.
    #[arg(long)]
    to: Option<i64>,
}

fn lookup(graph: &Graph<i64>, value: i64) -> Result<VertexId<i64>, String> {
    graph
        .find(&value)
        .ok_or_else(|| format!("no vertex with value {value}"))
}

fn format_values(graph: &Graph<i64>, ids: &[VertexId<i64>]) -> Result<String, String> {
    let values = ids
        .iter()
        .map(|&id| graph.value(id).map(i64::to_string))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;
    Ok(values.join(" -> "))
}

fn run(args: Args) -> Result<(), String> {
    let mut graph: Graph<i64> = Graph::new(args.values.iter().copied());
    graph.set_directed(args.directed).map_err(|e| e.to_string())?;
    graph.set_weighted(args.weighted).map_err(|e| e.to_string())?;
    for edge in &args.edges {
        let from = lookup(&graph, edge.from)?;
        let to = lookup(&graph, edge.to)?;
        graph
            .add_edge(from, to, edge.weight)
            .map_err(|e| e.to_string())?;
    }

    let start = match args.from {
        Some(value) => lookup(&graph, value)?,
        None => graph.vertex(0).map_err(|e| e.to_string())?,
    };
    let order = graph
        .traverse_breadth_first_from(start)
        .map_err(|e| e.to_string())?;
    println!("breadth-first: {}", format_values(&graph, &order)?);

    if let Some(target) = args.to {
        let target = lookup(&graph, target)?;
        match graph
            .shortest_path(start, target)
            .map_err(|e| e.to_string())?
        {
            Some(path) => println!(
                "shortest path: {} (cost {})",
                format_values(&graph, path.vertices())?,
                path.cost()
            ),
            None => println!("no path"),
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(message) = run(args) {
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}
