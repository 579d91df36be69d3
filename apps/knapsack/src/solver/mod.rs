// Knapsack solver: decision graph construction, Dijkstra, results aggregation.
// Graph building is CPU-bound; handlers run it inside tokio::task::spawn_blocking.

pub mod dijkstra;
pub mod generate;
pub mod graph;
pub mod handlers;

use std::collections::HashMap;

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use thiserror::Error;

use crate::models::{Edge, GraphPayload, Node, ResultsResponse};

pub use dijkstra::{solve_graph, Solution};
pub use graph::DecisionGraph;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("Weights and values must have same length!")]
    LengthMismatch { values: usize, volumes: usize },

    #[error("Problem too large: the decision graph would exceed {limit} nodes")]
    TooLarge { limit: usize },

    #[error("The end of the decision graph cannot be reached")]
    Unreachable,

    #[error("Invalid solution data: {0}")]
    InvalidPayload(String),

    #[error("Item {item} is out of range for {len} items")]
    ItemOutOfRange { item: usize, len: usize },

    #[error(
        "Capacity is too large for the weights: taking item {} would not change the free space",
        .item + 1
    )]
    PrecisionLoss { item: usize },
}

/// Builds the decision graph, solves it and returns the renderable payload.
pub fn solve(
    values: &[f64],
    volumes: &[f64],
    capacity: f64,
    max_nodes: usize,
) -> Result<(GraphPayload, Solution), SolveError> {
    let graph = DecisionGraph::build(values, volumes, capacity, max_nodes)?;
    let solution = solve_graph(&graph)?;
    Ok((to_payload(&graph, &solution), solution))
}

/// Converts a solved graph into the node/edge lists sent to the client.
/// Node ids equal petgraph node indices.
pub fn to_payload(graph: &DecisionGraph, solution: &Solution) -> GraphPayload {
    let mut on_path = vec![false; graph.len()];
    for &id in &solution.path {
        on_path[id] = true;
    }
    let path_edges: Vec<(usize, usize)> = solution.path.windows(2).map(|w| (w[0], w[1])).collect();

    let nodes = graph
        .graph
        .node_indices()
        .map(|id| {
            let v = graph.vertex(id);
            Node {
                id: id.index(),
                label: node_label(graph, id),
                level: (v.item + 1) as usize,
                free_space: v.free_space,
                item: v.item,
                on_path: on_path[id.index()],
            }
        })
        .collect();

    let edges = graph
        .graph
        .edge_references()
        .map(|e| {
            let (from, to) = (e.source().index(), e.target().index());
            let decision = e.weight();
            Edge {
                from,
                to,
                weight: decision.weight,
                label: decision.weight.to_string(),
                taken: decision.taken,
                on_path: path_edges.contains(&(from, to)),
            }
        })
        .collect();

    GraphPayload {
        nodes,
        edges,
        path: solution.path.clone(),
        cost: solution.cost,
    }
}

fn node_label(graph: &DecisionGraph, id: NodeIndex) -> String {
    let v = graph.vertex(id);
    if id == graph.start {
        format!("start\nfree {}", v.free_space)
    } else if id == graph.sink {
        "end".to_string()
    } else {
        format!("item {}\nfree {}", v.item + 1, v.free_space)
    }
}

/// Re-derives the chosen items from a payload's path and totals them.
pub fn summarize(
    payload: &GraphPayload,
    values: &[f64],
    volumes: &[f64],
) -> Result<ResultsResponse, SolveError> {
    if values.len() != volumes.len() {
        return Err(SolveError::LengthMismatch {
            values: values.len(),
            volumes: volumes.len(),
        });
    }

    let by_id: HashMap<usize, &Node> = payload.nodes.iter().map(|n| (n.id, n)).collect();
    let steps = payload
        .path
        .iter()
        .map(|id| {
            by_id
                .get(id)
                .map(|n| (n.free_space, n.item))
                .ok_or_else(|| SolveError::InvalidPayload(format!("path node {id} does not exist")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut items = Vec::new();
    for item in dijkstra::items_along(&steps) {
        let index = usize::try_from(item)
            .map_err(|_| SolveError::InvalidPayload(format!("item index {item} is negative")))?;
        if index >= values.len() {
            return Err(SolveError::ItemOutOfRange {
                item: index,
                len: values.len(),
            });
        }
        items.push(index);
    }

    Ok(ResultsResponse {
        value: items.iter().map(|&i| values[i]).sum(),
        volume: items.iter().map(|&i| volumes[i]).sum(),
        items,
    })
}
