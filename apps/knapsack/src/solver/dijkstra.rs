//! Shortest path over a [`DecisionGraph`] plus item extraction.
//!
//! The search is petgraph's A* with a zero heuristic, which is Dijkstra that
//! stops at the sink and also returns the path.

use petgraph::algo::astar;
use petgraph::visit::EdgeRef;

use crate::solver::graph::DecisionGraph;
use crate::solver::SolveError;

/// Best path through the decision graph and the items it takes.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Vertex ids, start to sink.
    pub path: Vec<usize>,
    pub cost: f64,
    /// Zero-based item indices, ascending.
    pub items: Vec<usize>,
}

/// Items taken along a path of `(free_space, item)` steps. The last step is
/// the sink and never counts as a take.
pub fn items_along(steps: &[(f64, i64)]) -> Vec<i64> {
    if steps.len() < 2 {
        return Vec::new();
    }
    steps[..steps.len() - 1]
        .windows(2)
        .filter(|w| w[1].0 < w[0].0)
        .map(|w| w[1].1)
        .collect()
}

/// Finds the cheapest start-to-sink path and extracts the chosen items.
pub fn solve_graph(graph: &DecisionGraph) -> Result<Solution, SolveError> {
    let sink = graph.sink;
    let (cost, nodes) = astar(
        &graph.graph,
        graph.start,
        |n| n == sink,
        |e| e.weight().weight,
        |_| 0.0,
    )
    .ok_or(SolveError::Unreachable)?;

    let steps: Vec<(f64, i64)> = nodes
        .iter()
        .map(|&id| {
            let v = graph.vertex(id);
            (v.free_space, v.item)
        })
        .collect();

    let items = items_along(&steps)
        .into_iter()
        .filter_map(|i| usize::try_from(i).ok())
        .collect();

    Ok(Solution {
        path: nodes.iter().map(|id| id.index()).collect(),
        cost,
        items,
    })
}
