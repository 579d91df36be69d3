use serde::{Deserialize, Serialize};

/// A decision-graph vertex: the knapsack's free space after deciding `item`.
///
/// `item` is `-1` for the start vertex and `N` (the item count) for the sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: usize,
    pub label: String,
    /// Hierarchical layer: 0 for the start vertex, `item + 1` otherwise.
    pub level: usize,
    pub free_space: f64,
    pub item: i64,
    #[serde(default)]
    pub on_path: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
    pub label: String,
    /// True when following this edge puts the item into the knapsack.
    pub taken: bool,
    #[serde(default)]
    pub on_path: bool,
}

/// The `data` object returned by `/solve` and echoed back to `/results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphPayload {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    /// Node ids of the shortest path, start to sink.
    #[serde(default)]
    pub path: Vec<usize>,
    #[serde(default)]
    pub cost: f64,
}
