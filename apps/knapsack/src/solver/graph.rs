//! Decision graph of a 0/1 knapsack instance.
//!
//! Vertices are `(free_space, item)` pairs: the space left in the knapsack
//! after deciding whether to take `item`. Layer `i` holds every distinct free
//! space reachable after deciding items `0..=i`. From each vertex two edges
//! lead to the next layer:
//! - skip: same free space, weight `max_value`
//! - take: free space minus the item's volume (only if it stays `>= 0`),
//!   weight `max_value - value`
//!
//! Every path from start to sink crosses exactly `N` decision edges, so the
//! shortest path is the one that maximises the value of the taken items.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::solver::SolveError;

/// Item index of the start vertex.
pub const START_ITEM: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub free_space: f64,
    pub item: i64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub weight: f64,
    pub taken: bool,
}

#[derive(Debug, Clone)]
pub struct DecisionGraph {
    pub graph: DiGraph<Vertex, Decision>,
    pub start: NodeIndex,
    pub sink: NodeIndex,
}

impl DecisionGraph {
    /// Builds the graph layer by layer. Fails once more than `max_nodes`
    /// vertices would be needed.
    pub fn build(
        values: &[f64],
        volumes: &[f64],
        capacity: f64,
        max_nodes: usize,
    ) -> Result<Self, SolveError> {
        if values.len() != volumes.len() {
            return Err(SolveError::LengthMismatch {
                values: values.len(),
                volumes: volumes.len(),
            });
        }

        let item_count = values.len();
        let max_value = values.iter().copied().fold(0.0_f64, f64::max);

        let mut graph = DiGraph::new();
        let start = add_vertex(&mut graph, capacity, START_ITEM, max_nodes)?;
        let mut layer = vec![start];

        for (i, (&value, &volume)) in values.iter().zip(volumes).enumerate() {
            let item = i as i64;
            // Dedup key is the exact bit pattern, so equal free spaces merge
            // only when they are bitwise identical.
            let mut seen: HashMap<u64, NodeIndex> = HashMap::new();
            let mut next_layer = Vec::new();

            for &from in &layer {
                let free = graph[from].free_space;

                let skip = layer_vertex(
                    &mut graph,
                    &mut seen,
                    &mut next_layer,
                    free,
                    item,
                    max_nodes,
                )?;
                graph.add_edge(
                    from,
                    skip,
                    Decision {
                        weight: max_value,
                        taken: false,
                    },
                );

                let remaining = free - volume;
                if remaining < 0.0 {
                    continue;
                }
                // A take that leaves the free space unchanged would land on the
                // skip vertex and vanish from the extracted items.
                if remaining == free {
                    return Err(SolveError::PrecisionLoss { item: i });
                }
                let take = layer_vertex(
                    &mut graph,
                    &mut seen,
                    &mut next_layer,
                    remaining,
                    item,
                    max_nodes,
                )?;
                graph.add_edge(
                    from,
                    take,
                    Decision {
                        weight: max_value - value,
                        taken: true,
                    },
                );
            }

            layer = next_layer;
        }

        let sink = add_vertex(&mut graph, 0.0, item_count as i64, max_nodes)?;
        for &from in &layer {
            graph.add_edge(
                from,
                sink,
                Decision {
                    weight: 0.0,
                    taken: false,
                },
            );
        }

        Ok(DecisionGraph { graph, start, sink })
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn vertex(&self, id: NodeIndex) -> Vertex {
        self.graph[id]
    }
}

fn layer_vertex(
    graph: &mut DiGraph<Vertex, Decision>,
    seen: &mut HashMap<u64, NodeIndex>,
    next_layer: &mut Vec<NodeIndex>,
    free_space: f64,
    item: i64,
    max_nodes: usize,
) -> Result<NodeIndex, SolveError> {
    if let Some(&id) = seen.get(&free_space.to_bits()) {
        return Ok(id);
    }
    let id = add_vertex(graph, free_space, item, max_nodes)?;
    seen.insert(free_space.to_bits(), id);
    next_layer.push(id);
    Ok(id)
}

fn add_vertex(
    graph: &mut DiGraph<Vertex, Decision>,
    free_space: f64,
    item: i64,
    max_nodes: usize,
) -> Result<NodeIndex, SolveError> {
    if graph.node_count() >= max_nodes {
        return Err(SolveError::TooLarge { limit: max_nodes });
    }
    Ok(graph.add_node(Vertex { free_space, item }))
}

#[cfg(test)]
mod tests {
    use petgraph::visit::EdgeRef;

    use super::*;

    fn decisions(g: &DecisionGraph, from: NodeIndex) -> Vec<Decision> {
        g.graph.edges(from).map(|e| *e.weight()).collect()
    }

    #[test]
    fn test_single_item_that_fits() {
        let g = DecisionGraph::build(&[5.0], &[2.0], 3.0, 100).unwrap();
        // start, skip (3,0), take (1,0), sink
        assert_eq!(g.len(), 4);
        let out = decisions(&g, g.start);
        assert_eq!(out.len(), 2);
        assert!(out.iter().any(|d| d.taken && d.weight == 0.0));
        assert_eq!(g.vertex(g.sink).item, 1);
    }

    #[test]
    fn test_item_larger_than_capacity_has_no_take_edge() {
        let g = DecisionGraph::build(&[5.0], &[4.0], 3.0, 100).unwrap();
        let out = decisions(&g, g.start);
        assert_eq!(out.len(), 1);
        assert!(!out[0].taken);
    }

    #[test]
    fn test_equal_free_space_is_merged_within_layer() {
        // After item 1 both "take 0, skip 1" and "skip 0, take 1" leave 2.
        let g = DecisionGraph::build(&[1.0, 1.0], &[1.0, 1.0], 3.0, 100).unwrap();
        let layer_two = g.graph.node_weights().filter(|v| v.item == 1).count();
        assert_eq!(layer_two, 3);
    }

    #[test]
    fn test_every_last_layer_vertex_reaches_sink() {
        let g = DecisionGraph::build(&[60.0, 100.0, 120.0], &[1.0, 2.0, 3.0], 5.0, 100).unwrap();
        for id in g.graph.node_indices() {
            if g.vertex(id).item == 2 {
                let targets: Vec<_> = g.graph.edges(id).map(|e| e.target()).collect();
                assert_eq!(targets, vec![g.sink]);
            }
        }
        assert_eq!(g.graph.edges(g.sink).count(), 0);
    }

    #[test]
    fn test_node_cap_is_enforced() {
        let values = vec![1.0; 12];
        let volumes: Vec<f64> = (0..12).map(|i| f64::from(1u32 << i)).collect();
        let err = DecisionGraph::build(&values, &volumes, 10_000.0, 50).unwrap_err();
        assert!(matches!(err, SolveError::TooLarge { limit: 50 }));
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let err = DecisionGraph::build(&[1.0, 2.0], &[1.0], 3.0, 100).unwrap_err();
        assert!(matches!(err, SolveError::LengthMismatch { .. }));
    }

    #[test]
    fn test_volume_lost_in_capacity_rounding_is_rejected() {
        // Adjacent f64 values near 1e17 are 16 apart, so 1e17 - 1 == 1e17.
        let err = DecisionGraph::build(&[1.0, 2.0], &[1.0, 1.0], 1e17, 2000).unwrap_err();
        assert_eq!(err, SolveError::PrecisionLoss { item: 0 });
    }
}
