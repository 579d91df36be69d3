//! Graph drawing surface.
//!
//! Holds what a network-drawing widget needs: the node and edge lists from
//! `/solve` and a fixed set of layout options. The node and edge objects are
//! passed through as-is.

use serde_json::{json, Value};

use crate::client::errors::ClientError;
use crate::client::toggle::Elements;
use crate::client::GRAPH_CONTAINER;

/// Directed left-to-right hierarchy, physics off, arrowheads on edges.
pub fn layout_options() -> Value {
    json!({
        "layout": {
            "hierarchical": {
                "enabled": true,
                "direction": "LR",
                "sortMethod": "directed"
            }
        },
        "physics": { "enabled": false },
        "edges": { "arrows": "to" }
    })
}

#[derive(Debug, Clone, Default)]
pub struct GraphView {
    nodes: Vec<Value>,
    edges: Vec<Value>,
    draws: u64,
}

impl GraphView {
    /// Replaces whatever was drawn before with `data` and reveals the graph
    /// container. On a malformed payload the previous drawing is kept.
    pub fn draw(&mut self, data: &Value, elements: &mut Elements) -> Result<(), ClientError> {
        let nodes = array_field(data, "nodes")?;
        let edges = array_field(data, "edges")?;

        self.nodes.clear();
        self.edges.clear();
        self.nodes.extend(nodes.iter().cloned());
        self.edges.extend(edges.iter().cloned());
        self.draws += 1;

        elements.reveal(GRAPH_CONTAINER);
        Ok(())
    }

    pub fn nodes(&self) -> &[Value] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Value] {
        &self.edges
    }

    pub fn draw_count(&self) -> u64 {
        self.draws
    }

    /// The full widget input: `{nodes, edges, options}`.
    pub fn snapshot(&self) -> Value {
        json!({
            "nodes": self.nodes,
            "edges": self.edges,
            "options": layout_options(),
        })
    }
}

fn array_field<'a>(data: &'a Value, field: &str) -> Result<&'a Vec<Value>, ClientError> {
    data.get(field)
        .and_then(Value::as_array)
        .ok_or_else(|| ClientError::Render(format!("payload has no '{field}' array")))
}
