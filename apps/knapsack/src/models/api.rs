//! Request and response bodies of the HTTP API.
//!
//! The graph payload is a type parameter: the server works with the typed
//! [`GraphPayload`], while the client only forwards it as opaque JSON.

use serde::{Deserialize, Serialize};

use crate::models::graph::GraphPayload;

/// POST /solve body. Fields are the raw text typed into the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub values: String,
    pub volumes: String,
    pub capacity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResponse<D = GraphPayload> {
    pub data: D,
}

/// POST /results body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsRequest<D = GraphPayload> {
    pub data: D,
    pub values: Vec<f64>,
    pub volumes: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsResponse {
    /// Zero-based indices of the chosen items, ascending.
    pub items: Vec<usize>,
    pub value: f64,
    pub volume: f64,
}

/// GET /generate body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub values: Vec<f64>,
    pub volumes: Vec<f64>,
    pub capacity: f64,
}

/// Error body shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}
