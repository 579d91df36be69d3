pub mod api;
pub mod graph;

pub use api::{
    ErrorBody, GenerateResponse, ResultsRequest, ResultsResponse, SolveRequest, SolveResponse,
};
pub use graph::{Edge, GraphPayload, Node};
