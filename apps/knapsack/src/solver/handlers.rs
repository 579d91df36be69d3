//! Axum route handlers for the solver API.

use axum::{extract::State, Json};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::input::{ensure_positive, parse_number, parse_numbers, InputError};
use crate::models::{
    GenerateResponse, GraphPayload, ResultsRequest, ResultsResponse, SolveRequest, SolveResponse,
};
use crate::solver::{generate::random_instance, solve, summarize};
use crate::state::AppState;

/// A fully parsed and checked `/solve` body.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub values: Vec<f64>,
    pub volumes: Vec<f64>,
    pub capacity: f64,
}

/// Parses the raw form fields. Checks run in a fixed order so the caller
/// always sees the first problem: format, lengths, capacity, volumes, values.
pub fn parse_problem(req: &SolveRequest) -> Result<Problem, AppError> {
    let malformed = |_: InputError| {
        AppError::Validation(
            "Invalid input format! Please provide comma-separated number values!".to_string(),
        )
    };

    let volumes = parse_numbers(&req.volumes).map_err(malformed)?;
    let values = parse_numbers(&req.values).map_err(malformed)?;
    let capacity = parse_number(&req.capacity).map_err(malformed)?;

    if values.len() != volumes.len() {
        return Err(AppError::Validation(
            "Weights and values must have same length!".to_string(),
        ));
    }
    if capacity <= 0.0 {
        return Err(AppError::Validation(
            "Capacity must be a positive number!".to_string(),
        ));
    }
    ensure_positive(&volumes)
        .map_err(|_| AppError::Validation("Weights must be positive numbers!".to_string()))?;
    ensure_positive(&values)
        .map_err(|_| AppError::Validation("Values must be positive numbers!".to_string()))?;

    Ok(Problem {
        values,
        volumes,
        capacity,
    })
}

/// POST /solve
///
/// Builds the decision graph and returns it with the shortest path marked.
pub async fn handle_solve(
    State(state): State<AppState>,
    Json(req): Json<SolveRequest>,
) -> Result<Json<SolveResponse>, AppError> {
    let problem = parse_problem(&req)?;
    let max_nodes = state.config.max_graph_nodes;
    let item_count = problem.values.len();

    // CPU-bound: the graph can double in width with every item.
    let (payload, solution) = tokio::task::spawn_blocking(move || {
        solve(
            &problem.values,
            &problem.volumes,
            problem.capacity,
            max_nodes,
        )
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in solve: {e}")))??;

    info!(
        items = item_count,
        nodes = payload.nodes.len(),
        edges = payload.edges.len(),
        chosen = solution.items.len(),
        "Solved knapsack instance"
    );

    Ok(Json(SolveResponse { data: payload }))
}

/// POST /results
///
/// Totals the items chosen along the payload's path.
pub async fn handle_results(
    Json(req): Json<ResultsRequest<GraphPayload>>,
) -> Result<Json<ResultsResponse>, AppError> {
    let results = summarize(&req.data, &req.values, &req.volumes)?;
    debug!(
        items = ?results.items,
        value = results.value,
        volume = results.volume,
        "Computed results"
    );
    Ok(Json(results))
}

/// GET /generate
pub async fn handle_generate(State(state): State<AppState>) -> Json<GenerateResponse> {
    let instance = random_instance(
        &mut rand::rng(),
        state.config.generate_min_items,
        state.config.generate_max_items,
    );
    debug!(items = instance.values.len(), "Generated random instance");
    Json(instance)
}
