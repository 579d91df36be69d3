pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::solver::handlers;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("The page you are looking for does not exist.".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/solve", post(handlers::handle_solve))
        .route("/results", post(handlers::handle_results))
        .route("/generate", get(handlers::handle_generate))
        .fallback(not_found)
        .with_state(state)
}
