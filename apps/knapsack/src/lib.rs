//! Knapsack decision-graph service and the headless page model that drives it.

pub mod client;
pub mod config;
pub mod errors;
pub mod input;
pub mod models;
pub mod routes;
pub mod solver;
pub mod state;
