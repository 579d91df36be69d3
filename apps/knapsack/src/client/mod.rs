// Headless model of the solver page: form validation, the solve/results round
// trip, graph drawing, transient alerts, data generation and element toggles.
// All network access goes through the KnapsackApi trait.

pub mod alerts;
pub mod api;
pub mod errors;
pub mod page;
pub mod render;
pub mod report;
pub mod toggle;
pub mod validation;

pub use alerts::{Alert, AlertBoard, AlertKind};
pub use api::{HttpKnapsackApi, KnapsackApi};
pub use errors::ClientError;
pub use page::{KnapsackPage, SubmitOutcome};
pub use validation::FormInputs;

pub const GENERAL_ALERTS: &str = "general_alerts";
pub const WEIGHTS_ALERTS: &str = "weights_alerts";
pub const VALUES_ALERTS: &str = "values_alerts";
pub const CAPACITY_ALERTS: &str = "capacity_alerts";

pub const ALERT_REGIONS: [&str; 4] = [GENERAL_ALERTS, WEIGHTS_ALERTS, VALUES_ALERTS, CAPACITY_ALERTS];

pub const GRAPH_CONTAINER: &str = "graph";
pub const RESULTS_CONTAINER: &str = "results";
