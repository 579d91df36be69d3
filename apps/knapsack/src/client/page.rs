//! The solver page: form state plus the operations its buttons trigger.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::client::alerts::{Alert, AlertBoard, AlertKind};
use crate::client::api::{HttpKnapsackApi, KnapsackApi};
use crate::client::errors::ClientError;
use crate::client::render::GraphView;
use crate::client::report::{fetch_results, format_summary};
use crate::client::toggle::Elements;
use crate::client::validation::{validate_form, FormInputs};
use crate::client::{ALERT_REGIONS, GENERAL_ALERTS, GRAPH_CONTAINER, RESULTS_CONTAINER};
use crate::config::ClientConfig;
use crate::input::join_numbers;
use crate::models::{ResultsResponse, SolveRequest};

pub const SOLVED_MESSAGE: &str = "Problem solved successfully!";
pub const GENERATED_MESSAGE: &str = "Data generated successfully!";

/// How a submission ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid,
    Solved(ResultsResponse),
    /// An error notice was shown with this text.
    Failed(String),
    /// A newer submission started before this one's response arrived.
    Superseded,
}

struct PageState {
    inputs: FormInputs,
    graph: GraphView,
    elements: Elements,
    results: Option<String>,
}

/// Cheap to clone; clones drive the same page.
#[derive(Clone)]
pub struct KnapsackPage {
    api: Arc<dyn KnapsackApi>,
    alerts: AlertBoard,
    state: Arc<Mutex<PageState>>,
    generation: Arc<AtomicU64>,
}

impl KnapsackPage {
    pub fn new(api: Arc<dyn KnapsackApi>, alert_timeout: Duration) -> Self {
        Self {
            api,
            alerts: AlertBoard::new(ALERT_REGIONS, alert_timeout),
            state: Arc::new(Mutex::new(PageState {
                inputs: FormInputs::default(),
                graph: GraphView::default(),
                elements: Elements::hidden([GRAPH_CONTAINER, RESULTS_CONTAINER]),
                results: None,
            })),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Page backed by the HTTP API at `config.base_url`.
    pub fn connect(config: &ClientConfig) -> Result<Self, ClientError> {
        let api = HttpKnapsackApi::new(config.base_url.clone())?;
        Ok(Self::new(Arc::new(api), config.alert_timeout))
    }

    pub fn inputs(&self) -> FormInputs {
        self.state.lock().inputs.clone()
    }

    pub fn set_inputs(&self, inputs: FormInputs) {
        self.state.lock().inputs = inputs;
    }

    pub fn show_alert(&self, message: impl Into<String>, kind: AlertKind, region: &str) -> bool {
        self.alerts.show(message, kind, region)
    }

    pub fn alert(&self, region: &str) -> Option<Alert> {
        self.alerts.current(region)
    }

    pub fn results_text(&self) -> Option<String> {
        self.state.lock().results.clone()
    }

    pub fn graph(&self) -> GraphView {
        self.state.lock().graph.clone()
    }

    /// What the drawing widget is fed: current nodes, edges and layout.
    pub fn graph_snapshot(&self) -> Value {
        self.state.lock().graph.snapshot()
    }

    pub fn is_shown(&self, id: &str) -> bool {
        self.state.lock().elements.is_shown(id)
    }

    pub fn show_item(&self, id: &str) -> Option<bool> {
        self.state.lock().elements.show_item(id)
    }

    /// Validates the form, solves, draws the graph and fetches the totals.
    ///
    /// Every call takes a new generation; once a newer submission exists,
    /// responses for this one are dropped without touching the page.
    pub async fn submit(&self) -> SubmitOutcome {
        let inputs = self.inputs();

        let form = match validate_form(&inputs) {
            Ok(form) => form,
            Err(failures) => {
                for failure in &failures {
                    self.alerts
                        .show(failure.message, AlertKind::Error, failure.region);
                }
                debug!(failures = failures.len(), "Form rejected before submission");
                return SubmitOutcome::Invalid;
            }
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!(generation, items = form.values.len(), "Submitting problem");

        let request = SolveRequest {
            values: inputs.values.clone(),
            volumes: inputs.weights.clone(),
            capacity: inputs.capacity.clone(),
        };
        let solved = self.api.solve(&request).await;
        if !self.is_current(generation) {
            debug!(generation, "Dropping superseded solve response");
            return SubmitOutcome::Superseded;
        }

        let data = match solved {
            Ok(response) => response.data,
            Err(e) => return self.fail(e),
        };

        match self.draw(generation, &data) {
            Ok(true) => {}
            Ok(false) => {
                debug!(generation, "Superseded before drawing");
                return SubmitOutcome::Superseded;
            }
            Err(e) => return self.fail(e),
        }
        self.alerts
            .show(SOLVED_MESSAGE, AlertKind::Success, GENERAL_ALERTS);

        let results = fetch_results(self.api.as_ref(), data, &inputs.values, &inputs.weights).await;
        if !self.is_current(generation) {
            debug!(generation, "Dropping superseded results response");
            return SubmitOutcome::Superseded;
        }

        match results {
            Ok(results) => {
                let mut state = self.state.lock();
                if !self.is_current(generation) {
                    debug!(generation, "Superseded before writing results");
                    return SubmitOutcome::Superseded;
                }
                state.results = Some(format_summary(&results));
                state.elements.reveal(RESULTS_CONTAINER);
                SubmitOutcome::Solved(results)
            }
            Err(e) => self.fail(e),
        }
    }

    /// Fetches a random instance into the form fields.
    pub async fn generate(&self) -> Result<(), ClientError> {
        match self.api.generate().await {
            Ok(generated) => {
                self.set_inputs(FormInputs {
                    weights: join_numbers(&generated.volumes),
                    values: join_numbers(&generated.values),
                    capacity: generated.capacity.to_string(),
                });
                self.alerts
                    .show(GENERATED_MESSAGE, AlertKind::Success, GENERAL_ALERTS);
                Ok(())
            }
            Err(e) => {
                warn!("Generate failed: {e}");
                self.alerts
                    .show(e.to_string(), AlertKind::Error, GENERAL_ALERTS);
                Err(e)
            }
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Draws `data` unless a newer submission exists. The generation is
    /// checked under the page lock so a stale draw cannot interleave with a
    /// newer one. Returns `false` when superseded.
    fn draw(&self, generation: u64, data: &Value) -> Result<bool, ClientError> {
        let mut state = self.state.lock();
        if !self.is_current(generation) {
            return Ok(false);
        }
        let PageState {
            graph, elements, ..
        } = &mut *state;
        graph.draw(data, elements)?;
        Ok(true)
    }

    fn fail(&self, e: ClientError) -> SubmitOutcome {
        warn!("Submission failed: {e}");
        let message = e.to_string();
        self.alerts
            .show(message.clone(), AlertKind::Error, GENERAL_ALERTS);
        SubmitOutcome::Failed(message)
    }
}
