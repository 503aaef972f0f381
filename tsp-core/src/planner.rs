//! A planner owns the solver options chosen by the user, lists placed nodes and runs submission.

#[cfg(test)]
#[path = "../tests/unit/planner_test.rs"]
mod planner_test;

use crate::client::SolverClient;
use crate::format::request::{RequestConfig, build_request};
use crate::format::{ExecutionType, MethodType};
use crate::models::{Marker, MarkerId};
use crate::presenter::ResultPresenter;
use crate::store::MarkerStoreReader;
use crate::utils::InfoLogger;
use std::fmt;

/// A text shown in the listing when there are no markers.
pub const NO_NODES_TEXT: &str = "No nodes selected";

/// A prompt shown when the marker selected as start node was removed.
pub const REMOVED_START_NODE_PROMPT: &str = "Start node was removed, please select a new one.";

/// A result of submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Submission was blocked before any request was sent. Contains a prompt for the user.
    Blocked(String),
    /// The solving service call failed. Contains a non blocking notification.
    Failed(String),
    /// The response is shown by the presenter.
    Presented,
}

/// A row in the listing of selected nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeRow {
    /// Marker label.
    pub label: String,
    /// Longitude.
    pub lng: f64,
    /// Latitude.
    pub lat: f64,
}

impl fmt::Display for NodeRow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:<6}{:>12.4}{:>12.4}", self.label, self.lng, self.lat)
    }
}

/// Keeps request options and submits markers to the solving service.
pub struct Planner {
    config: RequestConfig,
    start_marker: Option<MarkerId>,
    store: MarkerStoreReader,
    presenter: ResultPresenter,
    logger: InfoLogger,
}

impl Planner {
    /// Creates a new planner which reads markers from the given store.
    pub fn new(store: MarkerStoreReader, config: RequestConfig, logger: InfoLogger) -> Self {
        let start_marker = find_marker_id(&store, config.start_node.as_deref());

        Self { config, start_marker, store, presenter: ResultPresenter::default(), logger }
    }

    /// Returns current options.
    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    /// Sets execution type.
    pub fn set_execution_type(&mut self, execution_type: Option<ExecutionType>) {
        self.config.execution_type = execution_type;
    }

    /// Sets method type.
    pub fn set_method_type(&mut self, method_type: Option<MethodType>) {
        self.config.method_type = method_type;
    }

    /// Sets start node label, an empty label means nothing is selected.
    ///
    /// When the label belongs to a placed marker, the selection sticks to that marker: it follows
    /// the marker through relabeling and is lost when the marker is removed. A label without a
    /// marker is checked as is on submit.
    pub fn set_start_node(&mut self, start_node: Option<String>) {
        self.start_marker = find_marker_id(&self.store, start_node.as_deref());
        self.config.start_node = start_node;
    }

    /// Returns listing of selected nodes in store order.
    pub fn node_rows(&self) -> Vec<NodeRow> {
        self.store
            .snapshot()
            .into_iter()
            .map(|marker| NodeRow {
                label: marker.label.to_string(),
                lng: marker.coordinates.lng,
                lat: marker.coordinates.lat,
            })
            .collect()
    }

    /// Returns listing of selected nodes as text.
    pub fn listing(&self) -> String {
        let rows = self.node_rows();
        if rows.is_empty() {
            return NO_NODES_TEXT.to_string();
        }

        let header = format!("{:<6}{:>12}{:>12}", "Label", "Longitude", "Latitude");

        std::iter::once(header).chain(rows.iter().map(|row| row.to_string())).collect::<Vec<_>>().join("\n")
    }

    /// Returns options available for start node selection.
    pub fn start_node_options(&self) -> Vec<String> {
        self.store.snapshot().iter().map(|marker| format!("{} ({})", marker.label, marker.coordinates)).collect()
    }

    /// Returns presenter of the last response.
    pub fn presenter(&self) -> &ResultPresenter {
        &self.presenter
    }

    /// Returns presenter of the last response as mutable.
    pub fn presenter_mut(&mut self) -> &mut ResultPresenter {
        &mut self.presenter
    }

    /// Validates options, builds request from the current markers and sends it to the client.
    ///
    /// Nothing is sent when validation fails. A failed call changes no state.
    pub fn execute(&mut self, client: &dyn SolverClient) -> SubmitOutcome {
        let markers = self.store.snapshot();

        let Some(config) = self.resolve_config(markers.as_slice()) else {
            (self.logger)("submission blocked: selected start node was removed");
            return SubmitOutcome::Blocked(REMOVED_START_NODE_PROMPT.to_string());
        };

        let request = match build_request(markers.as_slice(), &config) {
            Ok(request) => request,
            Err(err) => {
                (self.logger)(format!("submission blocked: {err}").as_str());
                return SubmitOutcome::Blocked(err.prompt());
            }
        };

        if let Ok(data) = serde_json::to_string(&request) {
            (self.logger)(format!("request: {data}").as_str());
        }

        match client.solve(&request) {
            Ok(response) => {
                (self.logger)(
                    format!(
                        "response: status={}, cost={}, tour={}",
                        response.status,
                        response.result.minimum_cost,
                        response.result.optimal_tour.join(",")
                    )
                    .as_str(),
                );
                self.presenter.open(response);
                SubmitOutcome::Presented
            }
            Err(err) => {
                (self.logger)(format!("error sending markers to solving service: {err}").as_str());
                SubmitOutcome::Failed(format!("Cannot solve: {err}"))
            }
        }
    }

    /// Returns options with start node set to the current label of the selected marker, or none
    /// if the selected marker is gone.
    fn resolve_config(&self, markers: &[Marker]) -> Option<RequestConfig> {
        match self.start_marker {
            Some(id) => markers
                .iter()
                .find(|marker| marker.id == id)
                .map(|marker| RequestConfig { start_node: Some(marker.label.to_string()), ..self.config.clone() }),
            None => Some(self.config.clone()),
        }
    }
}

fn find_marker_id(store: &MarkerStoreReader, label: Option<&str>) -> Option<MarkerId> {
    label.filter(|label| !label.is_empty()).and_then(|label| store.find_by_label(label)).map(|marker| marker.id)
}
