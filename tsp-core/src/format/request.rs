//! Solver request payload and its builder.

#[cfg(test)]
#[path = "../../tests/unit/format/request_test.rs"]
mod request_test;

use super::{ExecutionType, MethodType};
use crate::models::{Coordinates, Label, Marker, index_of};
use crate::utils::GenericError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{BufReader, BufWriter, Read, Write};

/// A prompt shown when submission misses some of required options.
pub const INCOMPLETE_CONFIGURATION_PROMPT: &str = "Please select all options before executing.";

/// A node of the tour as seen by the solving service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node location.
    pub coordinates: Coordinates,
    /// Node label.
    pub label: Label,
}

/// A solver request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TspRequest {
    /// Nodes in marker order.
    pub nodes: Vec<Node>,
    /// Execution type.
    pub execution_type: ExecutionType,
    /// Method type.
    pub method_type: MethodType,
    /// A label of the node where the tour starts and ends.
    pub start_node: String,
}

/// Options chosen by the user before submission.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestConfig {
    /// Execution type.
    pub execution_type: Option<ExecutionType>,
    /// Method type.
    pub method_type: Option<MethodType>,
    /// Start node label.
    pub start_node: Option<String>,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self { execution_type: Some(ExecutionType::Parallel), method_type: Some(MethodType::Brute), start_node: None }
    }
}

/// A reason why request cannot be built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestError {
    /// One or more options are not selected.
    ConfigurationIncomplete {
        /// Names of missing options.
        missing: Vec<&'static str>,
    },
    /// Start node does not reference any of the current markers.
    UnknownStartNode {
        /// Selected start node.
        start_node: String,
        /// Labels of the current markers.
        labels: Vec<String>,
    },
}

impl RequestError {
    /// Returns a message to be shown to the user in a blocking prompt.
    pub fn prompt(&self) -> String {
        match self {
            RequestError::ConfigurationIncomplete { .. } => INCOMPLETE_CONFIGURATION_PROMPT.to_string(),
            RequestError::UnknownStartNode { start_node, .. } => {
                format!("Start node '{start_node}' does not match any placed marker.")
            }
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RequestError::ConfigurationIncomplete { missing } => {
                write!(f, "configuration is incomplete, missing: {}", missing.join(", "))
            }
            RequestError::UnknownStartNode { start_node, labels } => {
                write!(f, "invalid start node '{start_node}', must be one of: [{}]", labels.join(", "))
            }
        }
    }
}

impl std::error::Error for RequestError {}

/// Builds a request from markers and chosen options. Nothing is built when validation fails.
pub fn build_request(markers: &[Marker], config: &RequestConfig) -> Result<TspRequest, RequestError> {
    let start_node = config.start_node.as_deref().filter(|start_node| !start_node.is_empty());

    let (execution_type, method_type, start_node) = match (config.execution_type, config.method_type, start_node) {
        (Some(execution_type), Some(method_type), Some(start_node)) => (execution_type, method_type, start_node),
        (execution_type, method_type, start_node) => {
            let missing = [
                ("executionType", execution_type.is_none()),
                ("methodType", method_type.is_none()),
                ("startNode", start_node.is_none()),
            ]
            .into_iter()
            .filter(|(_, is_missing)| *is_missing)
            .map(|(name, _)| name)
            .collect();

            return Err(RequestError::ConfigurationIncomplete { missing });
        }
    };

    // labels are positional, so the start marker can only be at the position encoded by its label
    let start_marker = index_of(start_node).and_then(|index| markers.get(index));
    if !start_marker.is_some_and(|marker| marker.label == start_node) {
        return Err(RequestError::UnknownStartNode {
            start_node: start_node.to_string(),
            labels: markers.iter().map(|marker| marker.label.to_string()).collect(),
        });
    }

    Ok(TspRequest {
        nodes: markers
            .iter()
            .map(|marker| Node { coordinates: marker.coordinates, label: marker.label.clone() })
            .collect(),
        execution_type,
        method_type,
        start_node: start_node.to_string(),
    })
}

/// Serializes request in json format.
pub fn serialize_request<W: Write>(writer: BufWriter<W>, request: &TspRequest) -> Result<(), GenericError> {
    serde_json::to_writer_pretty(writer, request).map_err(GenericError::from)
}

/// Deserializes request from json format.
pub fn deserialize_request<R: Read>(reader: BufReader<R>) -> Result<TspRequest, GenericError> {
    serde_json::from_reader(reader).map_err(GenericError::from)
}
