//! Solver response payload.

#[cfg(test)]
#[path = "../../tests/unit/format/response_test.rs"]
mod response_test;

use super::{ExecutionType, MethodType};
use crate::utils::GenericError;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};

/// A status reported by the service on success.
pub const SUCCESS_STATUS: &str = "success";

/// A solver response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TspResponse {
    /// Execution type used by the service.
    pub execution_type: ExecutionType,
    /// Method type used by the service.
    pub method_type: MethodType,
    /// Status, `success` for solved requests.
    pub status: String,
    /// Solving result.
    pub result: TspResult,
}

/// A solving result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TspResult {
    /// Time spent on solving.
    pub execution_time_seconds: f64,
    /// Total cost of the tour.
    pub minimum_cost: f64,
    /// A tour as sequence of labels, starts and ends with the start node.
    pub optimal_tour: Vec<String>,
}

/// An error body returned by the service with non-success http status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

/// Serializes response in json format.
pub fn serialize_response<W: Write>(writer: BufWriter<W>, response: &TspResponse) -> Result<(), GenericError> {
    serde_json::to_writer_pretty(writer, response).map_err(GenericError::from)
}

/// Deserializes response from json format.
pub fn deserialize_response<R: Read>(reader: BufReader<R>) -> Result<TspResponse, GenericError> {
    serde_json::from_reader(reader).map_err(GenericError::from)
}
