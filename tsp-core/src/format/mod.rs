//! This module defines the json payloads exchanged with the solving service.

#[cfg(test)]
#[path = "../../tests/unit/format/format_test.rs"]
mod format_test;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod request;
pub mod response;

/// Specifies how the solving service runs the algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionType {
    /// Work is spread across multiple workers.
    Parallel,
    /// Work is done by a single worker.
    Serial,
}

/// Specifies which algorithm the solving service uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodType {
    /// Exhaustive search over all tours.
    Brute,
    /// Greedy nearest neighbor heuristic.
    Nearest,
}

impl ExecutionType {
    /// Returns wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionType::Parallel => "parallel",
            ExecutionType::Serial => "serial",
        }
    }
}

impl MethodType {
    /// Returns wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodType::Brute => "brute",
            MethodType::Nearest => "nearest",
        }
    }
}

impl FromStr for ExecutionType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "parallel" => Ok(ExecutionType::Parallel),
            "serial" => Ok(ExecutionType::Serial),
            _ => Err(format!("unsupported execution type: '{value}'")),
        }
    }
}

impl FromStr for MethodType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "brute" => Ok(MethodType::Brute),
            "nearest" => Ok(MethodType::Nearest),
            _ => Err(format!("unsupported method type: '{value}'")),
        }
    }
}

impl fmt::Display for ExecutionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MethodType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
