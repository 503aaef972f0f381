//! Command line front-end configuration.

#![allow(missing_docs)]

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

extern crate serde_json;

use serde::Deserialize;
use std::io::{BufReader, Read};
use std::time::Duration;
use tsp_core::format::request::RequestConfig;
use tsp_core::format::{ExecutionType, MethodType};
use tsp_core::models::{Coordinates, LabelPolicy};
use tsp_core::surface::Camera;
use tsp_core::utils::{InfoLogger, create_silent_logger, create_stderr_logger};
use tsp_solver::{DEFAULT_MAX_BRUTE_NODES, ServiceConfig};

/// A default url of the solving service.
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";

/// A default timeout of the solving service call in seconds.
pub const DEFAULT_SERVICE_TIMEOUT: u64 = 30;

/// A front-end configuration. Every field is optional.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct Config {
    /// Specifies remote solving service.
    pub service: Option<EndpointConfig>,
    /// Specifies initial map view.
    pub map: Option<MapConfig>,
    /// Specifies marker labels.
    pub labels: Option<LabelsConfig>,
    /// Specifies in-process solver.
    pub solver: Option<SolverConfig>,
    /// Specifies preselected request options.
    pub defaults: Option<DefaultsConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A remote solving service configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct EndpointConfig {
    /// Base url, `/tsp` is appended to it.
    pub url: Option<String>,
    /// Request timeout in seconds.
    pub timeout: Option<u64>,
}

/// An initial map view configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct MapConfig {
    pub center: Option<Coordinates>,
    pub zoom: Option<f64>,
}

/// A label configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct LabelsConfig {
    pub policy: Option<LabelPolicy>,
}

/// An in-process solver configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SolverConfig {
    /// Amount of threads used by parallel execution. Default is number of cpus.
    pub threads: Option<usize>,
    /// Max amount of nodes for brute force. Default is 11.
    pub max_brute_nodes: Option<usize>,
}

/// Request options selected when the front-end starts.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DefaultsConfig {
    pub execution_type: Option<ExecutionType>,
    pub method_type: Option<MethodType>,
    pub start_node: Option<String>,
}

/// A telemetry configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct TelemetryConfig {
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct LoggingConfig {
    pub enabled: bool,
}

impl Config {
    /// Returns url of the remote service if it is configured.
    pub fn service_url(&self) -> Option<&str> {
        self.service.as_ref().and_then(|service| service.url.as_deref())
    }

    /// Returns timeout of the remote service call.
    pub fn service_timeout(&self) -> Duration {
        Duration::from_secs(
            self.service.as_ref().and_then(|service| service.timeout).unwrap_or(DEFAULT_SERVICE_TIMEOUT),
        )
    }

    /// Returns initial map camera.
    pub fn camera(&self) -> Camera {
        let default = Camera::default();

        self.map.as_ref().map_or(default, |map| Camera {
            center: map.center.unwrap_or(default.center),
            zoom: map.zoom.unwrap_or(default.zoom),
        })
    }

    /// Returns label policy.
    pub fn label_policy(&self) -> LabelPolicy {
        self.labels.as_ref().and_then(|labels| labels.policy).unwrap_or_default()
    }

    /// Returns in-process solver settings.
    pub fn service_config(&self) -> ServiceConfig {
        let solver = self.solver.as_ref();

        ServiceConfig {
            threads: solver.and_then(|solver| solver.threads).unwrap_or_else(num_cpus::get),
            max_brute_nodes: solver.and_then(|solver| solver.max_brute_nodes).unwrap_or(DEFAULT_MAX_BRUTE_NODES),
        }
    }

    /// Returns request options selected at start.
    pub fn request_config(&self) -> RequestConfig {
        let default = RequestConfig::default();

        self.defaults.as_ref().map_or(default.clone(), |defaults| RequestConfig {
            execution_type: defaults.execution_type.or(default.execution_type),
            method_type: defaults.method_type.or(default.method_type),
            start_node: defaults.start_node.clone(),
        })
    }

    /// Returns true if logging is enabled.
    pub fn is_logging_enabled(&self) -> bool {
        self.telemetry.as_ref().and_then(|telemetry| telemetry.logging.as_ref()).is_some_and(|logging| logging.enabled)
    }

    /// Creates a logger: it writes to stderr when logging is enabled, otherwise it is silent.
    pub fn create_logger(&self) -> InfoLogger {
        if self.is_logging_enabled() { create_stderr_logger("tsp") } else { create_silent_logger() }
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}
