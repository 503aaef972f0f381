#[cfg(test)]
#[path = "../tests/unit/service_test.rs"]
mod service_test;

use crate::algorithms::*;
use crate::matrix::DistanceMatrix;
use crate::utils::ThreadPool;
use std::fmt;
use tsp_core::format::request::TspRequest;
use tsp_core::format::response::{SUCCESS_STATUS, TspResponse, TspResult};
use tsp_core::format::{ExecutionType, MethodType};
use tsp_core::utils::{GenericError, InfoLogger, Timer, create_silent_logger};

/// Default limit of nodes accepted by the brute force method.
pub const DEFAULT_MAX_BRUTE_NODES: usize = 11;

/// Solving service settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Amount of threads used by parallel execution.
    pub threads: usize,
    /// Max amount of nodes accepted by the brute force method.
    pub max_brute_nodes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            threads: num_cpus::get(),
            max_brute_nodes: DEFAULT_MAX_BRUTE_NODES,
        }
    }
}

/// A reason why the service refuses a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServiceError {
    /// There are no nodes in the request.
    NoNodes,
    /// Start node is not among node labels.
    InvalidStartNode {
        /// Labels of request nodes.
        labels: Vec<String>,
    },
    /// Brute force is asked for more nodes than allowed.
    TooManyNodes {
        /// Amount of nodes in the request.
        size: usize,
        /// Max amount of nodes.
        limit: usize,
    },
}

impl ServiceError {
    /// Returns http status code which corresponds to the error.
    pub fn status(&self) -> u16 {
        400
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ServiceError::NoNodes => write!(f, "Invalid 'nodes' format."),
            ServiceError::InvalidStartNode { labels } => {
                write!(f, "Invalid 'startNode'. Must be one of: [{}]", labels.join(", "))
            }
            ServiceError::TooManyNodes { size, limit } => {
                write!(f, "Too many nodes for 'brute' method: {size}, max is {limit}")
            }
        }
    }
}

impl std::error::Error for ServiceError {}

/// Solves requests in process.
pub struct SolverService {
    config: ServiceConfig,
    pool: ThreadPool,
    logger: InfoLogger,
}

impl SolverService {
    /// Creates a new service with a thread pool sized by the config.
    pub fn new(config: ServiceConfig) -> Result<Self, GenericError> {
        Self::new_with_logger(config, create_silent_logger())
    }

    /// Creates a new service which logs every solved request.
    pub fn new_with_logger(config: ServiceConfig, logger: InfoLogger) -> Result<Self, GenericError> {
        let pool = ThreadPool::new(config.threads.max(1))?;

        Ok(Self { config, pool, logger })
    }

    /// Returns service settings.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Validates the request and finds a closed tour from the start node.
    pub fn solve(&self, request: &TspRequest) -> Result<TspResponse, ServiceError> {
        let timer = Timer::start();

        let start = self.validate(request)?;

        let locations = request.nodes.iter().map(|node| node.coordinates).collect::<Vec<_>>();
        let matrix = DistanceMatrix::new(locations.as_slice());

        let tour = match (request.execution_type, request.method_type) {
            (ExecutionType::Serial, MethodType::Brute) => solve_brute_serial(&matrix, start),
            (ExecutionType::Serial, MethodType::Nearest) => solve_nearest_serial(&matrix, start),
            (ExecutionType::Parallel, MethodType::Brute) => solve_brute_parallel(&matrix, start, &self.pool),
            (ExecutionType::Parallel, MethodType::Nearest) => solve_nearest_parallel(&matrix, start, &self.pool),
        };

        let execution_time_seconds = timer.elapsed_secs_as_float();

        (self.logger)(
            format!(
                "solved {} nodes with {}/{} on {} thread(s) in {:.6}s, cost: {}",
                matrix.size(),
                request.execution_type,
                request.method_type,
                if request.execution_type == ExecutionType::Parallel { self.pool.threads() } else { 1 },
                execution_time_seconds,
                tour.cost
            )
            .as_str(),
        );

        Ok(TspResponse {
            execution_type: request.execution_type,
            method_type: request.method_type,
            status: SUCCESS_STATUS.to_string(),
            result: TspResult {
                execution_time_seconds,
                minimum_cost: tour.cost,
                optimal_tour: tour.nodes.iter().map(|&idx| request.nodes[idx].label.to_string()).collect(),
            },
        })
    }

    fn validate(&self, request: &TspRequest) -> Result<usize, ServiceError> {
        if request.nodes.is_empty() {
            return Err(ServiceError::NoNodes);
        }

        let start = request.nodes.iter().position(|node| node.label == request.start_node.as_str()).ok_or_else(|| {
            ServiceError::InvalidStartNode { labels: request.nodes.iter().map(|node| node.label.to_string()).collect() }
        })?;

        if request.method_type == MethodType::Brute && request.nodes.len() > self.config.max_brute_nodes {
            return Err(ServiceError::TooManyNodes { size: request.nodes.len(), limit: self.config.max_brute_nodes });
        }

        Ok(start)
    }
}
