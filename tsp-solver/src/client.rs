#[cfg(test)]
#[path = "../tests/unit/client_test.rs"]
mod client_test;

use crate::SolverService;
use tsp_core::client::{SolverClient, TransportError};
use tsp_core::format::request::TspRequest;
use tsp_core::format::response::TspResponse;

/// A solver client which calls the in-process solving service instead of a remote one.
pub struct LocalSolverClient {
    service: SolverService,
}

impl LocalSolverClient {
    /// Creates a new instance of `LocalSolverClient`.
    pub fn new(service: SolverService) -> Self {
        Self { service }
    }
}

impl SolverClient for LocalSolverClient {
    fn solve(&self, request: &TspRequest) -> Result<TspResponse, TransportError> {
        self.service
            .solve(request)
            .map_err(|err| TransportError::Service { status: err.status(), message: err.to_string() })
    }
}
