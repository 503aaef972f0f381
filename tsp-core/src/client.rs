//! A boundary to the solving service.

use crate::format::request::TspRequest;
use crate::format::response::TspResponse;
use std::fmt;

/// Sends a request to a solving service and waits for the response.
pub trait SolverClient {
    /// Solves the request. Implementations do not retry.
    fn solve(&self, request: &TspRequest) -> Result<TspResponse, TransportError>;
}

/// A failure of the call to the solving service.
#[derive(Clone, Debug, PartialEq)]
pub enum TransportError {
    /// The service did not respond in time.
    Timeout,
    /// The service is not reachable.
    Connection(String),
    /// The service responded with unsuccessful status.
    Service {
        /// Http status code or other service specific code.
        status: u16,
        /// Error message returned by the service.
        message: String,
    },
    /// Response body cannot be decoded.
    Format(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransportError::Timeout => write!(f, "solving service did not respond in time"),
            TransportError::Connection(err) => write!(f, "cannot reach solving service: '{err}'"),
            TransportError::Service { status, message } => {
                write!(f, "solving service failed with status {status}: '{message}'")
            }
            TransportError::Format(err) => write!(f, "cannot read solving service response: '{err}'"),
        }
    }
}

impl std::error::Error for TransportError {}
