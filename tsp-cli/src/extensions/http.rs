//! An http client of the remote solving service.

#[cfg(test)]
#[path = "../../tests/unit/extensions/http_test.rs"]
mod http_test;

use reqwest::blocking::Client;
use std::time::Duration;
use tsp_core::client::{SolverClient, TransportError};
use tsp_core::format::request::TspRequest;
use tsp_core::format::response::{ErrorResponse, TspResponse};
use tsp_core::utils::GenericError;

/// Sends requests to `POST {url}/tsp` as json. No retries are made, every call is bounded by
/// the timeout.
pub struct HttpSolverClient {
    client: Client,
    endpoint: String,
}

impl HttpSolverClient {
    /// Creates a new client for the service with given base url.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GenericError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| GenericError::from(format!("cannot create http client: '{err}'")))?;

        Ok(Self { client, endpoint: format!("{}/tsp", base_url.trim_end_matches('/')) })
    }

    /// Returns full url of the solving endpoint.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

impl SolverClient for HttpSolverClient {
    fn solve(&self, request: &TspRequest) -> Result<TspResponse, TransportError> {
        let response = self.client.post(self.endpoint.as_str()).json(request).send().map_err(map_transport_error)?;

        let status = response.status();
        let body = response.text().map_err(map_transport_error)?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(body.as_str()).map(|err| err.error).unwrap_or(body);
            return Err(TransportError::Service { status: status.as_u16(), message });
        }

        serde_json::from_str(body.as_str()).map_err(|err| TransportError::Format(err.to_string()))
    }
}

fn map_transport_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() { TransportError::Timeout } else { TransportError::Connection(err.to_string()) }
}
