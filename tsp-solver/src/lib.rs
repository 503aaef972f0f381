//! Solver crate implements the solving service contract in process: it validates a request, builds
//! a distance matrix from node coordinates and finds a closed tour with one of two methods:
//!
//! - `brute`: exhaustive search over all tours which start and end at the start node
//! - `nearest`: greedy nearest neighbor heuristic
//!
//! Both methods run either serially or in parallel on a thread pool. The execution type changes
//! only how the work is spread, not the result: serial and parallel runs return the same tour.
//!
//! # Examples
//!
//! ```
//! use tsp_core::prelude::*;
//! use tsp_solver::{ServiceConfig, SolverService};
//!
//! let node = |lng: f64, lat: f64, label: &str| tsp_core::format::request::Node {
//!     coordinates: Coordinates::new(lng, lat),
//!     label: Label::from(label),
//! };
//!
//! let request = TspRequest {
//!     nodes: vec![node(0., 0., "A"), node(0., 3., "B"), node(4., 0., "C")],
//!     execution_type: ExecutionType::Serial,
//!     method_type: MethodType::Brute,
//!     start_node: "A".to_string(),
//! };
//!
//! let service = SolverService::new(ServiceConfig::default()).expect("cannot create service");
//! let response = service.solve(&request).expect("cannot solve");
//!
//! assert_eq!(response.result.minimum_cost, 12.);
//! assert_eq!(response.result.optimal_tour, vec!["A", "B", "C", "A"]);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub mod algorithms;
pub mod matrix;

mod client;
pub use self::client::LocalSolverClient;

mod service;
pub use self::service::*;

mod utils;
