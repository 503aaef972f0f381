//! A command line front-end of the map marker planner.
//!
//! The library part contains the edge collaborators of the core engine: a json config file,
//! marker import from json and csv files, an http client of the solving service and a headless,
//! line oriented session which drives the map interaction surface with text commands.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub mod extensions;

pub use tsp_core as core;
pub use tsp_solver as solver;
