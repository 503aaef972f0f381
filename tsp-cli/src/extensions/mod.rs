//! Contains extensions which connect the core engine to the outer world.

pub mod config;
pub mod http;
pub mod import;
pub mod session;
