//! Library crate for the beer die league backend, exposing modules for binaries and tests.

/// Runtime configuration.
pub mod config;
/// Persistence layer.
pub mod dao;
mod dto;
mod error;
/// HTTP routes.
pub mod routes;
/// Business logic behind the routes.
pub mod services;
/// Shared in-memory league state.
pub mod state;
