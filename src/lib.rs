//! Greeting and health-check HTTP service for CI/CD pipeline deployments.
//!
//! Two read-only JSON endpoints:
//!
//! ```text
//! GET /        {"message":"Hello from CI/CD Pipeline!","version":"1.0.0","environment":"development"}
//! GET /health  {"status":"healthy"}
//! ```
//!
//! Everything else answers 404.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: HTTP handlers, routes and server loop
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use error::{Result, ServiceError};
