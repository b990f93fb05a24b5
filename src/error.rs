//! Error types for the greeter service.

use thiserror::Error;

/// Unified error type for the greeter service.
///
/// Request handling has no failure path; every variant is a startup or
/// shutdown failure.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// IO error (binding or serving the listener).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
