//! Error types for the Prism engine
//!
//! This module defines the error types used throughout the engine,
//! including configuration, resource and rendering failures.

use std::fmt;

/// Result type for Prism engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Prism engine errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid configuration (aspect ratio, clip planes, light capacity, etc.)
    InvalidConfiguration(String),

    /// A required resource (mesh, material) could not be resolved
    MissingDependency(String),

    /// Invalid resource (mesh data, texture data, duplicate name, etc.)
    InvalidResource(String),

    /// Initialization failed (window, renderer, subsystems)
    InitializationFailed(String),

    /// Error reported by the rendering collaborator
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::MissingDependency(msg) => write!(f, "Missing dependency: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
