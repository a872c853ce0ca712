//! Engine error type for embedders.
//!
//! Every fallible builder and the Spark Connect codec return [`EngineError`], so
//! bindings can map failures to their native error types in one place.

use std::fmt;

/// Unified error type for sedona-connect operations.
#[derive(Debug)]
pub enum EngineError {
    /// User-facing error (invalid input, unsupported literal, bad function name).
    User(String),
    /// Malformed or unsupported Spark Connect expression payload.
    Plan(String),
    /// Internal / serialization error.
    Internal(String),
    /// Other / unclassified.
    Other(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::User(s) => write!(f, "user error: {s}"),
            EngineError::Plan(s) => write!(f, "plan error: {s}"),
            EngineError::Internal(s) => write!(f, "internal error: {s}"),
            EngineError::Other(s) => write!(f, "{s}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::Internal(e.to_string())
    }
}
