//! Error definitions for Orbitron
//!
//! Only genuine faults live here. A refused password or a missing link is an
//! ordinary outcome and is reported through `LockdownStatus` or `StatusReport`.

use thiserror::Error;

/// Orbitron error types
#[derive(Error, Debug)]
pub enum OrbError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Station lock poisoned")]
    LockPoisoned,
}

impl OrbError {
    pub fn config(msg: impl Into<String>) -> Self {
        OrbError::Config(msg.into())
    }
}

/// Result type alias for Orbitron operations
pub type OrbResult<T> = Result<T, OrbError>;
