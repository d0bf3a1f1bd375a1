//! Error handling for the TopoVis application
//!
//! This module defines the error type shared by the transport layer and the
//! sync worker, plus a Result alias used throughout the crate.
//!
//! Nothing in this client is fatal: transport and decoding failures are
//! surfaced as a status string while the last good snapshot stays on screen.

use thiserror::Error;

/// Main error type for TopoVis operations
#[derive(Error, Debug)]
pub enum TopoVisError {
    /// Transport-level HTTP failures (server unreachable, broken connection)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success HTTP status
    #[error("Server returned {status} for {path}")]
    Api { status: u16, path: String },

    /// Malformed response body
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for TopoVis operations
pub type Result<T> = std::result::Result<T, TopoVisError>;
