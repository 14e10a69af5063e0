//! The `error` module defines the error types used within the `surepub`
//! application.
//!
//! Each variant maps to a fixed recovery policy: frame errors are ignored
//! and the session continues, transport-open failures are fatal at
//! startup, transient transport I/O is logged and retried after a pause,
//! and persistence failures are logged while the in-memory state stays
//! authoritative.

use thiserror::Error;

/// Top-level broker error.
#[derive(Debug, Error)]
pub enum BrokerError {
    /// The transport endpoint could not be acquired at startup.
    #[error("failed to open transport {addr}: {source}")]
    TransportOpen {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    /// A transient read or write failure during operation.
    #[error("transport i/o error: {0}")]
    TransportIo(#[from] std::io::Error),
}

/// A frame that carries no actionable command.
///
/// These are never surfaced to the peer; the session loop logs them at
/// trace level and moves on to the next frame.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("unrecognized command: {0}")]
    UnknownCommand(String),
    #[error("{command} frame missing {field}")]
    MissingField {
        command: &'static str,
        field: &'static str,
    },
}

/// Failure while loading or rewriting the dedup state file.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("state file i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("state file encoding: {0}")]
    Encoding(#[from] serde_json::Error),
}
