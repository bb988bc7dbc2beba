// Central Error Types for a check run

use thiserror::Error;

/// Failure reported by a queue-server adapter through the port layer
///
/// Adapters convert their own error types into this one, so the
/// application layer never sees socket or protocol details.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServerError {
    /// Server could not be reached, or the connection broke mid-call
    #[error("{0}")]
    Unavailable(String),

    /// Server answered with something the adapter cannot interpret
    #[error("{0}")]
    Protocol(String),

    #[error("not found")]
    NotFound,
}

/// Fatal check error
///
/// The `Display` output is exactly what the entry point prints (after a
/// single leading space) before exiting with the critical code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("connect {address}: {source}")]
    Connection {
        address: String,
        #[source]
        source: ServerError,
    },

    #[error("list-tubes: {0}")]
    ListTubes(#[source] ServerError),

    /// Only raised under the strict stats policy
    #[error("stats-tube {tube}: {source}")]
    TubeStats {
        tube: String,
        #[source]
        source: ServerError,
    },
}

/// Result type alias using CheckError
pub type Result<T> = std::result::Result<T, CheckError>;
