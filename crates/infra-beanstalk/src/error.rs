//! Adapter Error Types

use std::time::Duration;

use beanschk_core::ServerError;
use thiserror::Error;

/// beanstalkd adapter error
#[derive(Debug, Error)]
pub enum BeanstalkError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("connection closed by server")]
    Closed,

    #[error("NOT_FOUND")]
    NotFound,

    /// Any status line other than the expected one (`OUT_OF_MEMORY`, `BAD_FORMAT`, ...)
    #[error("unexpected reply: {0}")]
    Protocol(String),

    /// `OK` header with an unusable body length; the reply cannot be framed
    #[error("malformed reply header: {0}")]
    MalformedReply(String),

    #[error("malformed reply body: {0}")]
    Decode(#[from] serde_yaml::Error),
}

impl BeanstalkError {
    /// Whether the request/reply stream is out of step after this error
    ///
    /// A well-formed error status (`NOT_FOUND`, `OUT_OF_MEMORY`, ...) or an
    /// undecodable but fully read body leaves the connection usable.
    pub fn breaks_connection(&self) -> bool {
        matches!(
            self,
            BeanstalkError::Io(_)
                | BeanstalkError::Timeout(_)
                | BeanstalkError::Closed
                | BeanstalkError::MalformedReply(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BeanstalkError>;

// Conversion into the port error lives here so core stays free of adapter types
impl From<BeanstalkError> for ServerError {
    fn from(e: BeanstalkError) -> Self {
        match e {
            _ if e.breaks_connection() => ServerError::Unavailable(e.to_string()),
            BeanstalkError::NotFound => ServerError::NotFound,
            _ => ServerError::Protocol(e.to_string()),
        }
    }
}
