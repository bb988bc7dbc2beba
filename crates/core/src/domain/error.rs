// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid address {0:?}: expected host:port")]
    InvalidAddress(String),

    #[error("invalid port {0:?}")]
    InvalidPort(String),

    #[error("unknown stats policy {0:?}: expected tolerant or strict")]
    UnknownStatsPolicy(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
