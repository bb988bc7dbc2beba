// Domain Layer - Pure check logic and entities

pub mod address;
pub mod error;
pub mod queue;
pub mod run_result;
pub mod severity;

// Re-exports
pub use address::ServerAddress;
pub use error::DomainError;
pub use queue::{QueueObservation, TubeName, TubeStats, CURRENT_JOBS_READY};
pub use run_result::RunResult;
pub use severity::{Severity, Thresholds};
