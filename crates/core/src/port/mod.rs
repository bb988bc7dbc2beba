// Port Layer - Interfaces for external dependencies

pub mod queue_server;

// Re-exports
pub use queue_server::{Connector, QueueServer};
