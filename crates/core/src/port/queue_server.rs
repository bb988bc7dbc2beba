// Queue server port
// reason: async-trait so adapters can do network I/O behind the trait

use async_trait::async_trait;

use crate::domain::{ServerAddress, TubeName, TubeStats};
use crate::error::ServerError;

/// An open connection to a job-queue server
///
/// The connection is owned exclusively by one check run.
#[async_trait]
pub trait QueueServer: Send {
    /// List every tube the server knows about, in server order
    async fn list_tubes(&mut self) -> Result<Vec<TubeName>, ServerError>;

    /// Fetch the statistics of one tube
    ///
    /// # Returns
    /// Stat name -> raw value, e.g. `"current-jobs-ready" -> "12"`
    async fn tube_stats(&mut self, tube: &str) -> Result<TubeStats, ServerError>;

    /// Release the connection
    ///
    /// Must be safe to call more than once.
    async fn close(&mut self) -> Result<(), ServerError>;
}

/// Opens connections to a queue server
#[async_trait]
pub trait Connector: Send + Sync {
    type Connection: QueueServer;

    async fn connect(&self, address: &ServerAddress) -> Result<Self::Connection, ServerError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Mock QueueServer with scripted replies
    ///
    /// Clones share call counters, so a test can keep a handle while the
    /// connector hands copies to the code under test.
    #[derive(Clone, Default)]
    pub struct MockQueueServer {
        tubes: Vec<TubeName>,
        stats: HashMap<TubeName, Result<TubeStats, ServerError>>,
        list_error: Option<ServerError>,
        calls: Arc<Mutex<MockCalls>>,
    }

    #[derive(Debug, Default, Clone)]
    pub struct MockCalls {
        pub stats_requests: Vec<TubeName>,
        pub closes: usize,
    }

    impl MockQueueServer {
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a tube with the given `current-jobs-ready` value
        pub fn with_tube(self, name: &str, ready: u64) -> Self {
            self.with_raw_stat(name, &ready.to_string())
        }

        /// Add a tube whose ready count is sent verbatim (may be garbage)
        pub fn with_raw_stat(mut self, name: &str, ready: &str) -> Self {
            let stats = TubeStats::from([
                ("name".to_string(), name.to_string()),
                (
                    crate::domain::CURRENT_JOBS_READY.to_string(),
                    ready.to_string(),
                ),
            ]);
            self.tubes.push(name.to_string());
            self.stats.insert(name.to_string(), Ok(stats));
            self
        }

        /// Add a tube whose stats request fails
        pub fn with_failing_tube(mut self, name: &str, error: ServerError) -> Self {
            self.tubes.push(name.to_string());
            self.stats.insert(name.to_string(), Err(error));
            self
        }

        pub fn with_list_error(mut self, error: ServerError) -> Self {
            self.list_error = Some(error);
            self
        }

        pub fn calls(&self) -> MockCalls {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl QueueServer for MockQueueServer {
        async fn list_tubes(&mut self) -> Result<Vec<TubeName>, ServerError> {
            match &self.list_error {
                Some(e) => Err(e.clone()),
                None => Ok(self.tubes.clone()),
            }
        }

        async fn tube_stats(&mut self, tube: &str) -> Result<TubeStats, ServerError> {
            self.calls
                .lock()
                .unwrap()
                .stats_requests
                .push(tube.to_string());
            self.stats
                .get(tube)
                .cloned()
                .unwrap_or(Err(ServerError::NotFound))
        }

        async fn close(&mut self) -> Result<(), ServerError> {
            self.calls.lock().unwrap().closes += 1;
            Ok(())
        }
    }

    /// Mock Connector handing out clones of one scripted server
    pub struct MockConnector {
        server: MockQueueServer,
        connect_error: Option<ServerError>,
    }

    impl MockConnector {
        pub fn new(server: MockQueueServer) -> Self {
            Self {
                server,
                connect_error: None,
            }
        }

        pub fn unreachable(error: ServerError) -> Self {
            Self {
                server: MockQueueServer::new(),
                connect_error: Some(error),
            }
        }
    }

    #[async_trait]
    impl Connector for MockConnector {
        type Connection = MockQueueServer;

        async fn connect(&self, _address: &ServerAddress) -> Result<MockQueueServer, ServerError> {
            match &self.connect_error {
                Some(e) => Err(e.clone()),
                None => Ok(self.server.clone()),
            }
        }
    }
}
