// Check use case: connect -> list -> evaluate -> close
use tracing::{debug, info};

use crate::application::evaluator::Evaluator;
use crate::domain::{RunResult, ServerAddress};
use crate::error::{CheckError, Result};
use crate::port::{Connector, QueueServer};

/// Runs one queue-depth check against a server
///
/// Owns nothing but the connector and evaluator; every run opens and closes
/// its own connection.
pub struct CheckService<C: Connector> {
    connector: C,
    evaluator: Evaluator,
}

impl<C: Connector> CheckService<C> {
    pub fn new(connector: C, evaluator: Evaluator) -> Self {
        Self {
            connector,
            evaluator,
        }
    }

    /// Execute the check
    ///
    /// Connect and list failures are fatal. Once connected, the connection is
    /// closed on every path, including fatal ones.
    pub async fn run(&self, address: &ServerAddress) -> Result<RunResult> {
        debug!(address = %address, "Connecting to queue server");

        let mut conn = self
            .connector
            .connect(address)
            .await
            .map_err(|source| CheckError::Connection {
                address: address.to_string(),
                source,
            })?;

        let outcome = self.evaluate_all(&mut conn).await;

        if let Err(e) = conn.close().await {
            debug!(error = %e, "Error while closing connection (ignored)");
        }

        if let Ok(result) = &outcome {
            info!(
                severity = %result.severity,
                breaches = result.breaches.len(),
                "Check completed"
            );
        }

        outcome
    }

    async fn evaluate_all(&self, conn: &mut C::Connection) -> Result<RunResult> {
        let tubes = conn.list_tubes().await.map_err(CheckError::ListTubes)?;
        debug!(count = tubes.len(), "Tubes listed");

        self.evaluator.evaluate(conn, &tubes).await
    }
}
