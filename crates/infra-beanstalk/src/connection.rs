// beanstalkd connection (QueueServer) and connector

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tracing::{debug, trace};

use beanschk_core::application::constants::DEFAULT_CALL_TIMEOUT;
use beanschk_core::domain::{ServerAddress, TubeName, TubeStats};
use beanschk_core::port::{Connector, QueueServer};
use beanschk_core::ServerError;

use crate::error::{BeanstalkError, Result};
use crate::protocol;

/// Run an I/O future under the per-call time limit
async fn within<T, F>(limit: Duration, fut: F) -> Result<T>
where
    F: Future<Output = std::io::Result<T>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(res) => Ok(res?),
        Err(_) => Err(BeanstalkError::Timeout(limit)),
    }
}

/// A single TCP connection to beanstalkd
pub struct BeanstalkConnection {
    stream: BufReader<TcpStream>,
    timeout: Duration,
    /// A request failed mid-exchange; replies can no longer be matched to commands
    broken: bool,
    closed: bool,
}

impl BeanstalkConnection {
    /// Dial the server; the whole dial is bounded by `timeout`
    pub async fn connect(address: &ServerAddress, timeout: Duration) -> Result<Self> {
        let stream = within(
            timeout,
            TcpStream::connect((address.host.as_str(), address.port)),
        )
        .await?;

        debug!(address = %address, "Connected to beanstalkd");

        Ok(Self {
            stream: BufReader::new(stream),
            timeout,
            broken: false,
            closed: false,
        })
    }

    /// Send one command and return the body of its `OK <bytes>` reply
    ///
    /// Any error that may leave a reply in flight marks the connection
    /// broken; every later request then fails with [`BeanstalkError::Closed`].
    async fn request(&mut self, command: &str) -> Result<Vec<u8>> {
        if self.closed || self.broken {
            return Err(BeanstalkError::Closed);
        }

        let outcome = self.exchange(command).await;
        if let Err(e) = &outcome {
            if e.breaks_connection() {
                debug!(error = %e, "Connection out of step, refusing further requests");
                self.broken = true;
            }
        }
        outcome
    }

    async fn exchange(&mut self, command: &str) -> Result<Vec<u8>> {
        let limit = self.timeout;
        trace!(command = command.trim_end(), "Sending command");

        within(limit, self.stream.get_mut().write_all(command.as_bytes())).await?;

        let mut status = String::new();
        if within(limit, self.stream.read_line(&mut status)).await? == 0 {
            return Err(BeanstalkError::Closed);
        }

        let len = protocol::parse_ok_header(&status)?;

        let mut body = vec![0u8; len + protocol::CRLF.len()];
        within(limit, self.stream.read_exact(&mut body)).await?;
        body.truncate(len);

        Ok(body)
    }

    pub async fn list_tubes(&mut self) -> Result<Vec<TubeName>> {
        let body = self.request(protocol::LIST_TUBES).await?;
        protocol::decode_tube_list(&body)
    }

    pub async fn stats_tube(&mut self, tube: &str) -> Result<TubeStats> {
        let body = self.request(&protocol::stats_tube(tube)).await?;
        protocol::decode_tube_stats(&body)
    }

    /// Send `quit` and shut the socket down. Idempotent.
    ///
    /// A broken connection is shut down without sending `quit`.
    pub async fn quit(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        let limit = self.timeout;
        if !self.broken {
            within(
                limit,
                self.stream.get_mut().write_all(protocol::QUIT.as_bytes()),
            )
            .await?;
        }

        // The server hangs up on `quit`, so a failed shutdown is expected noise
        if let Err(e) = within(limit, self.stream.get_mut().shutdown()).await {
            trace!(error = %e, "Socket shutdown after quit failed");
        }

        debug!("Connection closed");
        Ok(())
    }
}

#[async_trait]
impl QueueServer for BeanstalkConnection {
    async fn list_tubes(&mut self) -> std::result::Result<Vec<TubeName>, ServerError> {
        Ok(BeanstalkConnection::list_tubes(self).await?)
    }

    async fn tube_stats(&mut self, tube: &str) -> std::result::Result<TubeStats, ServerError> {
        Ok(self.stats_tube(tube).await?)
    }

    async fn close(&mut self) -> std::result::Result<(), ServerError> {
        Ok(self.quit().await?)
    }
}

/// Dials beanstalkd over TCP
#[derive(Debug, Clone, Copy)]
pub struct BeanstalkConnector {
    timeout: Duration,
}

impl BeanstalkConnector {
    /// # Arguments
    /// * `timeout` - limit applied to the dial and to every request/response
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for BeanstalkConnector {
    fn default() -> Self {
        Self::new(DEFAULT_CALL_TIMEOUT)
    }
}

#[async_trait]
impl Connector for BeanstalkConnector {
    type Connection = BeanstalkConnection;

    async fn connect(
        &self,
        address: &ServerAddress,
    ) -> std::result::Result<BeanstalkConnection, ServerError> {
        Ok(BeanstalkConnection::connect(address, self.timeout).await?)
    }
}
