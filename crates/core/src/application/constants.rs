// Check constants (No magic values)
use std::time::Duration;

/// Default beanstalkd host
pub const DEFAULT_HOST: &str = "localhost";

/// Default beanstalkd port
pub const DEFAULT_PORT: u16 = 11300;

/// Default warning threshold (ready jobs, inclusive)
pub const DEFAULT_WARN_LIMIT: u64 = 500;

/// Default critical threshold (ready jobs, inclusive)
pub const DEFAULT_CRIT_LIMIT: u64 = 1000;

/// Default bound on every network call (10s)
/// An unresponsive server must not hang the check forever
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Prefix of the status line when at least one tube breached
pub const BREACH_PREFIX: &str = "tube/jobs: ";

/// Status line when nothing breached
pub const OK_MESSAGE: &str = "ok";
