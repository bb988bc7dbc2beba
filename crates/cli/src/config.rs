//! Command-line / environment configuration
//!
//! Precedence: flag > environment variable > built-in default.

use std::time::Duration;

use clap::Parser;

use beanschk_core::application::constants::{
    DEFAULT_CALL_TIMEOUT, DEFAULT_CRIT_LIMIT, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_WARN_LIMIT,
};
use beanschk_core::application::StatsPolicy;
use beanschk_core::domain::{ServerAddress, Thresholds};

use crate::logging::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "beanschk")]
#[command(about = "Check beanstalkd tubes for ready-job backlogs", long_about = None)]
#[command(version)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// beanstalkd host
    #[arg(short = 'a', long, env = "BEAN_ADDR", default_value = DEFAULT_HOST)]
    pub bean_addr: String,

    /// beanstalkd port
    #[arg(short = 'p', long, env = "BEAN_PORT", default_value_t = DEFAULT_PORT)]
    pub bean_port: u16,

    /// Combined host:port of the server (overrides --bean-addr/--bean-port)
    #[arg(short = 'h', long = "server", value_name = "HOST:PORT")]
    pub server: Option<ServerAddress>,

    /// Ready jobs at which a tube is WARNING
    #[arg(short = 'w', long, env = "WARN_LIMIT", default_value_t = DEFAULT_WARN_LIMIT)]
    pub warn_limit: u64,

    /// Ready jobs at which a tube is CRITICAL
    #[arg(short = 'c', long, env = "CRIT_LIMIT", default_value_t = DEFAULT_CRIT_LIMIT)]
    pub crit_limit: u64,

    /// Timeout for connect and for every request, in seconds
    #[arg(
        short = 't',
        long,
        env = "BEAN_TIMEOUT",
        default_value_t = DEFAULT_CALL_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// What to do when one tube's stats cannot be read: tolerant (skip) or strict (fail)
    #[arg(long, env = "BEAN_STATS_POLICY", default_value = "tolerant")]
    pub stats_policy: StatsPolicy,

    /// Diagnostic log format on stderr
    #[arg(long, env = "BEANSCHK_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    pub help: Option<bool>,
}

/// Resolved, immutable run configuration
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub address: ServerAddress,
    pub thresholds: Thresholds,
    pub timeout: Duration,
    pub stats_policy: StatsPolicy,
    pub log_format: LogFormat,
}

impl Cli {
    pub fn into_config(self) -> CheckConfig {
        let address = self
            .server
            .unwrap_or_else(|| ServerAddress::new(self.bean_addr, self.bean_port));

        CheckConfig {
            address,
            thresholds: Thresholds::new(self.warn_limit, self.crit_limit),
            timeout: Duration::from_secs(self.timeout),
            stats_policy: self.stats_policy,
            log_format: self.log_format,
        }
    }
}

/// One-line rendering of a clap parse error for the status line
pub fn usage_error_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
