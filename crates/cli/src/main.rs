//! beanschk - Nagios-style check for beanstalkd ready-job backlogs
//!
//! Prints exactly one line on stdout and exits 0 (ok), 1 (warning) or
//! 2 (critical / fatal error).

mod config;
mod logging;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use beanschk_core::application::{CheckService, Evaluator, Report};
use beanschk_infra_beanstalk::BeanstalkConnector;

use crate::config::{usage_error_message, CheckConfig, Cli};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => finish(Report::fatal(usage_error_message(&e))),
        },
    };

    let config = cli.into_config();
    logging::init(config.log_format);

    let report = run(&config).unwrap_or_else(|e| Report::fatal(format!("{:#}", e)));
    finish(report)
}

/// Execute one check; only runtime setup failures surface as `Err`
fn run(config: &CheckConfig) -> Result<Report> {
    debug!(
        address = %config.address,
        warning = config.thresholds.warning,
        critical = config.thresholds.critical,
        timeout = ?config.timeout,
        stats_policy = %config.stats_policy,
        "beanschk v{} starting",
        beanschk_core::VERSION
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let service = CheckService::new(
        BeanstalkConnector::new(config.timeout),
        Evaluator::new(config.thresholds, config.stats_policy),
    );

    let report = match runtime.block_on(service.run(&config.address)) {
        Ok(result) => Report::from_run(&result),
        Err(e) => Report::fatal(&e),
    };

    Ok(report)
}

fn finish(report: Report) -> ! {
    println!("{}", report);
    std::process::exit(report.exit_code())
}
