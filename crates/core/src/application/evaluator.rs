// Severity evaluator: stats -> classification -> RunResult
use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::domain::queue::ready_count;
use crate::domain::{DomainError, QueueObservation, RunResult, Thresholds, TubeName};
use crate::error::{CheckError, Result, ServerError};
use crate::port::QueueServer;

/// What to do when a single tube's stats cannot be fetched
///
/// Applies to tube-level failures only. A connection-level failure
/// ([`ServerError::Unavailable`]) is fatal under either policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatsPolicy {
    /// Skip the tube and keep evaluating the others
    #[default]
    Tolerant,
    /// Abort the whole run with a fatal error
    Strict,
}

impl FromStr for StatsPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tolerant" => Ok(StatsPolicy::Tolerant),
            "strict" => Ok(StatsPolicy::Strict),
            _ => Err(DomainError::UnknownStatsPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for StatsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsPolicy::Tolerant => write!(f, "tolerant"),
            StatsPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// Classifies every tube on a connection against the thresholds
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    thresholds: Thresholds,
    policy: StatsPolicy,
}

impl Evaluator {
    pub fn new(thresholds: Thresholds, policy: StatsPolicy) -> Self {
        Self { thresholds, policy }
    }

    /// Evaluate `tubes` in order and fold them into a [`RunResult`]
    ///
    /// Returns an error when the connection fails mid-loop, or when a tube's
    /// stats fail under [`StatsPolicy::Strict`].
    pub async fn evaluate<S>(&self, server: &mut S, tubes: &[TubeName]) -> Result<RunResult>
    where
        S: QueueServer + ?Sized,
    {
        let mut result = RunResult::new();

        for tube in tubes {
            let stats = match server.tube_stats(tube).await {
                Ok(stats) => stats,
                Err(source) => {
                    let lost_connection = matches!(source, ServerError::Unavailable(_));
                    if lost_connection || self.policy == StatsPolicy::Strict {
                        return Err(CheckError::TubeStats {
                            tube: tube.clone(),
                            source,
                        });
                    }
                    warn!(tube = %tube, error = %source, "Skipping tube: stats unavailable");
                    continue;
                }
            };

            if ready_count(&stats).is_none() {
                warn!(
                    tube = %tube,
                    raw = ?stats.get(crate::domain::CURRENT_JOBS_READY),
                    "Ready count missing or unparsable, counting as 0"
                );
            }

            let observation = QueueObservation::from_stats(tube.as_str(), &stats);
            debug!(
                tube = %observation.tube,
                ready = observation.ready,
                status = %self.thresholds.classify(observation.ready),
                "Tube classified"
            );

            result = result.record(&observation, &self.thresholds);
        }

        Ok(result)
    }
}
