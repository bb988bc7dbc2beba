// Queue (tube) Domain Model

use std::collections::HashMap;

/// Tube identifier
pub type TubeName = String;

/// Raw `stats-tube` reply: stat name -> value as sent by the server
pub type TubeStats = HashMap<String, String>;

/// The only stat the check consumes
pub const CURRENT_JOBS_READY: &str = "current-jobs-ready";

/// Ready-job count observed for one tube during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueObservation {
    pub tube: TubeName,
    pub ready: u64,
}

impl QueueObservation {
    pub fn new(tube: impl Into<TubeName>, ready: u64) -> Self {
        Self {
            tube: tube.into(),
            ready,
        }
    }

    /// Build an observation from a stats reply.
    ///
    /// A missing or unparsable `current-jobs-ready` yields `ready == 0`.
    /// This can hide a backlog (false "ok"); callers that care should log it,
    /// see [`ready_count`].
    pub fn from_stats(tube: impl Into<TubeName>, stats: &TubeStats) -> Self {
        Self::new(tube, ready_count(stats).unwrap_or(0))
    }

    /// `name/count` label used in the breach list
    pub fn label(&self) -> String {
        format!("{}/{}", self.tube, self.ready)
    }
}

/// Parsed `current-jobs-ready`, or `None` if absent or not an integer
pub fn ready_count(stats: &TubeStats) -> Option<u64> {
    stats
        .get(CURRENT_JOBS_READY)
        .and_then(|v| v.trim().parse::<u64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(pairs: &[(&str, &str)]) -> TubeStats {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_stats_reads_ready_count() {
        let s = stats(&[
            ("name", "emails"),
            ("current-jobs-ready", "742"),
            ("current-jobs-delayed", "3"),
        ]);

        let obs = QueueObservation::from_stats("emails", &s);
        assert_eq!(obs, QueueObservation::new("emails", 742));
        assert_eq!(obs.label(), "emails/742");
    }

    #[test]
    fn test_missing_ready_count_is_zero() {
        let s = stats(&[("name", "emails")]);

        assert_eq!(ready_count(&s), None);
        assert_eq!(QueueObservation::from_stats("emails", &s).ready, 0);
    }

    #[test]
    fn test_unparsable_ready_count_is_zero() {
        let s = stats(&[("current-jobs-ready", "lots")]);
        assert_eq!(QueueObservation::from_stats("emails", &s).ready, 0);

        let s = stats(&[("current-jobs-ready", "-4")]);
        assert_eq!(QueueObservation::from_stats("emails", &s).ready, 0);
    }
}
