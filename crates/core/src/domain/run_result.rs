// Run result accumulator

use super::queue::QueueObservation;
use super::severity::{Severity, Thresholds};

/// Outcome of one check run
///
/// Starts empty and is folded by value through the evaluation loop:
/// severity never decreases and breaches keep tube enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    pub severity: Severity,
    pub breaches: Vec<String>,
}

impl RunResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one observation into the result
    pub fn record(mut self, observation: &QueueObservation, thresholds: &Thresholds) -> Self {
        let level = thresholds.classify(observation.ready);
        if level > Severity::Ok {
            self.breaches.push(observation.label());
            self.severity = self.severity.max(level);
        }
        self
    }

    pub fn is_ok(&self) -> bool {
        self.breaches.is_empty()
    }
}
