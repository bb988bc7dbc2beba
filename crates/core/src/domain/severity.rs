// Severity levels and threshold classification (Nagios check conventions)

use std::fmt;

/// Check status, ordered so that `max` yields the worst one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    #[default]
    Ok,
    Warning,
    Critical,
}

impl Severity {
    /// Process exit code for this status (0 / 1 / 2)
    pub fn exit_code(self) -> i32 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Ok => write!(f, "OK"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Ready-job thresholds, both inclusive lower bounds
///
/// `warning < critical` is expected but not enforced. When it does not hold,
/// counts at or above `critical` still classify as critical and the warning
/// band is simply empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub warning: u64,
    pub critical: u64,
}

impl Thresholds {
    pub fn new(warning: u64, critical: u64) -> Self {
        Self { warning, critical }
    }

    /// Classify a ready-job count
    pub fn classify(&self, ready: u64) -> Severity {
        if ready >= self.critical {
            Severity::Critical
        } else if ready >= self.warning {
            Severity::Warning
        } else {
            Severity::Ok
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Ok < Severity::Warning);
        assert!(Severity::Warning < Severity::Critical);
        assert_eq!(
            std::cmp::max(Severity::Warning, Severity::Critical),
            Severity::Critical
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Severity::Ok.exit_code(), 0);
        assert_eq!(Severity::Warning.exit_code(), 1);
        assert_eq!(Severity::Critical.exit_code(), 2);
    }

    #[test]
    fn test_classify_bands() {
        let t = Thresholds::new(500, 1000);

        assert_eq!(t.classify(0), Severity::Ok);
        assert_eq!(t.classify(499), Severity::Ok);
        assert_eq!(t.classify(500), Severity::Warning);
        assert_eq!(t.classify(999), Severity::Warning);
        assert_eq!(t.classify(1000), Severity::Critical);
        assert_eq!(t.classify(u64::MAX), Severity::Critical);
    }

    #[test]
    fn test_classify_inverted_thresholds() {
        // warning >= critical: the warning band is empty
        let t = Thresholds::new(1000, 500);

        assert_eq!(t.classify(499), Severity::Ok);
        assert_eq!(t.classify(500), Severity::Critical);
        assert_eq!(t.classify(1500), Severity::Critical);
    }
}
