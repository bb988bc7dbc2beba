// Status line + exit code rendering
use std::fmt;

use crate::application::constants::{BREACH_PREFIX, OK_MESSAGE};
use crate::domain::{RunResult, Severity};

/// The single stdout line and exit code of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub severity: Severity,
    /// Printed as-is, including the leading space
    pub line: String,
}

impl Report {
    pub fn from_run(result: &RunResult) -> Self {
        if result.is_ok() {
            return Self {
                severity: Severity::Ok,
                line: format!(" {}", OK_MESSAGE),
            };
        }

        Self {
            severity: result.severity,
            line: format!(" {}{}", BREACH_PREFIX, result.breaches.join(", ")),
        }
    }

    /// Report for an error that prevented the check from running
    pub fn fatal(message: impl fmt::Display) -> Self {
        Self {
            severity: Severity::Critical,
            line: format!(" {}", message),
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.severity.exit_code()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}
