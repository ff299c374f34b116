use uiguard_types::{Finding, Verdict, VerdictCounts, VerdictStatus};

/// Result of an accessibility scan: two tiers, each in rule-table order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub issues: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.warnings.is_empty()
    }

    pub fn counts(&self) -> VerdictCounts {
        VerdictCounts {
            issues: self.issues.len() as u32,
            warnings: self.warnings.len() as u32,
        }
    }

    /// Issues fail, warnings warn. Never affects the exit code.
    pub fn verdict(&self) -> Verdict {
        let status = if !self.issues.is_empty() {
            VerdictStatus::Fail
        } else if !self.warnings.is_empty() {
            VerdictStatus::Warn
        } else {
            VerdictStatus::Pass
        };
        Verdict {
            status,
            counts: self.counts(),
        }
    }
}
