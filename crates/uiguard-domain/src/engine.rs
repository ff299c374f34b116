use crate::checks;
use crate::policy::ScanPolicy;
use crate::report::ScanReport;
use uiguard_types::{Finding, Severity};

/// Run every accessibility rule over `text`.
///
/// Total for any input. Findings keep rule-table order within each tier;
/// nothing is sorted or de-duplicated.
pub fn scan(text: &str, policy: &ScanPolicy) -> ScanReport {
    let mut findings: Vec<Finding> = Vec::new();

    checks::run_all(text, policy, &mut findings);

    let (issues, warnings) = findings
        .into_iter()
        .partition(|f| f.severity == Severity::Issue);

    ScanReport { issues, warnings }
}
