//! The `scan` use case: classify source text into accessibility findings.

use time::OffsetDateTime;
use tracing::debug;
use uiguard_domain::policy::ScanPolicy;
use uiguard_types::{A11yReport, SCHEMA_A11Y_REPORT_V1};

use crate::{run_meta, tool_meta};

pub const TOOL_A11Y_CHECK: &str = "a11y-check";

pub fn run_scan(text: &str) -> A11yReport {
    let started_at = OffsetDateTime::now_utc();

    let report = uiguard_domain::scan(text, &ScanPolicy::default());
    let verdict = report.verdict();
    debug!(
        "scan found {} issues and {} warnings",
        verdict.counts.issues, verdict.counts.warnings
    );

    A11yReport {
        schema: SCHEMA_A11Y_REPORT_V1.to_string(),
        tool: tool_meta(TOOL_A11Y_CHECK),
        run: run_meta(started_at),
        verdict,
        issues: report.issues,
        warnings: report.warnings,
    }
}
