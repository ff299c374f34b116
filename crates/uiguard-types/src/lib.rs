//! Stable DTOs and IDs used across the uiguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for findings, advice entries and the emitted JSON reports
//! - stable string IDs and codes for the accessibility checks
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use receipt::{
    A11yReport, AdviceEntry, AdviceReport, Finding, RunMeta, SCHEMA_A11Y_REPORT_V1,
    SCHEMA_ADVICE_REPORT_V1, Severity, ToolMeta, Verdict, VerdictCounts, VerdictStatus,
};
