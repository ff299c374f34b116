//! Use case orchestration for uiguard.
//!
//! This crate provides the application layer: use cases that coordinate the domain, guides, and
//! render layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing, logging and exit codes.

#![forbid(unsafe_code)]

mod advise;
mod explain;
mod render;
mod scan;
mod source;

pub use advise::{TOOL_HIG_ADVISOR, run_advise};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{OutputFormat, render_advice, render_scan, serialize_report};
pub use scan::{TOOL_A11Y_CHECK, run_scan};
pub use source::{SourceError, read_source, read_source_from};

use time::OffsetDateTime;
use uiguard_types::{RunMeta, ToolMeta};

fn tool_meta(name: &str) -> ToolMeta {
    ToolMeta {
        name: name.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

fn run_meta(started_at: OffsetDateTime) -> RunMeta {
    let ended_at = OffsetDateTime::now_utc();
    let duration_ms = (ended_at - started_at).whole_milliseconds().max(0) as u64;
    RunMeta {
        started_at,
        ended_at: Some(ended_at),
        duration_ms: Some(duration_ms),
    }
}
