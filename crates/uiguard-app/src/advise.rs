//! The `advise` use case: match source text against a loaded guide corpus.

use time::OffsetDateTime;
use tracing::debug;
use uiguard_domain::policy::AdvicePolicy;
use uiguard_guides::LoadedCorpus;
use uiguard_types::{AdviceReport, SCHEMA_ADVICE_REPORT_V1};

use crate::{run_meta, tool_meta};

pub const TOOL_HIG_ADVISOR: &str = "hig-advisor";

pub fn run_advise(text: &str, loaded: &LoadedCorpus) -> AdviceReport {
    let started_at = OffsetDateTime::now_utc();

    let advice = uiguard_domain::advise(text, &loaded.corpus, &AdvicePolicy::default());
    let topics = advice.topic_match.names();
    debug!(
        "matched topics [{}]{}",
        topics.join(", "),
        if advice.topic_match.is_general() {
            " (general)"
        } else {
            ""
        }
    );
    if advice.is_truncated() {
        debug!(
            "kept {} of {} recommendation entries",
            advice.entries.len(),
            advice.total
        );
    }

    AdviceReport {
        schema: SCHEMA_ADVICE_REPORT_V1.to_string(),
        tool: tool_meta(TOOL_HIG_ADVISOR),
        run: run_meta(started_at),
        topics,
        general: advice.topic_match.is_general(),
        recommendations_total: advice.total as u32,
        truncated: advice.is_truncated(),
        recommendations: advice.entries,
        loaded_guides: loaded.corpus.names().map(str::to_string).collect(),
    }
}
