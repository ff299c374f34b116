//! Advice assembly: classify, extract, concatenate, cap.

use crate::corpus::GuideCorpus;
use crate::extract::extract_points;
use crate::policy::AdvicePolicy;
use crate::topics::{TopicMatch, classify};
use uiguard_types::AdviceEntry;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Advice {
    pub topic_match: TopicMatch,
    /// Assembled entries after the recommendation cap.
    pub entries: Vec<AdviceEntry>,
    /// Entry count before the cap.
    pub total: usize,
}

impl Advice {
    pub fn is_truncated(&self) -> bool {
        self.total > self.entries.len()
    }
}

/// Build the recommendation list for `text` from `corpus`.
///
/// Matched topics without a document of the same name contribute nothing.
/// The cap is applied once, after assembly, in emission order.
pub fn advise(text: &str, corpus: &GuideCorpus, policy: &AdvicePolicy) -> Advice {
    let topic_match = classify(text);
    let mut entries = Vec::new();

    if topic_match.is_general() {
        entries.push(AdviceEntry::GeneralNotice);
    }

    for topic in topic_match.topics() {
        let name = topic.name();
        let Some(document) = corpus.get(name) else {
            continue;
        };

        entries.push(AdviceEntry::GuideHeader {
            guide: name.to_string(),
        });
        for point in extract_points(document, policy.max_points_per_guide) {
            entries.push(AdviceEntry::Point {
                guide: name.to_string(),
                text: point.to_string(),
            });
        }
    }

    let total = entries.len();
    entries.truncate(policy.max_recommendations);

    Advice {
        topic_match,
        entries,
        total,
    }
}
