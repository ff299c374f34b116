//! Keyword classification of source text into guideline topics.

/// The fixed topic vocabulary. A topic's name doubles as the guide document
/// name it draws advice from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Topic {
    Navigation,
    Actions,
}

impl Topic {
    /// Table order; also the order topics are emitted in.
    pub const ALL: [Topic; 2] = [Topic::Navigation, Topic::Actions];

    pub fn name(self) -> &'static str {
        match self {
            Topic::Navigation => "navigation",
            Topic::Actions => "actions",
        }
    }

    /// Lowercase keywords; a topic matches when any occurs as a substring.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Topic::Navigation => &["navigation", "navigationlink", "navigationstack", "tabview"],
            Topic::Actions => &["button", "action", "tap", "gesture", "onclick"],
        }
    }

    fn matches(self, lowered: &str) -> bool {
        self.keywords().iter().any(|k| lowered.contains(k))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicMatch {
    topics: Vec<Topic>,
    general: bool,
}

impl TopicMatch {
    /// Matched topics in table order. Never empty.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn contains(&self, topic: Topic) -> bool {
        self.topics.contains(&topic)
    }

    /// True when nothing matched and every topic was selected as a fallback.
    pub fn is_general(&self) -> bool {
        self.general
    }

    pub fn names(&self) -> Vec<String> {
        self.topics.iter().map(|t| t.name().to_string()).collect()
    }
}

pub fn classify(text: &str) -> TopicMatch {
    let lowered = text.to_lowercase();
    let topics: Vec<Topic> = Topic::ALL
        .into_iter()
        .filter(|t| t.matches(&lowered))
        .collect();

    if topics.is_empty() {
        return TopicMatch {
            topics: Topic::ALL.to_vec(),
            general: true,
        };
    }

    TopicMatch {
        topics,
        general: false,
    }
}
