use std::collections::BTreeMap;

/// Guide documents keyed by name (file name without extension).
///
/// Built once by the loader and read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuideCorpus {
    guides: BTreeMap<String, String>,
}

impl GuideCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last insert wins; the displaced text is returned.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.guides.insert(name.into(), text.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.guides.get(name).map(String::as_str)
    }

    /// Names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.guides.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.guides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }
}

impl<N: Into<String>, T: Into<String>> FromIterator<(N, T)> for GuideCorpus {
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        let mut corpus = GuideCorpus::new();
        for (name, text) in iter {
            corpus.insert(name, text);
        }
        corpus
    }
}
