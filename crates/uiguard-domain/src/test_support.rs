use crate::corpus::GuideCorpus;
use uiguard_types::Finding;

pub fn codes(findings: &[Finding]) -> Vec<&str> {
    findings.iter().map(|f| f.code.as_str()).collect()
}

/// Pad `prefix` with trailing spaces to exactly `len` characters.
pub fn padded_view(prefix: &str, len: usize) -> String {
    let used = prefix.chars().count();
    assert!(used <= len, "prefix longer than requested length");
    format!("{prefix}{}", " ".repeat(len - used))
}

pub fn bullets(n: usize, label: &str) -> String {
    (1..=n)
        .map(|i| format!("- {label} point {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `navigation` and `actions` guides with `nav` and `act` bullets respectively.
pub fn corpus(nav: usize, act: usize) -> GuideCorpus {
    let mut corpus = GuideCorpus::new();
    corpus.insert("navigation", format!("# Navigation\n\n{}\n", bullets(nav, "nav")));
    corpus.insert("actions", format!("# Actions\n\n{}\n", bullets(act, "act")));
    corpus
}
