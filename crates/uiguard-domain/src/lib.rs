//! Pure heuristic classification (no IO).
//!
//! Input: source text (and, for advice, a guide corpus loaded elsewhere).
//! Output: severity-tagged findings, or an assembled list of recommendations.
//!
//! Everything here is textual co-occurrence over the whole input. Nothing is
//! parsed, and false positives across unrelated constructs are accepted.

#![forbid(unsafe_code)]

pub mod advice;
pub mod corpus;
pub mod extract;
pub mod policy;
pub mod predicates;
pub mod report;
pub mod topics;

mod engine;
pub mod checks;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use advice::{Advice, advise};
pub use corpus::GuideCorpus;
pub use engine::scan;
pub use topics::{Topic, TopicMatch, classify};
