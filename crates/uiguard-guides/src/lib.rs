//! Guide corpus adapter: discover and read guide documents from a directory.
//!
//! This crate is allowed to do filesystem IO. Loading is best-effort: a
//! document that cannot be read is logged and skipped, and only a missing
//! directory or an empty result is an error.

#![forbid(unsafe_code)]

mod discover;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, warn};
use uiguard_domain::GuideCorpus;

pub use discover::{GUIDE_PATTERN, discover_guides, guide_name};

/// Default guides directory, relative to the working directory.
pub const DEFAULT_GUIDES_ROOT: &str = "Guides/HIG";

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Guides directory not found: {0}")]
    DirectoryNotFound(Utf8PathBuf),

    #[error("No guides found in {0}")]
    Empty(Utf8PathBuf),
}

/// A guide that was discovered but could not be read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedGuide {
    pub path: Utf8PathBuf,
    pub reason: String,
}

#[derive(Clone, Debug)]
pub struct LoadedCorpus {
    pub corpus: GuideCorpus,
    pub skipped: Vec<SkippedGuide>,
}

/// Load every guide document directly inside `dir`.
pub fn load_corpus(dir: &Utf8Path) -> Result<LoadedCorpus, CorpusError> {
    if !dir.exists() {
        return Err(CorpusError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut corpus = GuideCorpus::new();
    let mut skipped = Vec::new();

    for path in discover_guides(dir) {
        let Some(name) = path.file_name().and_then(guide_name) else {
            continue;
        };

        match std::fs::read_to_string(&path) {
            Ok(text) => {
                if corpus.insert(name, text).is_some() {
                    debug!("guide {} replaced an earlier document of the same name", name);
                }
            }
            Err(err) => {
                warn!("Could not load {}: {}", path, err);
                skipped.push(SkippedGuide {
                    path: path.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    if corpus.is_empty() {
        return Err(CorpusError::Empty(dir.to_path_buf()));
    }

    debug!(
        "loaded {} guides from {} ({} skipped)",
        corpus.len(),
        dir,
        skipped.len()
    );

    Ok(LoadedCorpus { corpus, skipped })
}
