use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobMatcher};
use std::path::PathBuf;
use std::sync::LazyLock;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File-name pattern for guide documents.
pub const GUIDE_PATTERN: &str = "*.md";
const GUIDE_EXTENSION: &str = ".md";

static GUIDE_MATCHER: LazyLock<GlobMatcher> = LazyLock::new(|| {
    Glob::new(GUIDE_PATTERN)
        .expect("guide pattern is a valid glob")
        .compile_matcher()
});

/// Candidate guide documents directly inside `dir`.
///
/// Behavior:
/// - only direct children are considered, no recursion
/// - hidden entries (leading `.`) are ignored
/// - anything whose name matches `*.md` is returned, directories included,
///   so that the loader reports them as unreadable rather than silently
///   dropping them
/// - output is sorted by file name
pub fn discover_guides(dir: &Utf8Path) -> Vec<Utf8PathBuf> {
    let mut out = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                warn!("Could not list {}: {}", dir, err);
                continue;
            }
        };

        let Some(path) = pathbuf_to_utf8(entry.into_path()) else {
            debug!("skipping guide candidate with a non UTF-8 name");
            continue;
        };
        let Some(file_name) = path.file_name() else {
            continue;
        };
        if file_name.starts_with('.') || !GUIDE_MATCHER.is_match(file_name) {
            continue;
        }

        out.push(path);
    }

    out
}

/// Document name for a guide file: the file name minus its `.md` suffix.
pub fn guide_name(file_name: &str) -> Option<&str> {
    file_name
        .strip_suffix(GUIDE_EXTENSION)
        .filter(|name| !name.is_empty())
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
