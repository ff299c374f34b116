//! Shared test utilities for the uiguard workspace.
//!
//! Guide-directory fixtures for the loader and CLI tests, and JSON
//! normalization for comparing reports that carry timestamps.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use tempfile::TempDir;

/// A navigation guide with three bullets behind a heading and some prose.
pub const NAVIGATION_GUIDE: &str = "\
# Navigation

Navigation should feel effortless.

- Use a tab bar for top-level sections
- Keep hierarchies shallow
- Always show where the user is
";

/// An actions guide with a single bullet.
pub const ACTIONS_GUIDE: &str = "\
# Actions

- Make tap targets at least 44x44 points
";

/// A temporary guides directory that is removed on drop.
pub struct GuideFixture {
    dir: TempDir,
    root: Utf8PathBuf,
}

impl GuideFixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 temp path");
        Self { dir, root }
    }

    /// `navigation.md` and `actions.md` with the sample guides.
    pub fn hig() -> Self {
        Self::new()
            .with_file("navigation.md", NAVIGATION_GUIDE)
            .with_file("actions.md", ACTIONS_GUIDE)
    }

    /// Write `contents` at `relative`, creating parent directories.
    pub fn with_file(self, relative: &str, contents: &str) -> Self {
        self.with_bytes(relative, contents.as_bytes())
    }

    pub fn with_bytes(self, relative: &str, contents: &[u8]) -> Self {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, contents).expect("write fixture file");
        self
    }

    pub fn path(&self) -> &Utf8Path {
        &self.root
    }

    pub fn temp_dir(&self) -> &TempDir {
        &self.dir
    }
}

impl Default for GuideFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize non-deterministic JSON fields for report comparison.
///
/// 1. **Root-only**: `tool.version` becomes `"__VERSION__"` when the root
///    object is a report envelope (`schema`, `tool` and `run` keys).
/// 2. **Recursive**: `started_at` and `ended_at` become `"__TIMESTAMP__"` and
///    `duration_ms` becomes `0` at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope =
            obj.contains_key("schema") && obj.contains_key("tool") && obj.contains_key("run");
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "ended_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            if map.contains_key("duration_ms") {
                map.insert("duration_ms".to_string(), Value::Number(0.into()));
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_only_touches_envelope_tool_version() {
        let input = json!({
            "schema": "uiguard.a11y.v1",
            "tool": { "name": "a11y-check", "version": "0.1.0" },
            "run": { "started_at": "2026-01-01T00:00:00Z", "ended_at": "2026-01-01T00:00:01Z", "duration_ms": 12 },
            "issues": [
                { "data": { "tool": { "name": "inner", "version": "9.9.9" } } }
            ]
        });

        let result = normalize_nondeterministic(input);

        assert_eq!(result["tool"]["version"], "__VERSION__");
        assert_eq!(result["tool"]["name"], "a11y-check");
        assert_eq!(result["run"]["started_at"], "__TIMESTAMP__");
        assert_eq!(result["run"]["ended_at"], "__TIMESTAMP__");
        assert_eq!(result["run"]["duration_ms"], 0);
        assert_eq!(result["issues"][0]["data"]["tool"]["version"], "9.9.9");
    }

    #[test]
    fn root_without_envelope_keys_not_normalized() {
        let input = json!({
            "tool": { "name": "other", "version": "2.0.0" },
            "run": { "started_at": "2026-01-01T00:00:00Z" }
        });

        let result = normalize_nondeterministic(input);

        assert_eq!(result["tool"]["version"], "2.0.0");
        assert_eq!(result["run"]["started_at"], "__TIMESTAMP__");
    }

    #[test]
    fn fixture_writes_nested_files() {
        let fixture = GuideFixture::new().with_file("a/b.md", "- x");
        let text = std::fs::read_to_string(fixture.path().join("a/b.md")).expect("read back");
        assert_eq!(text, "- x");
        assert!(fixture.temp_dir().path().exists());
    }

    #[test]
    fn hig_fixture_has_both_guides() {
        let fixture = GuideFixture::hig();
        assert!(fixture.path().join("navigation.md").is_file());
        assert!(fixture.path().join("actions.md").is_file());
    }
}
