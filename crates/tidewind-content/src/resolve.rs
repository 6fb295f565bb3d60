//! Content-source resolution.
//!
//! Turns the `content.files` glob list into a concrete, ordered list of files.
//! Patterns are anchored at the config file's directory when
//! `content.relative` is set, and at the working directory otherwise.

use crate::error::{ContentError, Result};
use glob::{MatchOptions, Pattern};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tidewind_core::{ContentConfig, LoadedConfig};
use tracing::{debug, info, warn};

/// Prefix marking an exclusion pattern.
const NEGATION_PREFIX: char = '!';

/// Directory the patterns of `content` are resolved against.
#[must_use]
pub fn anchor_dir(content: &ContentConfig, config_dir: &Path, cwd: &Path) -> PathBuf {
    if content.relative {
        if config_dir.is_absolute() {
            config_dir.to_path_buf()
        } else {
            cwd.join(config_dir)
        }
    } else {
        cwd.to_path_buf()
    }
}

/// Resolve content sources for a loaded config.
///
/// # Errors
/// Returns `InvalidPattern` if any pattern is malformed.
pub fn resolve_loaded(loaded: &LoadedConfig, cwd: &Path) -> Result<Vec<PathBuf>> {
    resolve_content(&loaded.config.content, loaded.config_dir(), cwd)
}

/// Resolve content sources against the process working directory.
///
/// # Errors
/// Returns error if the working directory cannot be read or any pattern is
/// malformed.
pub fn resolve_from_current_dir(loaded: &LoadedConfig) -> Result<Vec<PathBuf>> {
    let cwd = std::env::current_dir()?;
    resolve_loaded(loaded, &cwd)
}

/// Expand `content.files` into a deduplicated, order-stable file list.
///
/// Within a pattern, files come in the lexical order the filesystem walk
/// produces; across patterns, the first occurrence of a path wins. A pattern
/// that matches nothing contributes nothing. Patterns starting with `!`
/// remove matching paths from the final list.
///
/// # Errors
/// Returns `InvalidPattern` if any pattern is malformed.
pub fn resolve_content(
    content: &ContentConfig,
    config_dir: &Path,
    cwd: &Path,
) -> Result<Vec<PathBuf>> {
    let mut anchor = anchor_dir(content, config_dir, cwd);
    if !anchor.is_absolute() {
        anchor = std::env::current_dir()?.join(anchor);
    }

    let mut includes = Vec::new();
    let mut excludes = Vec::new();

    for raw in &content.files {
        if let Some(negated) = raw.strip_prefix(NEGATION_PREFIX) {
            let anchored = anchor_pattern(&anchor, negated);
            let pattern = Pattern::new(&anchored).map_err(|err| invalid(raw, &err))?;
            excludes.push(pattern);
        } else {
            let anchored = anchor_pattern(&anchor, raw);
            Pattern::new(&anchored).map_err(|err| invalid(raw, &err))?;
            includes.push((raw, anchored));
        }
    }

    let exclude_options = MatchOptions {
        require_literal_separator: true,
        ..MatchOptions::new()
    };

    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for (raw, anchored) in includes {
        let mut matched = 0usize;
        let entries = glob::glob(&anchored).map_err(|err| invalid(raw, &err))?;

        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    warn!(pattern = %raw, error = %e, "skipping unreadable path");
                    continue;
                }
            };

            if !path.is_file() {
                continue;
            }
            if excludes
                .iter()
                .any(|pattern| pattern.matches_path_with(&path, exclude_options))
            {
                debug!(path = %path.display(), "excluded by negated pattern");
                continue;
            }

            matched += 1;
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }

        if matched == 0 {
            debug!(pattern = %raw, anchor = %anchor.display(), "pattern matched no files");
        }
    }

    info!(
        patterns = content.files.len(),
        files = files.len(),
        anchor = %anchor.display(),
        "resolved content sources"
    );

    Ok(files)
}

/// Join a user pattern onto the anchor, escaping the anchor itself.
fn anchor_pattern(anchor: &Path, pattern: &str) -> String {
    if Path::new(pattern).is_absolute() {
        return pattern.to_string();
    }

    let mut relative = pattern;
    while let Some(rest) = relative.strip_prefix("./") {
        relative = rest;
    }

    let anchor = Pattern::escape(&anchor.to_string_lossy());
    format!("{}/{}", anchor.trim_end_matches('/'), relative)
}

fn invalid(pattern: &str, err: &glob::PatternError) -> ContentError {
    ContentError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: err.msg.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().expect("has parent")).expect("create dirs");
        fs::write(&path, "").expect("write file");
        path
    }

    fn content(relative: bool, files: &[&str]) -> ContentConfig {
        ContentConfig {
            relative,
            files: files.iter().map(|f| (*f).to_string()).collect(),
        }
    }

    #[test]
    fn test_anchor_dir() {
        let relative = content(true, &[]);
        let absolute = content(false, &[]);
        let cwd = Path::new("/work");

        assert_eq!(anchor_dir(&relative, Path::new("/proj"), cwd), Path::new("/proj"));
        assert_eq!(anchor_dir(&relative, Path::new("site"), cwd), Path::new("/work/site"));
        assert_eq!(anchor_dir(&absolute, Path::new("/proj"), cwd), Path::new("/work"));
    }

    #[test]
    fn test_anchor_pattern_strips_dot_slash() {
        let anchor = Path::new("/proj");
        assert_eq!(anchor_pattern(anchor, "./**/src/**/*.rs"), "/proj/**/src/**/*.rs");
        assert_eq!(anchor_pattern(anchor, "*.html"), "/proj/*.html");
        assert_eq!(anchor_pattern(anchor, "/abs/*.html"), "/abs/*.html");
    }

    #[test]
    fn test_anchor_pattern_escapes_anchor() {
        let anchor = Path::new("/proj[1]");
        assert_eq!(anchor_pattern(anchor, "*.html"), "/proj[[]1[]]/*.html");
    }

    #[test]
    fn test_resolves_reference_patterns() {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path();
        let index = touch(root, "index.html");
        let app = touch(root, "app/src/main.rs");
        let nested = touch(root, "crates/ui/src/view/button.rs");
        touch(root, "app/build.rs");
        touch(root, "docs/readme.md");

        let files = resolve_content(
            &content(true, &["*.html", "./**/src/**/*.rs"]),
            root,
            Path::new("/nonexistent"),
        )
        .expect("resolve");

        assert_eq!(files, vec![index, app, nested]);
    }

    #[test]
    fn test_relative_flag_switches_anchor() {
        let tmp = TempDir::new().expect("create temp dir");
        let proj = tmp.path().join("proj");
        let other = tmp.path().join("other");
        let proj_file = touch(&proj, "index.html");
        let other_file = touch(&other, "page.html");

        let anchored_at_config =
            resolve_content(&content(true, &["*.html"]), &proj, &other).expect("resolve");
        assert_eq!(anchored_at_config, vec![proj_file]);

        let anchored_at_cwd =
            resolve_content(&content(false, &["*.html"]), &proj, &other).expect("resolve");
        assert_eq!(anchored_at_cwd, vec![other_file]);
    }

    #[test]
    fn test_duplicates_are_resolved_once() {
        let tmp = TempDir::new().expect("create temp dir");
        let a = touch(tmp.path(), "a.html");
        let b = touch(tmp.path(), "b.html");

        let files = resolve_content(
            &content(true, &["b.html", "*.html", "*.html"]),
            tmp.path(),
            tmp.path(),
        )
        .expect("resolve");

        assert_eq!(files, vec![b, a]);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let tmp = TempDir::new().expect("create temp dir");
        touch(tmp.path(), "x.html");
        touch(tmp.path(), "src/lib.rs");
        let config = content(true, &["**/*"]);

        let first = resolve_content(&config, tmp.path(), tmp.path()).expect("resolve");
        let second = resolve_content(&config, tmp.path(), tmp.path()).expect("resolve");
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_no_match_and_empty_list_are_not_errors() {
        let tmp = TempDir::new().expect("create temp dir");
        let none = resolve_content(&content(true, &["*.vue"]), tmp.path(), tmp.path())
            .expect("resolve");
        assert!(none.is_empty());

        let empty = resolve_content(&content(true, &[]), tmp.path(), tmp.path()).expect("resolve");
        assert!(empty.is_empty());
    }

    #[test]
    fn test_malformed_pattern_is_an_error() {
        let tmp = TempDir::new().expect("create temp dir");
        let err = resolve_content(&content(true, &["src/[.rs"]), tmp.path(), tmp.path())
            .unwrap_err();
        assert!(
            matches!(err, ContentError::InvalidPattern { ref pattern, .. } if pattern == "src/[.rs")
        );

        let err = resolve_content(&content(true, &["!***"]), tmp.path(), tmp.path()).unwrap_err();
        assert!(matches!(err, ContentError::InvalidPattern { .. }));
    }

    #[test]
    fn test_negated_patterns_exclude() {
        let tmp = TempDir::new().expect("create temp dir");
        let keep = touch(tmp.path(), "src/app.rs");
        touch(tmp.path(), "src/generated/bindings.rs");

        let files = resolve_content(
            &content(true, &["!src/generated/**", "src/**/*.rs"]),
            tmp.path(),
            tmp.path(),
        )
        .expect("resolve");

        assert_eq!(files, vec![keep]);
    }

    #[test]
    fn test_directories_are_skipped() {
        let tmp = TempDir::new().expect("create temp dir");
        fs::create_dir_all(tmp.path().join("pages.html")).expect("create dir");
        let file = touch(tmp.path(), "index.html");

        let files =
            resolve_content(&content(true, &["*.html"]), tmp.path(), tmp.path()).expect("resolve");
        assert_eq!(files, vec![file]);
    }
}
