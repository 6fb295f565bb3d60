//! Class-candidate extraction.
//!
//! Content files are split into tokens on characters that can never appear
//! inside a utility class. Every surviving token is a *candidate*; whether it
//! names a real utility is decided later by the engine, so extraction errs on
//! the side of keeping too much.

use futures::future::join_all;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// Maximum file size to scan (10MB)
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Longest token still considered a candidate
const MAX_CANDIDATE_LEN: usize = 128;

/// Characters that delimit candidates in markup and source code
static CANDIDATE_SPLIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[\s"'`<>{}();=,]+"#).expect("Candidate split regex is hardcoded and valid")
});

/// Splits text into class candidates.
#[derive(Debug)]
pub struct CandidateExtractor {
    split: Regex,
}

impl CandidateExtractor {
    /// Create an extractor with the default delimiters
    pub fn new() -> Self {
        Self {
            split: CANDIDATE_SPLIT.clone(),
        }
    }

    /// Candidates in `text`, in order of appearance (duplicates included)
    pub fn extract<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.split
            .split(text)
            .map(|token| token.trim_end_matches(['.', ':']))
            .filter(|token| is_candidate(token))
            .collect()
    }
}

impl Default for CandidateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn is_candidate(token: &str) -> bool {
    !token.is_empty()
        && token.len() <= MAX_CANDIDATE_LEN
        && token.chars().any(char::is_alphanumeric)
}

/// Ordered set of unique candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl CandidateSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate; returns false if it was already present
    pub fn insert(&mut self, candidate: &str) -> bool {
        if self.seen.contains(candidate) {
            return false;
        }
        self.seen.insert(candidate.to_string());
        self.order.push(candidate.to_string());
        true
    }

    /// Whether the candidate has been seen
    pub fn contains(&self, candidate: &str) -> bool {
        self.seen.contains(candidate)
    }

    /// Candidates in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<'a> Extend<&'a str> for CandidateSet {
    fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
        for candidate in iter {
            self.insert(candidate);
        }
    }
}

/// Candidates found in one file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileCandidates {
    pub path: PathBuf,
    pub candidates: Vec<String>,
}

/// Read one content file and extract its candidates.
///
/// Oversized and unreadable files are skipped.
pub async fn scan_file(path: &Path, extractor: &CandidateExtractor) -> Option<FileCandidates> {
    let metadata = match fs::metadata(path).await {
        Ok(m) => m,
        Err(e) => {
            debug!("Failed to read metadata for {}: {}", path.display(), e);
            return None;
        }
    };

    if metadata.len() > MAX_FILE_SIZE {
        warn!(
            "Skipping large file ({}MB): {}",
            metadata.len() / 1024 / 1024,
            path.display()
        );
        return None;
    }

    match fs::read_to_string(path).await {
        Ok(contents) => {
            let candidates: Vec<String> = extractor
                .extract(&contents)
                .into_iter()
                .map(str::to_string)
                .collect();
            debug!(path = %path.display(), count = candidates.len(), "scanned content file");
            Some(FileCandidates {
                path: path.to_path_buf(),
                candidates,
            })
        }
        Err(e) => {
            warn!("Failed to read file {:?}: {}", path, e);
            None
        }
    }
}

/// Scan all files concurrently and merge their candidates in file order.
pub async fn scan_files(paths: &[PathBuf], extractor: &CandidateExtractor) -> CandidateSet {
    let results = join_all(paths.iter().map(|path| scan_file(path, extractor))).await;

    let mut set = CandidateSet::new();
    for result in results.into_iter().flatten() {
        set.extend(result.candidates.iter().map(String::as_str));
    }

    info!(
        files = paths.len(),
        candidates = set.len(),
        "extracted class candidates"
    );

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_extract_from_html() {
        let extractor = CandidateExtractor::new();
        let tokens = extractor.extract(r#"<div class="p-2/5 font-content hover:m-4">x</div>"#);
        assert!(tokens.contains(&"p-2/5"));
        assert!(tokens.contains(&"font-content"));
        assert!(tokens.contains(&"hover:m-4"));
        assert!(tokens.contains(&"div"));
    }

    #[test]
    fn test_extract_from_rust_view() {
        let extractor = CandidateExtractor::new();
        let tokens =
            extractor.extract("view! { <main class=\"-mt-0.5 gap-x-2\">{move || count()}</main> }");
        assert!(tokens.contains(&"-mt-0.5"));
        assert!(tokens.contains(&"gap-x-2"));
    }

    #[test]
    fn test_extract_trims_trailing_punctuation() {
        let extractor = CandidateExtractor::new();
        assert_eq!(extractor.extract("use p-4. then"), vec!["use", "p-4", "then"]);
        assert_eq!(extractor.extract("label: w-8"), vec!["label", "w-8"]);
    }

    #[test]
    fn test_extract_drops_symbol_only_tokens() {
        let extractor = CandidateExtractor::new();
        assert!(extractor.extract("-> && || :: ...").is_empty());
    }

    #[test]
    fn test_candidate_set_keeps_first_seen_order() {
        let mut set = CandidateSet::new();
        assert!(set.insert("p-4"));
        assert!(set.insert("m-2"));
        assert!(!set.insert("p-4"));
        set.extend(["w-8", "m-2"]);

        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["p-4", "m-2", "w-8"]);
        assert_eq!(set.len(), 3);
        assert!(set.contains("w-8"));
        assert!(!set.contains("h-8"));
    }

    #[tokio::test]
    async fn test_scan_files_merges_in_order() {
        let tmp = TempDir::new().expect("create temp dir");
        let first = tmp.path().join("a.html");
        let second = tmp.path().join("b.rs");
        std::fs::write(&first, r#"<p class="p-4 m-2">"#).expect("write a");
        std::fs::write(&second, r#"class="m-2 w-8""#).expect("write b");

        let set = scan_files(&[first, second], &CandidateExtractor::new()).await;
        let order: Vec<&str> = set.iter().collect();
        assert_eq!(order, vec!["p", "class", "p-4", "m-2", "w-8"]);
    }

    #[tokio::test]
    async fn test_scan_skips_missing_and_binary_files() {
        let tmp = TempDir::new().expect("create temp dir");
        let missing = tmp.path().join("missing.html");
        let binary = tmp.path().join("logo.png");
        std::fs::write(&binary, [0xff, 0xfe, 0x00, 0x80]).expect("write binary");

        let extractor = CandidateExtractor::new();
        assert!(scan_file(&missing, &extractor).await.is_none());
        assert!(scan_file(&binary, &extractor).await.is_none());
        assert!(scan_files(&[missing, binary], &extractor).await.is_empty());
    }

    #[tokio::test]
    async fn test_scan_skips_oversized_files() {
        let tmp = TempDir::new().expect("create temp dir");
        let big = tmp.path().join("bundle.js");
        let file = std::fs::File::create(&big).expect("create file");
        file.set_len(MAX_FILE_SIZE + 1).expect("grow file");

        assert!(scan_file(&big, &CandidateExtractor::new()).await.is_none());
    }

    #[tokio::test]
    async fn test_scan_no_files() {
        let set = scan_files(&[], &CandidateExtractor::new()).await;
        assert!(set.is_empty());
    }
}
