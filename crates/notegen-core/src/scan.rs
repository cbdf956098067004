//! Note scanning for `[[Keyword]]` wiki-links
//!
//! Scans every markdown note at the top level of the notes directory and
//! collects the distinct keywords referenced across the corpus. Keyword
//! identity is exact-string, case-sensitive, whitespace-trimmed.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::Result;

/// Extension of files eligible for keyword scanning
const NOTE_EXTENSION: &str = "md";

/// Outcome of scanning the notes directory
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Distinct keywords referenced across all notes
    pub keywords: BTreeSet<String>,
    /// Number of note files successfully scanned
    pub files_scanned: usize,
    /// Number of note files skipped because they could not be read
    pub files_skipped: usize,
}

/// Scan the notes directory for wiki-link keywords.
///
/// A missing directory is created and treated as an empty corpus so the
/// first sync on a fresh project succeeds. Unreadable files are skipped and
/// counted; one corrupt note must not abort the whole scan.
#[tracing::instrument(skip(dir), fields(dir = %dir.display()))]
pub fn scan_notes(dir: &Path) -> Result<ScanOutcome> {
    let mut outcome = ScanOutcome::default();

    if !dir.exists() {
        fs::create_dir_all(dir)?;
        return Ok(outcome);
    }

    let wiki_link_re = match Regex::new(r"\[\[([^\]]+)\]\]") {
        Ok(re) => re,
        Err(e) => {
            warn!(error = %e, "Failed to compile wiki link regex");
            return Ok(outcome);
        }
    };

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(NOTE_EXTENSION) {
            continue;
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping unreadable note");
                outcome.files_skipped += 1;
                continue;
            }
        };

        outcome.files_scanned += 1;
        for cap in wiki_link_re.captures_iter(&content) {
            let keyword = cap[1].trim();
            if keyword.is_empty() {
                continue;
            }
            outcome.keywords.insert(keyword.to_string());
        }
    }

    debug!(
        keywords = outcome.keywords.len(),
        files_scanned = outcome.files_scanned,
        files_skipped = outcome.files_skipped,
        "scan complete"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_directory_is_empty_corpus() {
        let dir = tempdir().unwrap();
        let notes = dir.path().join("notes");

        let outcome = scan_notes(&notes).unwrap();

        assert!(outcome.keywords.is_empty());
        assert_eq!(outcome.files_scanned, 0);
        // Created as a side effect for first-run use
        assert!(notes.is_dir());
    }

    #[test]
    fn test_collects_distinct_keywords_across_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "see [[Bayes]] and [[ELBO]]").unwrap();
        fs::write(dir.path().join("b.md"), "more on [[Bayes]]").unwrap();

        let outcome = scan_notes(dir.path()).unwrap();

        let keywords: Vec<&str> = outcome.keywords.iter().map(|s| s.as_str()).collect();
        assert_eq!(keywords, vec!["Bayes", "ELBO"]);
        assert_eq!(outcome.files_scanned, 2);
        assert_eq!(outcome.files_skipped, 0);
    }

    #[test]
    fn test_trims_whitespace_inside_brackets() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "[[ Trimmed Example ]]").unwrap();

        let outcome = scan_notes(dir.path()).unwrap();

        assert!(outcome.keywords.contains("Trimmed Example"));
        assert_eq!(outcome.keywords.len(), 1);
    }

    #[test]
    fn test_discards_empty_spans() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "[[   ]] and [[Real]]").unwrap();

        let outcome = scan_notes(dir.path()).unwrap();

        let keywords: Vec<&str> = outcome.keywords.iter().map(|s| s.as_str()).collect();
        assert_eq!(keywords, vec!["Real"]);
    }

    #[test]
    fn test_ignores_non_markdown_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "[[NotANote]]").unwrap();
        fs::write(dir.path().join("b.md"), "[[Note]]").unwrap();

        let outcome = scan_notes(dir.path()).unwrap();

        assert!(!outcome.keywords.contains("NotANote"));
        assert!(outcome.keywords.contains("Note"));
        assert_eq!(outcome.files_scanned, 1);
    }

    #[test]
    fn test_keyword_identity_is_case_sensitive() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "[[Graph]] vs [[graph]]").unwrap();

        let outcome = scan_notes(dir.path()).unwrap();

        assert_eq!(outcome.keywords.len(), 2);
    }

    #[test]
    fn test_undecodable_file_skipped_and_counted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("binary.md"), [0xff, 0xfe, 0x00, 0xff]).unwrap();
        fs::write(dir.path().join("open.md"), "[[Visible]]").unwrap();

        let outcome = scan_notes(dir.path()).unwrap();

        assert!(outcome.keywords.contains("Visible"));
        assert_eq!(outcome.keywords.len(), 1);
        assert_eq!(outcome.files_scanned, 1);
        assert_eq!(outcome.files_skipped, 1);
    }
}
