//! Keyword reconciliation between notes and the glossary
//!
//! The glossary is a derived view of the notes corpus: after every sync,
//! the stored keyword set equals exactly the set of keywords referenced by
//! the notes. Keywords no longer referenced are pruned, not archived.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::Result;
use crate::glossary::Glossary;
use crate::project::Project;
use crate::scan::scan_notes;

/// Result of reconciling the referenced set against the stored set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Keywords newly observed in notes, not yet in the glossary
    pub added: Vec<String>,
    /// Keywords in the glossary no longer referenced by any note
    pub removed: Vec<String>,
    /// The final glossary content
    pub final_keywords: Vec<String>,
}

/// Compute the added, removed, and final keyword sets.
///
/// `added = referenced − stored`, `removed = stored − referenced`, and the
/// final set is `(stored ∪ added) − removed`, which reduces to `referenced`
/// for all inputs. Each output is sorted lexicographically.
pub fn reconcile(referenced: &BTreeSet<String>, stored: &BTreeSet<String>) -> Reconciliation {
    let added: Vec<String> = referenced.difference(stored).cloned().collect();
    let removed: Vec<String> = stored.difference(referenced).cloned().collect();
    let final_keywords: Vec<String> = referenced.iter().cloned().collect();

    Reconciliation {
        added,
        removed,
        final_keywords,
    }
}

/// Structured result of a synchronization run
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// Keywords appended to the glossary this run, sorted
    pub added: Vec<String>,
    /// Keywords pruned from the glossary this run, sorted
    pub removed: Vec<String>,
    /// Full glossary content after the run, sorted
    pub final_keywords: Vec<String>,
    /// Note files scanned
    pub files_scanned: usize,
    /// Note files skipped because they could not be read
    pub files_skipped: usize,
}

/// Synchronize the glossary with the notes corpus.
///
/// Scans `notes/` for `[[Keyword]]` references, loads the glossary,
/// reconciles the two sets, and rewrites the glossary. If the write fails
/// the whole call fails and no added/removed claims are made; the previous
/// glossary stays in place.
#[tracing::instrument(skip(project), fields(root = %project.root().display()))]
pub fn sync_keywords(project: &Project) -> Result<SyncReport> {
    let scan = scan_notes(&project.notes_dir())?;
    let glossary = Glossary::at(project.keywords_file());
    let stored = glossary.load()?;

    let reconciliation = reconcile(&scan.keywords, &stored);

    glossary.save(&scan.keywords)?;

    tracing::info!(
        added = reconciliation.added.len(),
        removed = reconciliation.removed.len(),
        total = reconciliation.final_keywords.len(),
        "keywords synchronized"
    );

    Ok(SyncReport {
        added: reconciliation.added,
        removed: reconciliation.removed,
        final_keywords: reconciliation.final_keywords,
        files_scanned: scan.files_scanned,
        files_skipped: scan.files_skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_reconcile_first_run() {
        let result = reconcile(&set(&["A", "B"]), &set(&[]));

        assert_eq!(result.added, vec!["A", "B"]);
        assert!(result.removed.is_empty());
        assert_eq!(result.final_keywords, vec!["A", "B"]);
    }

    #[test]
    fn test_reconcile_pruning() {
        let result = reconcile(&set(&["A"]), &set(&["A", "B", "C"]));

        assert!(result.added.is_empty());
        assert_eq!(result.removed, vec!["B", "C"]);
        assert_eq!(result.final_keywords, vec!["A"]);
    }

    #[test]
    fn test_reconcile_empty_inputs() {
        let result = reconcile(&set(&[]), &set(&[]));

        assert!(result.added.is_empty());
        assert!(result.removed.is_empty());
        assert!(result.final_keywords.is_empty());
    }

    #[test]
    fn test_reconcile_set_identity() {
        // (stored ∪ added) − removed must equal referenced, and
        // added/removed must be disjoint
        let referenced = set(&["A", "C", "E"]);
        let stored = set(&["B", "C", "D"]);

        let result = reconcile(&referenced, &stored);

        let mut rebuilt: BTreeSet<String> = stored.clone();
        rebuilt.extend(result.added.iter().cloned());
        for removed in &result.removed {
            rebuilt.remove(removed);
        }
        assert_eq!(rebuilt, referenced);

        let added: BTreeSet<&String> = result.added.iter().collect();
        assert!(!result.removed.iter().any(|k| added.contains(k)));
    }

    #[test]
    fn test_sync_first_run() {
        let dir = tempdir().unwrap();
        let project = Project::init(dir.path()).unwrap();
        fs::write(project.notes_dir().join("a.md"), "[[A]] and [[B]] and [[A]]").unwrap();

        let report = sync_keywords(&project).unwrap();

        assert_eq!(report.added, vec!["A", "B"]);
        assert!(report.removed.is_empty());
        assert_eq!(report.final_keywords, vec!["A", "B"]);
        assert_eq!(
            fs::read_to_string(project.keywords_file()).unwrap(),
            "A\nB\n"
        );
    }

    #[test]
    fn test_sync_idempotent() {
        let dir = tempdir().unwrap();
        let project = Project::init(dir.path()).unwrap();
        fs::write(project.notes_dir().join("a.md"), "[[X]] [[Y]]").unwrap();

        sync_keywords(&project).unwrap();
        let first = fs::read_to_string(project.keywords_file()).unwrap();

        let report = sync_keywords(&project).unwrap();
        let second = fs::read_to_string(project.keywords_file()).unwrap();

        assert!(report.added.is_empty());
        assert!(report.removed.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_sync_prunes_stale_entries() {
        let dir = tempdir().unwrap();
        let project = Project::init(dir.path()).unwrap();
        fs::write(project.keywords_file(), "A\nB\nC\n").unwrap();
        fs::write(project.notes_dir().join("a.md"), "only [[A]] remains").unwrap();

        let report = sync_keywords(&project).unwrap();

        assert!(report.added.is_empty());
        assert_eq!(report.removed, vec!["B", "C"]);
        assert_eq!(report.final_keywords, vec!["A"]);
        assert_eq!(fs::read_to_string(project.keywords_file()).unwrap(), "A\n");
    }

    #[test]
    fn test_sync_save_failure_leaves_glossary_untouched() {
        let dir = tempdir().unwrap();
        let project = Project::init(dir.path()).unwrap();
        fs::write(project.keywords_file(), "Old\n").unwrap();
        fs::write(project.notes_dir().join("a.md"), "[[A]] [[B]]").unwrap();
        // Block the temp path the save writes through
        fs::create_dir_all(dir.path().join("keywords.md.tmp")).unwrap();

        let result = sync_keywords(&project);

        assert!(result.is_err());
        assert_eq!(
            fs::read_to_string(project.keywords_file()).unwrap(),
            "Old\n"
        );
    }

    #[test]
    fn test_sync_works_without_init() {
        // Fresh directory: no notes/, no keywords.md
        let dir = tempdir().unwrap();
        let project = Project::at(dir.path());

        let report = sync_keywords(&project).unwrap();

        assert!(report.final_keywords.is_empty());
        assert!(project.notes_dir().is_dir());
        assert!(project.keywords_file().is_file());
    }
}
