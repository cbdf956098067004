//! Glossary store: the flat keyword list file
//!
//! The glossary is the persisted set of keywords currently referenced by
//! the notes corpus. On disk it is one keyword per line, no blanks, sorted
//! lexicographically on write. Reads accept any order and collapse
//! duplicate lines silently.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{NotegenError, Result};

/// The glossary file, bound to its path
#[derive(Debug, Clone)]
pub struct Glossary {
    path: PathBuf,
}

impl Glossary {
    /// Bind a glossary to the given file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Glossary { path: path.into() }
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored keyword set.
    ///
    /// An absent file is created empty and yields an empty set. Lines are
    /// trimmed, blank lines dropped, duplicates collapsed.
    pub fn load(&self) -> Result<BTreeSet<String>> {
        if !self.path.exists() {
            fs::write(&self.path, "").map_err(|e| {
                NotegenError::io_operation("create", self.path.display(), e)
            })?;
            return Ok(BTreeSet::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| NotegenError::io_operation("read", self.path.display(), e))?;

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Persist the keyword set, one per line in lexicographic order.
    ///
    /// Writes to a sibling temp file and renames it into place so a
    /// concurrent reader never observes a partially written glossary.
    pub fn save(&self, keywords: &BTreeSet<String>) -> Result<()> {
        let temp_path = self.path.with_extension("md.tmp");

        let write_result = (|| -> std::io::Result<()> {
            let mut writer = BufWriter::new(File::create(&temp_path)?);
            for keyword in keywords {
                writeln!(writer, "{}", keyword)?;
            }
            writer.flush()
        })();

        if let Err(e) = write_result {
            // Leave the previous glossary untouched
            let _ = fs::remove_file(&temp_path);
            return Err(NotegenError::io_operation("write", self.path.display(), e));
        }

        fs::rename(&temp_path, &self.path)
            .map_err(|e| NotegenError::io_operation("replace", self.path.display(), e))?;

        tracing::debug!(path = %self.path.display(), count = keywords.len(), "glossary saved");
        Ok(())
    }
}
