//! Project layout for notegen
//!
//! A notegen project is a root directory containing:
//! - `notes/` - markdown notes with `[[Keyword]]` wiki-links
//! - `transcripts/` - downloaded transcript text files
//! - `keywords.md` - flat glossary, one keyword per line
//! - `websites.md` - list of video URLs to transcribe

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Directory holding markdown notes
pub const NOTES_DIR: &str = "notes";
/// Directory holding downloaded transcripts
pub const TRANSCRIPTS_DIR: &str = "transcripts";
/// Flat glossary file
pub const KEYWORDS_FILE: &str = "keywords.md";
/// URL list file
pub const WEBSITES_FILE: &str = "websites.md";
/// Header written to a freshly created websites.md
pub const WEBSITES_HEADER: &str = "# Websites to process\n";

/// A notegen project rooted at a directory
#[derive(Debug, Clone)]
pub struct Project {
    /// Root path of the project
    root: PathBuf,
}

impl Project {
    /// Reference an existing (or prospective) project at the given root.
    ///
    /// Does not touch the filesystem; individual operations create the
    /// pieces they need on first use.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Project { root: root.into() }
    }

    /// Initialize the project layout, creating missing directories and files.
    ///
    /// Safe to run multiple times: existing directories and files are left
    /// untouched.
    #[tracing::instrument(skip(root), fields(root = %root.display()))]
    pub fn init(root: &Path) -> Result<Self> {
        let project = Project::at(root);

        fs::create_dir_all(project.notes_dir())?;
        fs::create_dir_all(project.transcripts_dir())?;

        let keywords = project.keywords_file();
        if !keywords.exists() {
            fs::write(&keywords, "")?;
        }

        let websites = project.websites_file();
        if !websites.exists() {
            fs::write(&websites, WEBSITES_HEADER)?;
        }

        tracing::debug!("project layout initialized");
        Ok(project)
    }

    /// Root path of the project
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the notes directory
    pub fn notes_dir(&self) -> PathBuf {
        self.root.join(NOTES_DIR)
    }

    /// Path to the transcripts directory
    pub fn transcripts_dir(&self) -> PathBuf {
        self.root.join(TRANSCRIPTS_DIR)
    }

    /// Path to the glossary file
    pub fn keywords_file(&self) -> PathBuf {
        self.root.join(KEYWORDS_FILE)
    }

    /// Path to the websites list file
    pub fn websites_file(&self) -> PathBuf {
        self.root.join(WEBSITES_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_layout() {
        let dir = tempdir().unwrap();
        let project = Project::init(dir.path()).unwrap();

        assert!(project.notes_dir().is_dir());
        assert!(project.transcripts_dir().is_dir());
        assert!(project.keywords_file().is_file());
        assert!(project.websites_file().is_file());

        let websites = fs::read_to_string(project.websites_file()).unwrap();
        assert_eq!(websites, WEBSITES_HEADER);
        let keywords = fs::read_to_string(project.keywords_file()).unwrap();
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_init_idempotent_preserves_content() {
        let dir = tempdir().unwrap();
        let project = Project::init(dir.path()).unwrap();

        fs::write(project.keywords_file(), "Existing\n").unwrap();
        fs::write(project.websites_file(), "https://youtu.be/abc\n").unwrap();

        Project::init(dir.path()).unwrap();

        assert_eq!(
            fs::read_to_string(project.keywords_file()).unwrap(),
            "Existing\n"
        );
        assert_eq!(
            fs::read_to_string(project.websites_file()).unwrap(),
            "https://youtu.be/abc\n"
        );
    }
}
