//! Transcript files and their relationship to notes
//!
//! Transcripts live under `transcripts/<sanitized-title>.txt` with a small
//! front-matter header. A transcript is "synced" once a note with the same
//! stem exists under `notes/`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{NotegenError, Result};
use crate::project::Project;
use crate::video::VideoMetadata;

/// Extension of transcript files
const TRANSCRIPT_EXTENSION: &str = "txt";

/// Path a transcript for the given sanitized title would live at
pub fn transcript_path(project: &Project, sanitized_title: &str) -> PathBuf {
    project
        .transcripts_dir()
        .join(format!("{}.{}", sanitized_title, TRANSCRIPT_EXTENSION))
}

/// True if a non-empty transcript already exists at the path.
///
/// Used to skip re-downloading; a zero-byte file from an interrupted run
/// does not count.
pub fn transcript_exists(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false)
}

/// Write a transcript file with a front-matter header.
///
/// Returns the path written. The transcripts directory is created if
/// missing.
pub fn write_transcript(
    project: &Project,
    metadata: &VideoMetadata,
    sanitized_title: &str,
    text: &str,
) -> Result<PathBuf> {
    fs::create_dir_all(project.transcripts_dir())?;

    let path = transcript_path(project, sanitized_title);
    let content = format!(
        "---\ntitle: {}\nlink: {}\nuploader: {}\nduration: {}\nviews: {}\n---\n\n# {}\n\n{}\n",
        metadata.title,
        metadata.link,
        metadata.uploader.as_deref().unwrap_or(""),
        metadata.duration.as_deref().unwrap_or(""),
        metadata
            .views
            .map(|v| v.to_string())
            .unwrap_or_default(),
        metadata.title,
        text,
    );

    fs::write(&path, content)
        .map_err(|e| NotegenError::io_operation("write", path.display(), e))?;

    tracing::debug!(path = %path.display(), "transcript written");
    Ok(path)
}

/// Whether a note for a given transcript already exists
#[derive(Debug, Clone, Serialize)]
pub struct NoteStatus {
    /// True if the corresponding note exists
    pub exists: bool,
    /// Where the note lives (or would live)
    pub note_path: PathBuf,
}

/// Check whether a note with the transcript's title already exists.
///
/// The transcript path must point at an existing transcript; the note is
/// expected at `notes/<same-stem>.md`.
pub fn note_exists(project: &Project, transcript_path: &Path) -> Result<NoteStatus> {
    if !transcript_path.is_file() {
        return Err(NotegenError::TranscriptNotFound {
            path: transcript_path.to_path_buf(),
        });
    }

    let stem = transcript_path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            NotegenError::UsageError(format!(
                "transcript path has no usable file name: {}",
                transcript_path.display()
            ))
        })?;

    let note_path = project.notes_dir().join(format!("{}.md", stem));
    Ok(NoteStatus {
        exists: note_path.is_file(),
        note_path,
    })
}

/// List the note paths that still need to be written.
///
/// Every `transcripts/*.txt` without a matching `notes/<stem>.md` yields
/// the note path to generate. Creates `notes/` if absent; result is sorted
/// for deterministic output.
pub fn unsynced_transcripts(project: &Project) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(project.notes_dir())?;

    let transcripts_dir = project.transcripts_dir();
    if !transcripts_dir.exists() {
        return Ok(Vec::new());
    }

    let mut pending = Vec::new();
    for entry in WalkDir::new(&transcripts_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(TRANSCRIPT_EXTENSION) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        let note_path = project.notes_dir().join(format!("{}.md", stem));
        if !note_path.is_file() {
            pending.push(note_path);
        }
    }

    pending.sort();
    Ok(pending)
}
