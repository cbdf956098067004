//! `notegen transcribe` command - download transcripts for listed URLs
//!
//! Per-URL failures are reported and the batch continues; Ctrl-C stops the
//! batch cleanly between URLs.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::cli::{Cli, OutputFormat};
use notegen_core::error::Result;
use notegen_core::project::Project;
use notegen_core::sanitize::sanitize_title;
use notegen_core::transcript::{transcript_exists, transcript_path, write_transcript};
use notegen_core::video::{parse_video_url, HttpVideoSource, VideoSource};
use notegen_core::websites::read_websites;

/// Counts for one transcribe run
#[derive(Debug, Default, Serialize)]
pub struct BatchSummary {
    /// Transcripts written this run
    pub processed: usize,
    /// URLs skipped because a non-empty transcript already existed
    pub skipped: usize,
    /// URLs that failed (bad URL, metadata error, missing captions)
    pub failed: usize,
    /// True when the batch was interrupted before finishing
    pub interrupted: bool,
}

/// Execute the transcribe command
pub fn execute(cli: &Cli, root: &Path, websites_md: &Path, lang: &str) -> Result<()> {
    let project = Project::at(root);
    let websites_path = if websites_md.is_absolute() {
        websites_md.to_path_buf()
    } else {
        root.join(websites_md)
    };

    let urls = read_websites(&websites_path)?;
    let source = HttpVideoSource::new(lang);

    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);
    let _ = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    });

    let summary = run_batch(cli, &project, &source, &urls, &interrupted)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "status": "ok",
                "processed": summary.processed,
                "skipped": summary.skipped,
                "failed": summary.failed,
                "interrupted": summary.interrupted,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("\n{}", summary_line(&summary));
            }
        }
    }

    Ok(())
}

/// One-line batch outcome for human output
fn summary_line(summary: &BatchSummary) -> String {
    if summary.interrupted {
        format!(
            "Interrupted, {} transcripts generated before stopping",
            summary.processed
        )
    } else {
        format!(
            "All URLs processed, {} transcripts generated",
            summary.processed
        )
    }
}

/// Process each URL in order, stopping between URLs when interrupted
fn run_batch(
    cli: &Cli,
    project: &Project,
    source: &dyn VideoSource,
    urls: &[String],
    interrupted: &AtomicBool,
) -> Result<BatchSummary> {
    let human = cli.format == OutputFormat::Human && !cli.quiet;
    let mut summary = BatchSummary::default();

    for url in urls {
        if interrupted.load(Ordering::SeqCst) {
            warn!("transcribe interrupted, stopping before remaining URLs");
            summary.interrupted = true;
            break;
        }

        if human {
            println!("Processing: {}", url);
        }

        let id = match parse_video_url(url) {
            Ok(id) => id,
            Err(e) => {
                eprintln!("  skipping {}: {}", url, e);
                summary.failed += 1;
                continue;
            }
        };

        let metadata = match source.metadata(&id) {
            Ok(metadata) => metadata,
            Err(e) => {
                eprintln!("  metadata error for {}: {}", url, e);
                summary.failed += 1;
                continue;
            }
        };

        let slug = sanitize_title(&metadata.title);
        let path = transcript_path(project, &slug);
        if transcript_exists(&path) {
            if human {
                println!(
                    "  transcript already exists and is not empty, skipping: {}",
                    path.display()
                );
            }
            summary.skipped += 1;
            continue;
        }

        let text = match source.transcript(&id) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("  transcript error for {}: {}", url, e);
                summary.failed += 1;
                continue;
            }
        };

        write_transcript(project, &metadata, &slug, &text)?;
        summary.processed += 1;
    }

    Ok(summary)
}
