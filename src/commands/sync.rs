//! `notegen sync` command - synchronize keywords.md with the notes corpus
//!
//! Scans notes for `[[Keyword]]` links, reconciles against the glossary,
//! and rewrites the glossary. The JSON output is the stable contract
//! surface: `success` plus sorted `added`/`removed`/`final_keywords`.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use notegen_core::error::Result;
use notegen_core::project::Project;
use notegen_core::sync::sync_keywords;

/// Execute the sync command
pub fn execute(cli: &Cli, root: &Path) -> Result<()> {
    let project = Project::at(root);

    let report = match sync_keywords(&project) {
        Ok(report) => report,
        Err(e) => {
            // The contract surface never claims a partial add/remove: on
            // failure only success=false and the error are reported.
            if cli.format == OutputFormat::Json {
                let output = serde_json::json!({
                    "success": false,
                    "error": e.to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            return Err(e);
        }
    };

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "success": true,
                "added": report.added,
                "removed": report.removed,
                "final_keywords": report.final_keywords,
                "files_scanned": report.files_scanned,
                "files_skipped": report.files_skipped,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "Keywords synchronized: {} added, {} removed, {} total",
                    report.added.len(),
                    report.removed.len(),
                    report.final_keywords.len()
                );
                for keyword in &report.added {
                    println!("  + {}", keyword);
                }
                for keyword in &report.removed {
                    println!("  - {}", keyword);
                }
                if report.files_skipped > 0 {
                    println!("Skipped {} unreadable note file(s)", report.files_skipped);
                }
            }
        }
    }

    Ok(())
}
