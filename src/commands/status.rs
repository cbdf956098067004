//! `notegen status` command - list transcripts without notes

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use notegen_core::error::Result;
use notegen_core::project::Project;
use notegen_core::transcript::unsynced_transcripts;

/// Execute the status command
pub fn execute(cli: &Cli, root: &Path) -> Result<()> {
    let project = Project::at(root);
    let pending = unsynced_transcripts(&project)?;

    match cli.format {
        OutputFormat::Json => {
            let paths: Vec<String> = pending
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            let output = serde_json::json!({
                "status": "ok",
                "pending_notes": paths,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if cli.quiet {
                return Ok(());
            }
            if pending.is_empty() {
                println!("All transcripts have notes.");
            } else {
                println!("Notes to generate:");
                for path in &pending {
                    println!("  {}", path.display());
                }
            }
        }
    }

    Ok(())
}
