//! `notegen init` command - create the project layout
//!
//! Idempotent: safe to run multiple times, existing files are untouched.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use notegen_core::error::Result;
use notegen_core::project::Project;

/// Execute the init command
pub fn execute(cli: &Cli, root: &Path) -> Result<()> {
    let project = Project::init(root)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "status": "ok",
                "root": project.root().display().to_string(),
                "message": "Project initialized"
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Project initialized at {}", project.root().display());
            }
        }
    }

    Ok(())
}
