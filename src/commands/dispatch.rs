//! Command dispatch logic for notegen

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use notegen_core::error::{NotegenError, Result};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    // Determine the project root
    let root = cli
        .root
        .clone()
        .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if cli.verbose {
        eprintln!("resolve_root: {:?}", start.elapsed());
    }

    match &cli.command {
        None => Err(NotegenError::UsageError(
            "no command specified (see --help)".to_string(),
        )),

        Some(Commands::Init) => commands::init::execute(cli, &root),

        Some(Commands::Transcribe { websites_md, lang }) => {
            commands::transcribe::execute(cli, &root, websites_md, lang)
        }

        Some(Commands::Sync) => commands::sync::execute(cli, &root),

        Some(Commands::Status) => commands::status::execute(cli, &root),
    }
}
