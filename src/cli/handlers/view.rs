//! View command handler: the staleness-driven build-then-display flow.

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::ViewArgs;
use crate::cli::config::Config;
use crate::domain::Note;
use crate::repo;
use crate::tools::Compiler;

pub fn handle_view(args: &ViewArgs, notes_dir: &Path, config: &Config) -> Result<()> {
    let note = match &args.name {
        Some(name) => repo::locate(notes_dir, name)?,
        // No name: the current directory is taken as the note root.
        None => {
            let cwd = std::env::current_dir().context("failed to resolve current directory")?;
            Note::from_root(&cwd)?
        }
    };

    let compiler = Compiler::new(config.compiler());
    let artifact = repo::prepare(&note, &compiler)
        .with_context(|| format!("failed to prepare note '{}'", note.name()))?;

    let (viewer, defaulted) = config.backend(args.backend);
    if defaulted {
        println!("Using default backend ({viewer})...");
    }

    viewer
        .display(&artifact)
        .with_context(|| format!("failed to display {}", artifact.display()))?;

    Ok(())
}
