//! New note command handler.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::parse_tags;
use crate::cli::NewArgs;
use crate::cli::config::Config;
use crate::repo;
use crate::tools::Compiler;

pub fn handle_new(args: &NewArgs, notes_dir: &Path, config: &Config) -> Result<()> {
    if !notes_dir.exists() {
        bail!("notes directory does not exist: {}", notes_dir.display());
    }

    let tags = parse_tags(&args.tags)?;
    let compiler = Compiler::new(config.compiler());

    let note = repo::create(notes_dir, &args.name, &args.template, &tags, &compiler)
        .with_context(|| format!("failed to create note '{}'", args.name))?;

    println!("Created: {}", note.name());
    println!("  {}", note.dir().display());

    Ok(())
}
