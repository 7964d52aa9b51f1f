//! Tag and untag command handlers.

use anyhow::{Context, Result};
use std::path::Path;

use super::parse_tags;
use crate::cli::TagArgs;
use crate::domain::Tag;
use crate::repo;
use std::collections::BTreeSet;

pub fn handle_tag(args: &TagArgs, notes_dir: &Path) -> Result<()> {
    let note = repo::locate(notes_dir, &args.name)?;
    let tags = parse_tags(&args.tags)?;

    let result = repo::add_tags(&note, &tags)
        .with_context(|| format!("failed to tag note '{}'", note.name()))?;

    println!("{}: {}", note.name(), join_tags(&result));
    Ok(())
}

pub fn handle_untag(args: &TagArgs, notes_dir: &Path) -> Result<()> {
    let note = repo::locate(notes_dir, &args.name)?;
    let tags = parse_tags(&args.tags)?;

    let result = repo::remove_tags(&note, &tags)
        .with_context(|| format!("failed to untag note '{}'", note.name()))?;

    println!("{}: {}", note.name(), join_tags(&result));
    Ok(())
}

fn join_tags(tags: &BTreeSet<Tag>) -> String {
    if tags.is_empty() {
        return "(no tags)".to_string();
    }
    tags.iter()
        .map(Tag::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
