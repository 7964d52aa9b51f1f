//! Search command handler.

use anyhow::Result;
use std::path::Path;

use super::parse_tags;
use crate::cli::SearchArgs;
use crate::cli::output::{Output, OutputFormat, search_table};
use crate::repo;

pub fn handle_search(args: &SearchArgs, notes_dir: &Path) -> Result<()> {
    let filter = parse_tags(&args.filter)?;

    // The engine enumerates in OS order; sort for stable CLI output.
    let mut matches: Vec<_> = repo::search(notes_dir, &filter)?.collect();
    matches.sort_by(|a, b| a.name.cmp(&b.name));

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(&matches))?);
        }
        OutputFormat::Human => {
            if matches.is_empty() {
                println!("No matches found for given tags.");
            } else {
                println!("{}", search_table(&matches, &filter));
            }
        }
    }

    Ok(())
}
