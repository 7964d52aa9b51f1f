//! Output format types and table rendering for CLI commands.

use crate::domain::Tag;
use crate::repo::SearchMatch;
use clap::ValueEnum;
use colored::Colorize;
use comfy_table::{Table, presets::UTF8_FULL};
use serde::Serialize;
use std::collections::BTreeSet;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Renders search matches as a table, highlighting the filtered tags.
pub fn search_table(matches: &[SearchMatch], filter: &BTreeSet<Tag>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Tags"]);

    for m in matches {
        let tags = m
            .tags
            .iter()
            .map(|tag| highlight_tag(tag, filter))
            .collect::<Vec<_>>()
            .join(",");
        table.add_row(vec![m.name.clone(), tags]);
    }

    table
}

fn highlight_tag(tag: &Tag, filter: &BTreeSet<Tag>) -> String {
    if filter.contains(tag) {
        tag.as_str().green().bold().to_string()
    } else {
        tag.as_str().to_string()
    }
}
