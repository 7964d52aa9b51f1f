//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::tools::Viewer;
use output::OutputFormat;

/// nota - LaTeX notes organized as one directory per note, with tag metadata
#[derive(Parser, Debug)]
#[command(name = "nota", version, about, long_about = None)]
pub struct Cli {
    /// Notes directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a note from a template
    #[command(alias = "create")]
    New(NewArgs),

    /// Add tags to a note
    #[command(alias = "add-tag")]
    Tag(TagArgs),

    /// Remove tags from a note
    #[command(alias = "remove-tag")]
    Untag(TagArgs),

    /// Remove a note and everything inside it
    #[command(alias = "remove")]
    Rm(RmArgs),

    /// List notes whose tags contain every filter tag
    Search(SearchArgs),

    /// Open a note's compiled output, rebuilding it if stale
    View(ViewArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note name (becomes the directory name)
    pub name: String,

    /// Template to copy the source from (name or path; `.tex` is
    /// appended when missing)
    #[arg(short = 'T', long, default_value = "default")]
    pub template: String,

    /// Initial tags, comma-separated or repeated
    #[arg(short, long = "tags", value_delimiter = ',', action = ArgAction::Append)]
    pub tags: Vec<String>,
}

/// Arguments for the `tag` and `untag` commands
#[derive(Parser, Debug)]
pub struct TagArgs {
    /// Note name
    pub name: String,

    /// Tags, comma-separated
    #[arg(value_delimiter = ',', required = true)]
    pub tags: Vec<String>,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Note name
    pub name: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Only list notes carrying every one of these tags
    #[arg(short = 't', long = "filter", value_delimiter = ',', action = ArgAction::Append)]
    pub filter: Vec<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `view` command
#[derive(Parser, Debug)]
pub struct ViewArgs {
    /// Note name; without it the current directory is taken as the note
    pub name: Option<String>,

    /// Viewer backend (falls back to config, then zathura)
    #[arg(short, long, value_enum)]
    pub backend: Option<Viewer>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
