//! nota - LaTeX notes organized as one directory per note, with tag metadata

pub mod cli;
pub mod domain;
pub mod infra;
pub mod repo;
pub mod tools;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_new, handle_remove, handle_search, handle_tag, handle_untag, handle_view},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let notes_dir = config.notes_dir(cli.dir.as_ref());

    match &cli.command {
        Command::New(args) => handle_new(args, &notes_dir, &config),
        Command::Tag(args) => handle_tag(args, &notes_dir),
        Command::Untag(args) => handle_untag(args, &notes_dir),
        Command::Rm(args) => handle_remove(args, &notes_dir),
        Command::Search(args) => handle_search(args, &notes_dir),
        Command::View(args) => handle_view(args, &notes_dir, &config),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(args.shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
