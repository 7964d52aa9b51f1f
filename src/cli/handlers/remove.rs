//! Remove command handler with interactive confirmation.

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::cli::RmArgs;
use crate::repo::{self, RemoveOutcome, is_affirmative};

pub fn handle_remove(args: &RmArgs, notes_dir: &Path) -> Result<()> {
    let note = repo::locate(notes_dir, &args.name)?;

    let outcome = repo::remove(&note, |note| {
        if args.force {
            return true;
        }
        prompt(&format!(
            "Remove {} and everything inside it? This cannot be undone. [y/N] ",
            note.name()
        ))
    })?;

    match outcome {
        RemoveOutcome::Removed => println!("Removed note {}", note.name()),
        RemoveOutcome::Declined => println!("Aborted; {} was not removed", note.name()),
    }

    Ok(())
}

fn prompt(question: &str) -> bool {
    print!("{question}");
    let _ = std::io::stdout().flush();

    let mut answer = String::new();
    if std::io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    is_affirmative(&answer)
}
