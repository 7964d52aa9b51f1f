//! Note repository: lifecycle, tag operations, search, and view orchestration

mod create;
mod remove;
mod search;
mod tags;
mod view;

pub use create::{CreateError, create};
pub use remove::{RemoveError, RemoveOutcome, is_affirmative, remove};
pub use search::{SearchError, SearchMatch, search};
pub use tags::{add_tags, remove_tags};
pub use view::{ViewError, prepare};

use crate::domain::{Note, NoteName, ParseNameError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from resolving a note name to an existing note.
#[derive(Debug, Error)]
pub enum LocateError {
    #[error(transparent)]
    InvalidName(#[from] ParseNameError),

    #[error("note not found: {path}")]
    NotFound { path: PathBuf },
}

/// Resolves a user-supplied name to an existing note under `notes_dir`.
///
/// Trailing path separators are trimmed, so shell completion artifacts
/// like `algebra/` resolve to the note `algebra`.
///
/// # Errors
///
/// Returns `LocateError::NotFound` if no directory with that name exists.
pub fn locate(notes_dir: &Path, raw_name: &str) -> Result<Note, LocateError> {
    let trimmed = raw_name.trim_end_matches(['/', '\\']);
    let name = NoteName::new(trimmed)?;
    let note = Note::new(notes_dir, name);

    if !note.exists() {
        return Err(LocateError::NotFound {
            path: note.dir().to_path_buf(),
        });
    }

    Ok(note)
}
