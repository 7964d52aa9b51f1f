//! View orchestration: locate, check staleness, rebuild if needed.

use crate::domain::Note;
use crate::infra::{StalenessError, is_stale};
use crate::tools::{CompileError, Compiler};
use std::path::PathBuf;
use thiserror::Error;

/// Errors from preparing a note for viewing.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("note not found: {path}")]
    NotFound { path: PathBuf },

    /// The build directory is part of the note layout and is never
    /// auto-created here; its absence means the note is misconfigured.
    #[error("missing build directory: {path}")]
    MissingBuildDir { path: PathBuf },

    #[error(transparent)]
    Staleness(#[from] StalenessError),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Brings a note's build artifact up to date and returns its path.
///
/// Checks that the note and its build directory exist, rebuilds iff any
/// source file is newer than the last recorded build, and hands back
/// the artifact path for the caller to display. A fresh note is never
/// rebuilt.
pub fn prepare(note: &Note, compiler: &Compiler) -> Result<PathBuf, ViewError> {
    if !note.exists() {
        return Err(ViewError::NotFound {
            path: note.dir().to_path_buf(),
        });
    }
    if !note.build_dir().is_dir() {
        return Err(ViewError::MissingBuildDir {
            path: note.build_dir(),
        });
    }

    if is_stale(note)? {
        compiler.build(note)?;
    }

    Ok(note.artifact_path())
}
