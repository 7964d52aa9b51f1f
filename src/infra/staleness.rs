//! Staleness check: is any source file newer than the last build?

use crate::domain::{Note, SOURCE_EXTENSION};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Errors from the staleness check.
#[derive(Debug, Error)]
pub enum StalenessError {
    /// The metadata record is the reference timestamp; without it the
    /// check cannot run at all.
    #[error("metadata record not found: {path}")]
    MissingMetadata { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Returns true iff the note needs a rebuild before being shown.
///
/// The metadata record's mtime stands in for the time of the last
/// successful build. Any `.tex` file directly inside the note directory
/// with an mtime `>=` that reference makes the note stale. The
/// comparison is deliberately `>=`: a source edit landing in the same
/// timestamp tick as the build marker must err toward rebuilding.
///
/// # Errors
///
/// Returns `StalenessError::MissingMetadata` if the record is absent.
/// A note without a record is broken, not "always stale".
pub fn is_stale(note: &Note) -> Result<bool, StalenessError> {
    let meta_path = note.metadata_path();
    let built_at = modified_time(&meta_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => StalenessError::MissingMetadata { path: meta_path },
        _ => StalenessError::Io {
            path: meta_path,
            source: e,
        },
    })?;

    // Source files live directly in the note directory; view/ and
    // assets/ never hold primary sources.
    for entry in WalkDir::new(note.dir()).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| note.dir().to_path_buf());
            StalenessError::Io {
                path,
                source: e.into(),
            }
        })?;

        if !entry.file_type().is_file() || !has_source_extension(entry.path()) {
            continue;
        }

        let source_mtime = modified_time(entry.path()).map_err(|e| StalenessError::Io {
            path: entry.path().to_path_buf(),
            source: e,
        })?;

        if source_mtime >= built_at {
            return Ok(true);
        }
    }

    Ok(false)
}

fn has_source_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
}

fn modified_time(path: &Path) -> io::Result<std::time::SystemTime> {
    std::fs::metadata(path)?.modified()
}
