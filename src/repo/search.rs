//! Search engine: lazy enumeration filtered by tag-set containment.

use crate::domain::Tag;
use crate::infra::read_tags_from;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Errors from starting a search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("notes directory not found: {path}")]
    NotFound { path: PathBuf },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

/// A note matching a search: its name and full tag set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    pub name: String,
    pub tags: BTreeSet<Tag>,
}

/// Searches the notes directory for notes whose tags contain `filter`.
///
/// Enumerates the direct children of `notes_dir` lazily, in
/// directory-listing order (OS-defined, not sorted). Entries without a
/// readable, valid metadata record are skipped silently: most stray
/// directory entries are simply not notes. The empty filter matches
/// every valid note. The iterator reflects the filesystem at
/// consumption time; re-running re-enumerates.
pub fn search(
    notes_dir: &Path,
    filter: &BTreeSet<Tag>,
) -> Result<impl Iterator<Item = SearchMatch> + use<>, SearchError> {
    if !notes_dir.exists() {
        return Err(SearchError::NotFound {
            path: notes_dir.to_path_buf(),
        });
    }
    if !notes_dir.is_dir() {
        return Err(SearchError::NotADirectory {
            path: notes_dir.to_path_buf(),
        });
    }

    let filter = filter.clone();
    let iter = WalkDir::new(notes_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(move |entry| {
            let entry = entry.ok()?;
            if !entry.file_type().is_dir() {
                return None;
            }
            let name = entry.file_name().to_str()?.to_string();
            let tags = read_tags_from(entry.path()).ok()?;
            filter.is_subset(&tags).then_some(SearchMatch { name, tags })
        });

    Ok(iter)
}
