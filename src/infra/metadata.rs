//! The per-note metadata record (`meta.json`) with atomic writes.
//!
//! The record has exactly one recognized field, `tags`. Its modification
//! time doubles as the last-successful-build timestamp, so [`touch`] is
//! how a finished build is marked current.

use crate::domain::{Note, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors from reading or writing a note's metadata record.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("metadata record not found: {path}")]
    NotFound { path: PathBuf },

    #[error("invalid metadata record at {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MetadataError {
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => MetadataError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => {
                MetadataError::PermissionDenied { path: path.into() }
            }
            _ => MetadataError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// The persisted shape of `meta.json`.
///
/// `tags` is required: a record without it is invalid, never defaulted.
#[derive(Debug, Serialize, Deserialize)]
struct MetadataRecord {
    tags: BTreeSet<Tag>,
}

/// Reads the tag set from a note's metadata record.
///
/// # Errors
///
/// Returns `MetadataError::NotFound` if the note directory or its record
/// is missing, and `MetadataError::Invalid` if the record exists but is
/// not a JSON object with a valid `tags` field.
pub fn read_tags(note: &Note) -> Result<BTreeSet<Tag>, MetadataError> {
    read_tags_from(note.dir())
}

/// Reads the tag set from the metadata record inside `dir`.
///
/// Like [`read_tags`] but usable during directory enumeration, where
/// entries have not been resolved to notes yet.
pub fn read_tags_from(dir: &Path) -> Result<BTreeSet<Tag>, MetadataError> {
    let path = dir.join(crate::domain::METADATA_FILE);
    let contents =
        std::fs::read_to_string(&path).map_err(|e| MetadataError::from_io(&path, e))?;

    let record: MetadataRecord =
        serde_json::from_str(&contents).map_err(|e| MetadataError::Invalid {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    Ok(record.tags)
}

/// Overwrites a note's metadata record with exactly the given tag set.
///
/// The write goes through a temp file and an atomic rename, so a crash
/// never leaves a half-written record behind. The note directory must
/// already exist.
///
/// # Errors
///
/// Returns `MetadataError::NotFound` if the note directory is missing.
pub fn write_tags(note: &Note, tags: &BTreeSet<Tag>) -> Result<(), MetadataError> {
    let path = note.metadata_path();
    if !note.exists() {
        return Err(MetadataError::NotFound { path });
    }

    let record = MetadataRecord { tags: tags.clone() };
    let mut contents = serde_json::to_string_pretty(&record).map_err(|e| {
        MetadataError::Invalid {
            path: path.clone(),
            reason: e.to_string(),
        }
    })?;
    contents.push('\n');

    let mut temp = NamedTempFile::new_in(note.dir()).map_err(|e| MetadataError::Io {
        path: path.clone(),
        source: e,
    })?;

    temp.write_all(contents.as_bytes())
        .map_err(|e| MetadataError::Io {
            path: path.clone(),
            source: e,
        })?;

    temp.persist(&path).map_err(|e| MetadataError::AtomicWrite {
        path,
        source: e.error,
    })?;

    Ok(())
}

/// Rewrites a note's metadata record unchanged, bumping its mtime.
///
/// This is the "build is current" marker: the record's mtime is what the
/// staleness check compares source files against.
///
/// # Errors
///
/// Fails fast if the record does not already exist; touching must never
/// create one.
pub fn touch(note: &Note) -> Result<(), MetadataError> {
    let tags = read_tags(note)?;
    write_tags(note, &tags)
}
