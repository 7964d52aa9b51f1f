//! Note creation: directory layout, template copy, initial metadata and build.

use crate::domain::{Note, NoteName, ParseNameError, SOURCE_EXTENSION, Tag};
use crate::infra::{MetadataError, write_tags};
use crate::tools::{CompileError, Compiler};
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from creating a note.
#[derive(Debug, Error)]
pub enum CreateError {
    #[error(transparent)]
    InvalidName(#[from] ParseNameError),

    #[error("note already exists: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("template not found: {path}")]
    TemplateNotFound { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Creates a note named `name` under `notes_dir` from a template.
///
/// Builds the full layout (note dir, `assets/`, `view/`), copies the
/// template verbatim into `<name>.tex`, writes the initial metadata
/// record with exactly `tags`, and runs one initial build.
///
/// There is no rollback: a failure after the directory is made leaves a
/// partial note behind for the user to clean up.
///
/// # Errors
///
/// Preconditions are checked in order: `InvalidName` if the name holds a
/// path separator, `AlreadyExists` if the directory is taken,
/// `TemplateNotFound` if neither `<template>` nor `<template>.tex`
/// exists under `notes_dir`.
pub fn create(
    notes_dir: &Path,
    name: &str,
    template: &str,
    tags: &BTreeSet<Tag>,
    compiler: &Compiler,
) -> Result<Note, CreateError> {
    let name = NoteName::new(name)?;
    let note = Note::new(notes_dir, name);

    if note.dir().exists() {
        return Err(CreateError::AlreadyExists {
            path: note.dir().to_path_buf(),
        });
    }

    let template_path = resolve_template(notes_dir, template)?;

    println!("Using template {}...", template_path.display());
    for dir in [note.dir().to_path_buf(), note.assets_dir(), note.build_dir()] {
        std::fs::create_dir_all(&dir).map_err(|e| CreateError::Io {
            path: dir.clone(),
            source: e,
        })?;
    }

    std::fs::copy(&template_path, note.source_path()).map_err(|e| CreateError::Io {
        path: note.source_path(),
        source: e,
    })?;

    write_tags(&note, tags)?;
    compiler.build(&note)?;

    Ok(note)
}

/// Resolves a template argument against the notes directory.
///
/// The argument is taken as-is when it already carries the source
/// extension, otherwise the extension is appended; an absolute path
/// bypasses the notes directory.
fn resolve_template(notes_dir: &Path, template: &str) -> Result<PathBuf, CreateError> {
    let suffix = format!(".{SOURCE_EXTENSION}");
    let file_name = if template.ends_with(&suffix) {
        template.to_string()
    } else {
        format!("{template}{suffix}")
    };

    let candidate = PathBuf::from(&file_name);
    let path = if candidate.is_absolute() {
        candidate
    } else {
        notes_dir.join(candidate)
    };

    if !path.is_file() {
        return Err(CreateError::TemplateNotFound { path });
    }

    Ok(path)
}
