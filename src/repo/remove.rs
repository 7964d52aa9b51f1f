//! Note removal: metadata guard plus confirmed, irreversible deletion.

use crate::domain::Note;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from removing a note.
#[derive(Debug, Error)]
pub enum RemoveError {
    #[error("note not found: {path}")]
    NotFound { path: PathBuf },

    /// The directory exists but carries no metadata record, so it is
    /// not a managed note. Refusing here is the guard against deleting
    /// a look-alike directory.
    #[error("no metadata record at {path}; refusing to delete an unmanaged directory")]
    MissingMetadata { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Whether a removal went through or was declined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    Declined,
}

/// Removes a note's entire directory subtree.
///
/// Preconditions are checked before `confirm` is consulted: the note
/// directory and its metadata record must both exist. The confirmation
/// callback then decides; declining deletes nothing and reports
/// [`RemoveOutcome::Declined`].
pub fn remove<F>(note: &Note, confirm: F) -> Result<RemoveOutcome, RemoveError>
where
    F: FnOnce(&Note) -> bool,
{
    if !note.exists() {
        return Err(RemoveError::NotFound {
            path: note.dir().to_path_buf(),
        });
    }
    if !note.metadata_path().is_file() {
        return Err(RemoveError::MissingMetadata {
            path: note.metadata_path(),
        });
    }

    if !confirm(note) {
        return Ok(RemoveOutcome::Declined);
    }

    std::fs::remove_dir_all(note.dir()).map_err(|e| RemoveError::Io {
        path: note.dir().to_path_buf(),
        source: e,
    })?;

    Ok(RemoveOutcome::Removed)
}

/// Interprets a prompt answer: anything starting with `y` or `Y` is yes.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().to_lowercase().starts_with('y')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteName;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn managed_note(dir: &TempDir, name: &str) -> Note {
        let note = Note::new(dir.path(), NoteName::new(name).unwrap());
        std::fs::create_dir(note.dir()).unwrap();
        std::fs::write(note.metadata_path(), "{\"tags\": []}").unwrap();
        note
    }

    #[test]
    fn confirmed_removal_deletes_subtree() {
        let tmp = TempDir::new().unwrap();
        let note = managed_note(&tmp, "algebra");
        std::fs::create_dir(note.assets_dir()).unwrap();
        std::fs::write(note.assets_dir().join("figure.png"), "png").unwrap();

        let outcome = remove(&note, |_| true).unwrap();

        assert_eq!(outcome, RemoveOutcome::Removed);
        assert!(!note.dir().exists());
    }

    #[test]
    fn declined_removal_deletes_nothing() {
        let tmp = TempDir::new().unwrap();
        let note = managed_note(&tmp, "algebra");

        let outcome = remove(&note, |_| false).unwrap();

        assert_eq!(outcome, RemoveOutcome::Declined);
        assert!(note.dir().exists());
    }

    #[test]
    fn missing_note_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let note = Note::new(tmp.path(), NoteName::new("ghost").unwrap());

        assert!(matches!(
            remove(&note, |_| true),
            Err(RemoveError::NotFound { .. })
        ));
    }

    #[test]
    fn unmanaged_directory_is_protected() {
        let tmp = TempDir::new().unwrap();
        let note = Note::new(tmp.path(), NoteName::new("downloads").unwrap());
        std::fs::create_dir(note.dir()).unwrap();

        let result = remove(&note, |_| true);

        assert!(matches!(result, Err(RemoveError::MissingMetadata { .. })));
        assert!(note.dir().exists());
    }

    #[test]
    fn guard_runs_before_confirmation() {
        let tmp = TempDir::new().unwrap();
        let note = Note::new(tmp.path(), NoteName::new("downloads").unwrap());
        std::fs::create_dir(note.dir()).unwrap();

        let mut asked = false;
        let _ = remove(&note, |_| {
            asked = true;
            true
        });
        assert!(!asked, "confirmation must not be requested for an unmanaged directory");
    }

    #[test]
    fn affirmative_answers() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("  Yep\n"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("ok"));
    }
}
