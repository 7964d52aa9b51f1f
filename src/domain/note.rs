//! The Note type: a directory-backed entity with a fixed internal layout.

use crate::domain::{NoteName, ParseNameError};
use std::path::{Path, PathBuf};

/// File extension of the primary document source.
pub const SOURCE_EXTENSION: &str = "tex";

/// Subdirectory holding free-form user assets.
pub const ASSETS_DIR: &str = "assets";

/// Subdirectory receiving build output.
pub const BUILD_DIR: &str = "view";

/// Name of the metadata record inside a note directory.
pub const METADATA_FILE: &str = "meta.json";

/// Name of the compiled artifact inside the build directory.
pub const ARTIFACT_FILE: &str = "output.pdf";

/// A note: a named directory with a document source, assets, build output,
/// and a metadata record.
///
/// All sub-paths are composed from the note's root directory, so no
/// operation ever depends on the process working directory.
///
/// ```text
/// <root>/<name>.tex    — document source
/// <root>/assets/       — user assets
/// <root>/view/         — build output (view/output.pdf)
/// <root>/meta.json     — metadata record
/// ```
#[derive(Debug, Clone)]
pub struct Note {
    name: NoteName,
    dir: PathBuf,
}

impl Note {
    /// Creates a handle for the note `name` under `notes_dir`.
    ///
    /// This is purely path composition; nothing is checked on disk.
    pub fn new(notes_dir: &Path, name: NoteName) -> Self {
        let dir = notes_dir.join(name.as_str());
        Self { name, dir }
    }

    /// Creates a handle from a note's root directory.
    ///
    /// Used when the current working directory itself is the note.
    ///
    /// # Errors
    ///
    /// Returns `ParseNameError` if the final path component is not a
    /// usable note name (e.g. the filesystem root).
    pub fn from_root(dir: &Path) -> Result<Self, ParseNameError> {
        let component = dir
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ParseNameError::not_a_note_dir(dir))?;
        let name = NoteName::new(component)?;
        Ok(Self {
            name,
            dir: dir.to_path_buf(),
        })
    }

    /// The note's name.
    pub fn name(&self) -> &NoteName {
        &self.name
    }

    /// The note's root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the primary document source (`<name>.tex`).
    pub fn source_path(&self) -> PathBuf {
        self.dir
            .join(format!("{}.{}", self.name.as_str(), SOURCE_EXTENSION))
    }

    /// Path of the assets subdirectory.
    pub fn assets_dir(&self) -> PathBuf {
        self.dir.join(ASSETS_DIR)
    }

    /// Path of the build output subdirectory.
    pub fn build_dir(&self) -> PathBuf {
        self.dir.join(BUILD_DIR)
    }

    /// Path of the metadata record.
    pub fn metadata_path(&self) -> PathBuf {
        self.dir.join(METADATA_FILE)
    }

    /// Path of the compiled artifact (`view/output.pdf`).
    pub fn artifact_path(&self) -> PathBuf {
        self.build_dir().join(ARTIFACT_FILE)
    }

    /// Whether the note's root directory exists on disk.
    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn note(name: &str) -> Note {
        Note::new(Path::new("/notes"), NoteName::new(name).unwrap())
    }

    #[test]
    fn dir_is_under_notes_dir() {
        assert_eq!(note("algebra").dir(), Path::new("/notes/algebra"));
    }

    #[test]
    fn source_path_uses_name_and_extension() {
        assert_eq!(
            note("algebra").source_path(),
            PathBuf::from("/notes/algebra/algebra.tex")
        );
    }

    #[test]
    fn assets_and_build_dirs() {
        let n = note("algebra");
        assert_eq!(n.assets_dir(), PathBuf::from("/notes/algebra/assets"));
        assert_eq!(n.build_dir(), PathBuf::from("/notes/algebra/view"));
    }

    #[test]
    fn metadata_path() {
        assert_eq!(
            note("algebra").metadata_path(),
            PathBuf::from("/notes/algebra/meta.json")
        );
    }

    #[test]
    fn artifact_path_is_inside_build_dir() {
        assert_eq!(
            note("algebra").artifact_path(),
            PathBuf::from("/notes/algebra/view/output.pdf")
        );
    }

    #[test]
    fn from_root_takes_final_component() {
        let n = Note::from_root(Path::new("/notes/algebra")).unwrap();
        assert_eq!(n.name().as_str(), "algebra");
        assert_eq!(n.dir(), Path::new("/notes/algebra"));
    }

    #[test]
    fn from_root_rejects_filesystem_root() {
        assert!(Note::from_root(Path::new("/")).is_err());
    }

    #[test]
    fn exists_reflects_filesystem() {
        let tmp = tempfile::TempDir::new().unwrap();
        let n = Note::new(tmp.path(), NoteName::new("algebra").unwrap());
        assert!(!n.exists());
        std::fs::create_dir(n.dir()).unwrap();
        assert!(n.exists());
    }
}
