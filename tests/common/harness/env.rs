//! Isolated test environment with temp directory.

use super::NotaCommand;
use nota::domain::{Note, NoteName, Tag};
use nota::infra::write_tags;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Provides methods for laying out managed notes and templates without
/// going through the CLI, so each test exercises only its own command.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the notes directory
    notes_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with a default template.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().to_path_buf();
        let env = Self {
            _temp_dir: temp_dir,
            notes_dir,
        };
        env.write_template("default", "\\documentclass{article}\n");
        env
    }

    /// Returns the path to the notes directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Returns the root directory of a note by name.
    pub fn note_dir(&self, name: &str) -> PathBuf {
        self.notes_dir.join(name)
    }

    /// Lays out a complete managed note directly on disk.
    ///
    /// Creates the note directory, `assets/`, `view/`, an empty source
    /// file, and a metadata record with the given tags.
    pub fn add_note(&self, name: &str, tags: &[&str]) -> Note {
        let note = Note::new(&self.notes_dir, NoteName::new(name).expect("valid note name"));
        std::fs::create_dir(note.dir()).expect("Failed to create note dir");
        std::fs::create_dir(note.assets_dir()).expect("Failed to create assets dir");
        std::fs::create_dir(note.build_dir()).expect("Failed to create build dir");
        std::fs::write(note.source_path(), "\\documentclass{article}\n")
            .expect("Failed to write source");

        let tags: BTreeSet<Tag> = tags
            .iter()
            .map(|t| Tag::new(t).expect("valid tag"))
            .collect();
        write_tags(&note, &tags).expect("Failed to write metadata");
        note
    }

    /// Writes a template file into the notes directory.
    pub fn write_template(&self, name: &str, content: &str) -> PathBuf {
        let path = self.notes_dir.join(format!("{name}.tex"));
        std::fs::write(&path, content).expect("Failed to write template");
        path
    }

    /// Creates a NotaCommand configured for this test environment.
    ///
    /// The compiler is pinned to `true` so no test needs a LaTeX
    /// toolchain installed.
    pub fn cmd(&self) -> NotaCommand {
        NotaCommand::new()
            .dir(&self.notes_dir)
            .env("NOTA_COMPILER", "true")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
