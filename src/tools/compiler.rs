//! Build trigger: invokes the document compiler and marks the build current.

use crate::domain::Note;
use crate::infra::{MetadataError, metadata};
use std::io;
use std::process::Command;
use thiserror::Error;

/// Errors from triggering a build.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("compiler command is empty")]
    EmptyCommand,

    #[error("failed to launch compiler '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("compiler '{command}' exited with status {status}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
    },

    #[error(transparent)]
    Metadata(#[from] MetadataError),
}

/// Wrapper around the external document compiler.
///
/// Holds the configured command string (default `pdflatex`; the command
/// may carry extra arguments like an editor setting would). A successful
/// build re-touches the note's metadata record, which is what the
/// staleness check reads as "last built".
#[derive(Debug, Clone)]
pub struct Compiler {
    command: String,
}

impl Compiler {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Compiles a note's source into its build directory.
    ///
    /// The compiler runs with the note's root as its working directory,
    /// so sources can reference `assets/` relatively; the output lands
    /// in `view/` as `output.pdf`. The process-wide working directory is
    /// never changed.
    ///
    /// # Errors
    ///
    /// A nonzero exit is an error, and the metadata record is then left
    /// untouched so the note stays stale.
    pub fn build(&self, note: &Note) -> Result<(), CompileError> {
        // Command may include args, e.g. "pdflatex -halt-on-error"
        let parts: Vec<&str> = self.command.split_whitespace().collect();
        let (program, extra_args) = parts.split_first().ok_or(CompileError::EmptyCommand)?;

        println!("Compiling {}...", note.name());
        let status = Command::new(program)
            .args(extra_args)
            .arg("-interaction=nonstopmode")
            .arg("-jobname=output")
            .arg(format!(
                "-output-directory={}",
                note.build_dir().display()
            ))
            .arg(note.source_path())
            .current_dir(note.dir())
            .status()
            .map_err(|e| CompileError::Launch {
                command: self.command.clone(),
                source: e,
            })?;

        if !status.success() {
            return Err(CompileError::Failed {
                command: self.command.clone(),
                status,
            });
        }

        metadata::touch(note)?;
        Ok(())
    }
}
