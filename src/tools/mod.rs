//! External collaborators: the LaTeX compiler and the PDF viewer

pub mod compiler;
pub mod viewer;

pub use compiler::{CompileError, Compiler};
pub use viewer::{DisplayError, UnsupportedBackend, Viewer};
