//! Core types: NoteName, Tag, Note

mod name;
mod note;
mod tag;

pub use name::{NoteName, ParseNameError};
pub use note::{ARTIFACT_FILE, ASSETS_DIR, BUILD_DIR, METADATA_FILE, Note, SOURCE_EXTENSION};
pub use tag::{ParseTagError, Tag};
