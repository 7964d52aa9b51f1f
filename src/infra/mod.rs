//! Filesystem-facing primitives: the metadata store and the staleness check

pub mod metadata;
pub mod staleness;

pub use metadata::{MetadataError, read_tags, read_tags_from, touch, write_tags};
pub use staleness::{StalenessError, is_stale};
