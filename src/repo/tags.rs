//! Tag engine: set union and difference over the stored record.

use crate::domain::{Note, Tag};
use crate::infra::{MetadataError, read_tags, write_tags};
use std::collections::BTreeSet;

/// Adds tags to a note; already-present tags are no-ops.
///
/// Returns the resulting tag set.
///
/// # Errors
///
/// Propagates `MetadataError::NotFound` when the note has no metadata
/// record; tagging never creates one.
pub fn add_tags(note: &Note, incoming: &BTreeSet<Tag>) -> Result<BTreeSet<Tag>, MetadataError> {
    let mut tags = read_tags(note)?;
    tags.extend(incoming.iter().cloned());
    write_tags(note, &tags)?;
    Ok(tags)
}

/// Removes tags from a note; absent tags are no-ops, not errors.
///
/// Returns the resulting tag set.
pub fn remove_tags(note: &Note, outgoing: &BTreeSet<Tag>) -> Result<BTreeSet<Tag>, MetadataError> {
    let mut tags = read_tags(note)?;
    tags.retain(|t| !outgoing.contains(t));
    write_tags(note, &tags)?;
    Ok(tags)
}
