//! Command handlers for the CLI.

mod new;
mod remove;
mod search;
mod tag;
mod view;

pub use new::handle_new;
pub use remove::handle_remove;
pub use search::handle_search;
pub use tag::{handle_tag, handle_untag};
pub use view::handle_view;

use crate::domain::Tag;
use anyhow::{Context, Result};
use std::collections::BTreeSet;

/// Parses CLI tag arguments into a tag set, rejecting invalid entries.
pub(crate) fn parse_tags(raw: &[String]) -> Result<BTreeSet<Tag>> {
    raw.iter()
        .map(|s| Tag::new(s).with_context(|| format!("invalid tag '{s}'")))
        .collect()
}
