//! Validated note name type.

use std::fmt;
use std::str::FromStr;

/// The name of a note, doubling as its directory name.
///
/// A name identifies exactly one directory directly under the notes
/// directory, so it must be a single path component: no separators,
/// non-empty, and not one of the dot entries.
///
/// # Examples
///
/// ```
/// use nota::domain::NoteName;
///
/// let name = NoteName::new("algebra").unwrap();
/// assert_eq!(name.as_str(), "algebra");
///
/// assert!(NoteName::new("a/b").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NoteName(String);

/// Error returned when parsing an invalid note name.
#[derive(Debug, Clone)]
pub struct ParseNameError(String);

impl fmt::Display for ParseNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseNameError {}

impl ParseNameError {
    pub(crate) fn not_a_note_dir(path: &std::path::Path) -> Self {
        Self(format!(
            "'{}' does not name a note directory",
            path.display()
        ))
    }
}

impl NoteName {
    /// Creates a new NoteName from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseNameError` if:
    /// - The name is empty or whitespace-only
    /// - The name contains a path separator (`/` or `\`)
    /// - The name is `.` or `..`
    pub fn new(s: &str) -> Result<Self, ParseNameError> {
        let name = s.trim();

        if name.is_empty() {
            return Err(ParseNameError("note name cannot be empty".to_string()));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(ParseNameError(format!(
                "invalid note name '{name}': a name cannot contain a path separator"
            )));
        }
        if name == "." || name == ".." {
            return Err(ParseNameError(format!(
                "invalid note name '{name}': a name cannot be a dot entry"
            )));
        }

        Ok(Self(name.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteName(\"{}\")", self.0)
    }
}

impl FromStr for NoteName {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
