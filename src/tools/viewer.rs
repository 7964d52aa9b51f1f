//! Viewer backends: a closed set of PDF viewers with one dispatch point.

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::io;
use std::path::Path;
use std::process::Command;
use std::str::FromStr;
use thiserror::Error;

/// Error returned for a viewer backend name outside the supported set.
#[derive(Debug, Clone, Error)]
#[error("unsupported viewer backend '{0}'")]
pub struct UnsupportedBackend(String);

/// Errors from launching the viewer.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("failed to launch viewer '{viewer}': {source}")]
    Launch {
        viewer: Viewer,
        #[source]
        source: io::Error,
    },

    #[error("viewer '{viewer}' exited with status {status}")]
    Failed {
        viewer: Viewer,
        status: std::process::ExitStatus,
    },
}

/// A supported PDF viewer backend.
///
/// The set is closed: dispatch is a match, so adding a backend means the
/// compiler points at every place that must handle it. Unknown names
/// fail with [`UnsupportedBackend`] at the configuration boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Viewer {
    /// zathura (default)
    #[default]
    Zathura,
    /// GNOME Evince
    Evince,
    /// Desktop default via xdg-open
    XdgOpen,
}

impl Viewer {
    fn program(self) -> &'static str {
        match self {
            Viewer::Zathura => "zathura",
            Viewer::Evince => "evince",
            Viewer::XdgOpen => "xdg-open",
        }
    }

    /// Opens the build artifact in this viewer, blocking until it exits.
    ///
    /// # Errors
    ///
    /// Returns `DisplayError::Launch` if the viewer binary cannot be
    /// started and `DisplayError::Failed` on a nonzero exit.
    pub fn display(self, artifact: &Path) -> Result<(), DisplayError> {
        let status = Command::new(self.program())
            .arg(artifact)
            .status()
            .map_err(|e| DisplayError::Launch {
                viewer: self,
                source: e,
            })?;

        if !status.success() {
            return Err(DisplayError::Failed {
                viewer: self,
                status,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Viewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

impl FromStr for Viewer {
    type Err = UnsupportedBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "zathura" => Ok(Viewer::Zathura),
            "evince" => Ok(Viewer::Evince),
            "xdg-open" => Ok(Viewer::XdgOpen),
            other => Err(UnsupportedBackend(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Viewer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
