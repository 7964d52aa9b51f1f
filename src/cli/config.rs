//! Configuration file support.

use crate::tools::Viewer;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default notes directory
    pub dir: Option<PathBuf>,

    /// Default viewer backend
    pub backend: Option<Viewer>,

    /// Compiler command for building note sources
    pub compiler: Option<String>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/nota/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nota")
            .join("config.toml")
    }

    /// Resolve the notes directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. Current working directory
    pub fn notes_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve the viewer backend, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--backend` argument
    /// 2. Config file `backend` setting
    /// 3. The built-in default (zathura)
    ///
    /// The second element reports whether the built-in default was used,
    /// so the caller can mention the fallback.
    pub fn backend(&self, cli_backend: Option<Viewer>) -> (Viewer, bool) {
        match cli_backend.or(self.backend) {
            Some(viewer) => (viewer, false),
            None => (Viewer::default(), true),
        }
    }

    /// Resolve the compiler command.
    ///
    /// Precedence order:
    /// 1. Config file `compiler` setting
    /// 2. $NOTA_COMPILER environment variable
    /// 3. "pdflatex" as fallback
    pub fn compiler(&self) -> String {
        self.compiler
            .clone()
            .or_else(|| std::env::var("NOTA_COMPILER").ok())
            .unwrap_or_else(|| "pdflatex".to_string())
    }
}
