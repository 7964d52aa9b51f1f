//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `nota` binary.
///
/// Provides a builder-style API for constructing and executing CLI
/// commands with environment overrides and piped stdin.
pub struct NotaCommand {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
}

impl NotaCommand {
    /// Creates a new command for the `nota` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
            stdin: None,
        }
    }

    /// Sets the `--dir` option to specify the notes directory.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Sets an environment variable for the command.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Pipes the given text to the command's stdin.
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Runs the command and returns an Assert for making assertions.
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("nota").expect("Failed to find nota binary");
        cmd.args(&self.args);
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        if let Some(input) = self.stdin {
            cmd.write_stdin(input);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `new` command with a note name.
    pub fn new_note(self, name: &str) -> Self {
        self.args(["new", name])
    }

    /// Adds a `--template` option.
    pub fn with_template(self, template: &str) -> Self {
        self.args(["--template", template])
    }

    /// Adds a `--tags` option.
    pub fn with_tags(self, tags: &str) -> Self {
        self.args(["--tags", tags])
    }

    /// Configures for the `tag` command.
    pub fn tag(self, name: &str, tags: &str) -> Self {
        self.args(["tag", name, tags])
    }

    /// Configures for the `untag` command.
    pub fn untag(self, name: &str, tags: &str) -> Self {
        self.args(["untag", name, tags])
    }

    /// Configures for the `rm` command.
    pub fn rm(self, name: &str) -> Self {
        self.args(["rm", name])
    }

    /// Adds the `--force` flag.
    pub fn force(self) -> Self {
        self.args(["--force"])
    }

    /// Configures for the `search` command.
    pub fn search(self) -> Self {
        self.args(["search"])
    }

    /// Adds a `--filter` option.
    pub fn filter(self, tags: &str) -> Self {
        self.args(["--filter", tags])
    }

    /// Configures for the `view` command.
    pub fn view(self, name: &str) -> Self {
        self.args(["view", name])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for NotaCommand {
    fn default() -> Self {
        Self::new()
    }
}
