//! The command runner seam.
//!
//! Checks never spawn processes themselves. They hand a command string to a
//! [`CommandRunner`] and branch on the [`CommandOutcome`] it returns. A missing
//! tool, a non-zero exit and a spawn failure all collapse into
//! [`CommandOutcome::Unavailable`], so a check can treat "tool absent" as an
//! ordinary failed probe.

use std::path::{Path, PathBuf};

use super::command::{execute, CommandOptions};

/// What a probe command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command exited successfully; holds its trimmed stdout.
    Output(String),
    /// The command failed, could not be spawned, or does not exist.
    Unavailable,
}

impl CommandOutcome {
    /// Build an outcome from raw stdout, trimming surrounding whitespace.
    pub fn from_stdout(stdout: &str) -> Self {
        Self::Output(stdout.trim().to_string())
    }

    /// The output text, if the command succeeded and printed something.
    ///
    /// An empty successful output counts as absent: `git config user.name`
    /// exiting 0 with nothing on stdout is not a configured name.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Output(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    /// Whether [`output`](Self::output) would return text.
    pub fn is_present(&self) -> bool {
        self.output().is_some()
    }
}

/// Executes probe commands.
pub trait CommandRunner {
    /// Run a command string and report what it printed.
    ///
    /// Implementations must never panic or return an error: every failure
    /// is reported as [`CommandOutcome::Unavailable`].
    fn run(&self, command: &str) -> CommandOutcome;
}

/// Runs commands through the platform shell.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    cwd: Option<PathBuf>,
}

impl ShellRunner {
    /// Create a runner that executes in the given directory.
    pub fn new(cwd: &Path) -> Self {
        Self {
            cwd: Some(cwd.to_path_buf()),
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> CommandOutcome {
        let options = CommandOptions {
            cwd: self.cwd.clone(),
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        };

        match execute(command, &options) {
            Ok(result) if result.success => {
                tracing::debug!(command, "command succeeded");
                CommandOutcome::from_stdout(&result.stdout)
            }
            Ok(result) => {
                tracing::debug!(
                    command,
                    exit_code = ?result.exit_code,
                    stderr = %result.stderr.trim(),
                    "command failed"
                );
                CommandOutcome::Unavailable
            }
            Err(e) => {
                tracing::debug!(command, error = %e, "command could not be spawned");
                CommandOutcome::Unavailable
            }
        }
    }
}
