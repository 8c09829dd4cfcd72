//! Shell command execution.

use crate::error::{GhcheckError, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::platform::{detect_shell, shell_flag};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            success: false,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Capture stdout (if false, output is discarded).
    pub capture_stdout: bool,

    /// Capture stderr (if false, output is discarded).
    pub capture_stderr: bool,
}

/// Execute a shell command.
///
/// The command string is handed to the platform shell, so redirections such
/// as `2>&1` work. Stdin is always closed: a probe must never wait on the
/// user. A non-zero exit is a successful call returning a failed
/// [`CommandResult`]; only a failure to spawn is an error.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let mut cmd = Command::new(detect_shell());
    cmd.arg(shell_flag());
    cmd.arg(command);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(if options.capture_stdout {
        Stdio::piped()
    } else {
        Stdio::null()
    });
    cmd.stderr(if options.capture_stderr {
        Stdio::piped()
    } else {
        Stdio::null()
    });

    let output = cmd.output().map_err(|_| GhcheckError::CommandFailed {
        command: command.to_string(),
        code: None,
    })?;

    let stdout = if options.capture_stdout {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    let stderr = if options.capture_stderr {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::new()
    };

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr))
    } else {
        Ok(CommandResult::failure(output.status.code(), stdout, stderr))
    }
}
