//! Shell command execution.
//!
//! - [`command`] - Low-level process execution with captured output
//! - [`runner`] - The [`CommandRunner`] seam the checks talk to
//! - [`mock`] - Scripted runner for tests

pub mod command;
pub mod mock;
pub mod platform;
pub mod runner;

pub use command::{execute, CommandOptions, CommandResult};
pub use mock::MockRunner;
pub use platform::{detect_shell, shell_flag};
pub use runner::{CommandOutcome, CommandRunner, ShellRunner};
