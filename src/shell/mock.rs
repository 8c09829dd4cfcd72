//! Mock command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] with scripted responses and
//! records every command it is asked to run.
//!
//! # Example
//!
//! ```
//! use ghcheck::shell::{CommandOutcome, CommandRunner, MockRunner};
//!
//! let runner = MockRunner::new().with_output("git --version", "git version 2.43.0");
//!
//! assert_eq!(runner.run("git --version").output(), Some("git version 2.43.0"));
//! assert_eq!(runner.run("code --version"), CommandOutcome::Unavailable);
//! assert_eq!(runner.calls(), ["git --version", "code --version"]);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use super::runner::{CommandOutcome, CommandRunner};

/// Scripted [`CommandRunner`].
///
/// Commands without a scripted response behave like a missing tool and
/// return [`CommandOutcome::Unavailable`].
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: HashMap<String, CommandOutcome>,
    calls: RefCell<Vec<String>>,
}

impl MockRunner {
    /// Create a runner where every command is unavailable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful response (stored trimmed, like the real runner).
    pub fn with_output(mut self, command: &str, stdout: &str) -> Self {
        self.responses
            .insert(command.to_string(), CommandOutcome::from_stdout(stdout));
        self
    }

    /// Script an explicit failure for a command.
    pub fn with_unavailable(mut self, command: &str) -> Self {
        self.responses
            .insert(command.to_string(), CommandOutcome::Unavailable);
        self
    }

    /// All commands run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// How many times a command was run.
    pub fn call_count(&self, command: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == command).count()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &str) -> CommandOutcome {
        self.calls.borrow_mut().push(command.to_string());
        self.responses
            .get(command)
            .cloned()
            .unwrap_or(CommandOutcome::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscripted_command_is_unavailable() {
        let runner = MockRunner::new();
        assert_eq!(runner.run("git --version"), CommandOutcome::Unavailable);
    }

    #[test]
    fn scripted_output_is_trimmed() {
        let runner = MockRunner::new().with_output("git config user.name", "Jane Doe\n");
        assert_eq!(runner.run("git config user.name").output(), Some("Jane Doe"));
    }

    #[test]
    fn explicit_unavailable_overrides_earlier_output() {
        let runner = MockRunner::new()
            .with_output("code --version", "1.85.0")
            .with_unavailable("code --version");
        assert_eq!(runner.run("code --version"), CommandOutcome::Unavailable);
    }

    #[test]
    fn records_calls_in_order() {
        let runner = MockRunner::new();
        runner.run("a");
        runner.run("b");
        runner.run("a");

        assert_eq!(runner.calls(), vec!["a", "b", "a"]);
        assert_eq!(runner.call_count("a"), 2);
        assert_eq!(runner.call_count("c"), 0);
    }
}
