//! ghcheck - Check that a development environment is wired up to GitHub.
//!
//! ghcheck runs a fixed list of independent diagnostic checks (Git
//! installation, identity, GitHub remote, authentication, VS Code extensions,
//! dev container configuration), prints a pass/fail line with a remediation
//! hint for each finding, and ends with a summary. It never changes anything
//! and always exits successfully.
//!
//! # Modules
//!
//! - [`checks`] - The individual checks and the [`checks::Check`] trait
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Dev container configuration parsing
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Check orchestration and the summary
//! - [`shell`] - Shell command execution
//! - [`ui`] - Console output
//!
//! # Example
//!
//! ```
//! use ghcheck::runner::ChecklistRunner;
//! use ghcheck::shell::MockRunner;
//! use ghcheck::ui::MockUI;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let runner = MockRunner::new().with_output("git --version", "git version 2.43.0");
//! let mut ui = MockUI::new();
//!
//! let outcome = ChecklistRunner::with_defaults().run(&runner, &mut ui, temp.path());
//! assert_eq!(outcome.summary.passed(), 1);
//! assert!(ui.has_success("git version 2.43.0"));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{GhcheckError, Result};
