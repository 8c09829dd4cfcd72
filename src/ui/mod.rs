//! Console output.
//!
//! This module provides:
//! - [`UserInterface`] trait, the presenter every check writes through
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//! - [`Theme`] and [`StatusKind`] for stateless line formatting
//! - [`hints`] with the remediation and documentation texts
//!
//! # Example
//!
//! ```
//! use ghcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("1. Checking Git Installation");
//! ui.success("Git is installed: git version 2.43.0");
//!
//! assert!(ui.has_success("git version 2.43.0"));
//! ```

pub mod hints;
pub mod icons;
pub mod mock;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, Theme};

/// Trait for console output.
///
/// This trait allows capturing the output in tests.
pub trait UserInterface {
    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Display a success line.
    fn success(&mut self, msg: &str);

    /// Display a warning line.
    fn warning(&mut self, msg: &str);

    /// Display an error line.
    fn error(&mut self, msg: &str);

    /// Display an indented informational line (hints, details).
    fn info(&mut self, msg: &str);

    /// Show an underlined section header.
    fn show_header(&mut self, title: &str);

    /// Show a short colored heading inside a section.
    fn show_subheading(&mut self, title: &str);

    /// Show the boxed program banner.
    fn show_banner(&mut self, title: &str);

    /// Show the closing verdict sentence.
    fn show_verdict(&mut self, msg: &str, passed: bool);
}
