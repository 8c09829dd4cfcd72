//! The diagnostic checks.
//!
//! Each check implements [`Check`]: it probes one aspect of the environment
//! through a [`CommandRunner`], prints its own findings through the
//! [`UserInterface`] and returns a [`CheckResult`]. Checks are independent;
//! the orchestration in [`crate::runner`] runs every one of them regardless
//! of earlier outcomes.
//!
//! # Checks
//!
//! - [`git_installation`] - Git is on PATH
//! - [`git_identity`] - `user.name` and `user.email` are set
//! - [`remote`] - `origin` points at GitHub
//! - [`authentication`] - `origin` answers a read-only handshake
//! - [`editor_extensions`] - VS Code CLI and GitHub-related extensions
//! - [`devcontainer`] - `.devcontainer/devcontainer.json` is well-formed

pub mod authentication;
pub mod devcontainer;
pub mod editor_extensions;
pub mod git_identity;
pub mod git_installation;
pub mod remote;

pub use authentication::AuthenticationCheck;
pub use devcontainer::DevContainerCheck;
pub use editor_extensions::{EditorExtensionsCheck, ExtensionSet};
pub use git_identity::GitIdentityCheck;
pub use git_installation::GitInstallationCheck;
pub use remote::RemoteCheck;

use std::path::Path;

use crate::shell::CommandRunner;
use crate::ui::UserInterface;

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckResult {
    /// Everything the check looks for is in place.
    Pass,
    /// Something is off but not broken (e.g. a non-GitHub remote).
    Warn,
    /// A required piece is missing.
    Fail,
    /// The check does not apply here (e.g. not inside a repository).
    NotApplicable,
}

impl CheckResult {
    /// Whether the check passed.
    pub fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Whether the check counts toward the summary.
    pub fn is_applicable(self) -> bool {
        !matches!(self, Self::NotApplicable)
    }
}

impl std::fmt::Display for CheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Warn => write!(f, "warn"),
            Self::Fail => write!(f, "fail"),
            Self::NotApplicable => write!(f, "n/a"),
        }
    }
}

/// Everything a check may touch while it runs.
pub struct CheckContext<'a> {
    /// Executes probe commands.
    pub runner: &'a dyn CommandRunner,
    /// Receives the check's output lines.
    pub ui: &'a mut dyn UserInterface,
    /// Working directory the checks inspect.
    pub root: &'a Path,
}

impl<'a> CheckContext<'a> {
    /// Create a new context.
    pub fn new(
        runner: &'a dyn CommandRunner,
        ui: &'a mut dyn UserInterface,
        root: &'a Path,
    ) -> Self {
        Self { runner, ui, root }
    }
}

/// A diagnostic probe.
pub trait Check {
    /// Section title, without the leading number.
    fn title(&self) -> &str;

    /// Run the probe, printing findings as it goes.
    ///
    /// Must not panic on a missing tool or file; every failure mode is
    /// reported through `ctx.ui` and folded into the result.
    fn run(&self, ctx: &mut CheckContext<'_>) -> CheckResult;
}

/// The built-in checks in execution order.
pub fn default_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(GitInstallationCheck),
        Box::new(GitIdentityCheck),
        Box::new(RemoteCheck),
        Box::new(AuthenticationCheck),
        Box::new(EditorExtensionsCheck),
        Box::new(DevContainerCheck),
    ]
}
