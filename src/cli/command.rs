//! Command implementations.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::runner::{ChecklistResult, ChecklistRunner};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

/// Banner shown before the first check.
const BANNER: &str = "GitHub Integration Checker for VS Code";

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// The per-check results and their summary.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<ChecklistResult>;
}

/// Runs the full checklist against a working directory.
///
/// The report is advisory: the command succeeds however many checks fail.
pub struct CheckCommand<'a> {
    project_root: PathBuf,
    runner: &'a dyn CommandRunner,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(project_root: &Path, runner: &'a dyn CommandRunner) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            runner,
        }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<ChecklistResult> {
        tracing::debug!(root = %self.project_root.display(), "running checklist");

        ui.show_banner(BANNER);
        let outcome = ChecklistRunner::with_defaults().run(self.runner, ui, &self.project_root);

        Ok(outcome)
    }
}
