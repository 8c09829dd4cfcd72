//! Git installation check.

use super::{Check, CheckContext, CheckResult};
use crate::ui::hints;

/// Verifies that `git` runs.
pub struct GitInstallationCheck;

impl Check for GitInstallationCheck {
    fn title(&self) -> &str {
        "Checking Git Installation"
    }

    fn run(&self, ctx: &mut CheckContext<'_>) -> CheckResult {
        let outcome = ctx.runner.run("git --version");

        match outcome.output() {
            Some(version) => {
                ctx.ui.success(&format!("Git is installed: {}", version));
                CheckResult::Pass
            }
            None => {
                ctx.ui.error("Git is not installed or not in PATH");
                ctx.ui.info(hints::install_git());
                CheckResult::Fail
            }
        }
    }
}
