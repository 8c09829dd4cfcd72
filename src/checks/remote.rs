//! GitHub remote check.

use super::{Check, CheckContext, CheckResult};
use crate::ui::hints;

/// Remote name inspected.
pub const REMOTE_NAME: &str = "origin";

/// Substring identifying a GitHub-hosted remote URL.
pub const GITHUB_HOST: &str = "github.com";

/// Verifies that `origin` points at GitHub.
///
/// Outside a working tree there is nothing to inspect, and the check reports
/// itself as not applicable.
pub struct RemoteCheck;

impl Check for RemoteCheck {
    fn title(&self) -> &str {
        "Checking GitHub Remote Connection"
    }

    fn run(&self, ctx: &mut CheckContext<'_>) -> CheckResult {
        if !ctx
            .runner
            .run("git rev-parse --is-inside-work-tree")
            .is_present()
        {
            ctx.ui.warning("Not inside a git repository");
            return CheckResult::NotApplicable;
        }

        let outcome = ctx
            .runner
            .run(&format!("git remote get-url {}", REMOTE_NAME));

        match outcome.output() {
            Some(url) if url.contains(GITHUB_HOST) => {
                ctx.ui
                    .success(&format!("GitHub remote is configured: {}", url));
                CheckResult::Pass
            }
            Some(url) => {
                ctx.ui
                    .warning(&format!("Remote is configured but not GitHub: {}", url));
                CheckResult::Warn
            }
            None => {
                ctx.ui.error("No remote repository configured");
                ctx.ui.info(hints::add_remote());
                CheckResult::Fail
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use std::path::Path;

    const INSIDE: &str = "git rev-parse --is-inside-work-tree";
    const GET_URL: &str = "git remote get-url origin";

    fn run(runner: &MockRunner) -> (CheckResult, MockUI) {
        let mut ui = MockUI::new();
        let mut ctx = CheckContext::new(runner, &mut ui, Path::new("."));
        let result = RemoteCheck.run(&mut ctx);
        (result, ui)
    }

    #[test]
    fn outside_work_tree_is_not_applicable() {
        let runner = MockRunner::new();
        let (result, ui) = run(&runner);

        assert_eq!(result, CheckResult::NotApplicable);
        assert!(ui.has_warning("Not inside a git repository"));
        assert_eq!(runner.call_count(GET_URL), 0);
    }

    #[test]
    fn no_remote_fails_with_add_remote_hint() {
        let runner = MockRunner::new().with_output(INSIDE, "true");
        let (result, ui) = run(&runner);

        assert_eq!(result, CheckResult::Fail);
        assert!(ui.has_error("No remote repository configured"));
        assert!(ui.has_info("git remote add origin"));
    }

    #[test]
    fn github_https_remote_passes() {
        let runner = MockRunner::new()
            .with_output(INSIDE, "true")
            .with_output(GET_URL, "https://github.com/octo/repo.git");
        let (result, ui) = run(&runner);

        assert_eq!(result, CheckResult::Pass);
        assert!(ui.has_success("https://github.com/octo/repo.git"));
    }

    #[test]
    fn github_ssh_remote_passes() {
        let runner = MockRunner::new()
            .with_output(INSIDE, "true")
            .with_output(GET_URL, "git@github.com:octo/repo.git");
        let (result, _) = run(&runner);

        assert_eq!(result, CheckResult::Pass);
    }

    #[test]
    fn other_host_is_a_warning_not_a_failure() {
        let runner = MockRunner::new()
            .with_output(INSIDE, "true")
            .with_output(GET_URL, "https://gitlab.com/octo/repo.git");
        let (result, ui) = run(&runner);

        assert_eq!(result, CheckResult::Warn);
        assert!(ui.has_warning("not GitHub: https://gitlab.com/octo/repo.git"));
        assert!(ui.errors().is_empty());
    }
}
