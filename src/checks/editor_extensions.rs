//! VS Code extensions check.

use std::collections::HashSet;

use super::{Check, CheckContext, CheckResult};
use crate::ui::hints;

/// GitHub Copilot.
pub const COPILOT: &str = "GitHub.copilot";

/// GitHub Pull Requests and Issues.
pub const PULL_REQUESTS: &str = "GitHub.vscode-pull-request-github";

/// GitLens.
pub const GITLENS: &str = "eamodio.gitlens";

/// Installed extension identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    ids: HashSet<String>,
}

impl ExtensionSet {
    /// Build from `code --list-extensions` output: one identifier per line.
    pub fn parse(listing: &str) -> Self {
        let ids = listing
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { ids }
    }

    /// Whether an extension is installed. Identifiers match exactly.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of installed extensions.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no extensions are installed.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Verifies the `code` CLI and reports on GitHub-related extensions.
///
/// The result only reflects whether the CLI and the extension listing
/// worked; missing extensions are advice, not failures.
pub struct EditorExtensionsCheck;

impl EditorExtensionsCheck {
    fn report_extensions(ctx: &mut CheckContext<'_>, installed: &ExtensionSet) {
        if installed.contains(COPILOT) {
            ctx.ui.success("GitHub Copilot extension is installed");
        } else {
            ctx.ui.warning("GitHub Copilot extension is not installed");
            ctx.ui.info(&hints::marketplace(COPILOT));
        }

        if installed.contains(PULL_REQUESTS) {
            ctx.ui.success("GitHub Pull Requests extension is installed");
        } else {
            ctx.ui
                .warning("GitHub Pull Requests extension is not installed (optional)");
        }

        if installed.contains(GITLENS) {
            ctx.ui.success("GitLens extension is installed");
        } else {
            ctx.ui
                .info("GitLens extension is not installed (optional but recommended)");
        }
    }
}

impl Check for EditorExtensionsCheck {
    fn title(&self) -> &str {
        "Checking VS Code Extensions"
    }

    fn run(&self, ctx: &mut CheckContext<'_>) -> CheckResult {
        let version = ctx.runner.run("code --version");
        let Some(version) = version.output() else {
            ctx.ui.warning("VS Code CLI is not available");
            for line in hints::install_editor_cli() {
                ctx.ui.info(line);
            }
            return CheckResult::Warn;
        };

        // `code --version` prints version, commit and arch on separate lines.
        let release = version.lines().next().unwrap_or(version);
        ctx.ui.success(&format!("VS Code is installed: {}", release));

        let listing = ctx.runner.run("code --list-extensions");
        let Some(listing) = listing.output() else {
            ctx.ui.warning("Could not retrieve VS Code extensions list");
            return CheckResult::Warn;
        };

        let installed = ExtensionSet::parse(listing);
        tracing::debug!(count = installed.len(), "installed VS Code extensions");
        Self::report_extensions(ctx, &installed);

        CheckResult::Pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use std::path::Path;

    const VERSION: &str = "code --version";
    const LIST: &str = "code --list-extensions";

    fn run(runner: &MockRunner) -> (CheckResult, MockUI) {
        let mut ui = MockUI::new();
        let mut ctx = CheckContext::new(runner, &mut ui, Path::new("."));
        let result = EditorExtensionsCheck.run(&mut ctx);
        (result, ui)
    }

    #[test]
    fn extension_set_parses_lines() {
        let set = ExtensionSet::parse("GitHub.copilot\r\n\neamodio.gitlens\n");
        assert_eq!(set.len(), 2);
        assert!(set.contains(COPILOT));
        assert!(set.contains(GITLENS));
        assert!(!set.contains("github.copilot"));
    }

    #[test]
    fn empty_listing_is_empty_set() {
        assert!(ExtensionSet::parse("").is_empty());
    }

    #[test]
    fn missing_cli_exits_early() {
        let runner = MockRunner::new();
        let (result, ui) = run(&runner);

        assert_eq!(result, CheckResult::Warn);
        assert!(ui.has_warning("VS Code CLI is not available"));
        assert_eq!(runner.calls(), vec![VERSION]);
    }

    #[test]
    fn reports_first_line_of_version() {
        let runner = MockRunner::new()
            .with_output(VERSION, "1.85.1\n0ee08df0cf4527e40edc9aa28f4b5bd38bbff2b2\nx64\n")
            .with_output(LIST, GITLENS);
        let (_, ui) = run(&runner);

        assert!(ui.has_success("VS Code is installed: 1.85.1"));
        assert!(!ui.has_success("x64"));
    }

    #[test]
    fn listing_failure_warns() {
        let runner = MockRunner::new().with_output(VERSION, "1.85.1");
        let (result, ui) = run(&runner);

        assert_eq!(result, CheckResult::Warn);
        assert!(ui.has_warning("Could not retrieve"));
    }

    #[test]
    fn all_extensions_installed() {
        let runner = MockRunner::new()
            .with_output(VERSION, "1.85.1")
            .with_output(LIST, "GitHub.copilot\nGitHub.vscode-pull-request-github\neamodio.gitlens");
        let (result, ui) = run(&runner);

        assert_eq!(result, CheckResult::Pass);
        assert_eq!(ui.successes().len(), 4);
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn severities_differ_per_extension() {
        let runner = MockRunner::new()
            .with_output(VERSION, "1.85.1")
            .with_output(LIST, "ms-python.python");
        let (result, ui) = run(&runner);

        assert_eq!(result, CheckResult::Pass);
        assert!(ui.has_warning("GitHub Copilot extension is not installed"));
        assert!(ui.has_info("itemName=GitHub.copilot"));
        assert!(ui.has_warning("Pull Requests extension is not installed (optional)"));
        assert!(ui.has_info("GitLens extension is not installed"));
        assert!(!ui.has_warning("GitLens"));
    }
}
