//! Sequential check execution.

use std::path::Path;

use crate::checks::{default_checks, Check, CheckContext, CheckResult};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::summary::Summary;

/// Runs an ordered list of checks, one after another.
pub struct ChecklistRunner {
    checks: Vec<Box<dyn Check>>,
}

/// Result of running the checklist.
#[derive(Debug, Clone)]
pub struct ChecklistResult {
    /// Each check's title and result, in execution order.
    pub results: Vec<(String, CheckResult)>,
    /// Aggregate counts.
    pub summary: Summary,
}

impl ChecklistRunner {
    /// Create a runner over the given checks.
    pub fn new(checks: Vec<Box<dyn Check>>) -> Self {
        Self { checks }
    }

    /// Create a runner over the built-in checks.
    pub fn with_defaults() -> Self {
        Self::new(default_checks())
    }

    /// Number of checks that will run.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether there are no checks.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check, then print the summary.
    ///
    /// Each check gets a numbered section header. A failing check never
    /// stops the ones after it.
    pub fn run(
        &self,
        runner: &dyn CommandRunner,
        ui: &mut dyn UserInterface,
        root: &Path,
    ) -> ChecklistResult {
        let mut results = Vec::with_capacity(self.checks.len());

        for (index, check) in self.checks.iter().enumerate() {
            ui.show_header(&format!("{}. {}", index + 1, check.title()));

            let mut ctx = CheckContext::new(runner, &mut *ui, root);
            let result = check.run(&mut ctx);
            tracing::debug!(check = check.title(), %result, "check finished");

            results.push((check.title().to_string(), result));
        }

        let outcomes: Vec<CheckResult> = results.iter().map(|(_, r)| *r).collect();
        let summary = Summary::from_results(&outcomes);
        summary.render(ui);

        ChecklistResult { results, summary }
    }
}
