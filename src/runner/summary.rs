//! Result aggregation and the closing verdict.

use crate::checks::CheckResult;
use crate::ui::{hints, UserInterface};

/// Pass count against applicable count.
///
/// Not-applicable results are left out of both numbers: a skipped check
/// neither helps nor hurts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    passed: usize,
    applicable: usize,
}

impl Summary {
    /// Aggregate a list of results.
    pub fn from_results(results: &[CheckResult]) -> Self {
        let applicable = results.iter().filter(|r| r.is_applicable()).count();
        let passed = results.iter().filter(|r| r.is_pass()).count();
        Self { passed, applicable }
    }

    /// Number of checks that passed.
    pub fn passed(&self) -> usize {
        self.passed
    }

    /// Number of checks that applied.
    pub fn applicable(&self) -> usize {
        self.applicable
    }

    /// Whether every applicable check passed.
    pub fn all_passed(&self) -> bool {
        self.passed == self.applicable
    }

    /// The one-line count shown under the summary header.
    pub fn headline(&self) -> String {
        if self.all_passed() {
            format!("All checks passed! ({}/{})", self.passed, self.applicable)
        } else {
            format!(
                "{} out of {} checks passed",
                self.passed, self.applicable
            )
        }
    }

    /// Print the summary section and the documentation links.
    pub fn render(&self, ui: &mut dyn UserInterface) {
        tracing::debug!(
            passed = self.passed,
            applicable = self.applicable,
            "checklist finished"
        );

        ui.show_header("Summary");
        if self.all_passed() {
            ui.success(&self.headline());
            ui.show_verdict("Your VS Code is properly configured to use GitHub!", true);
        } else {
            ui.warning(&self.headline());
            ui.show_verdict(
                "Some configuration issues were found. Please review the output above.",
                false,
            );
        }

        ui.show_subheading("Additional Resources:");
        for (label, url) in hints::resources() {
            ui.info(&format!("- {}: {}", label, url));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use crate::checks::CheckResult::*;

    #[test]
    fn not_applicable_is_excluded_from_denominator() {
        let summary = Summary::from_results(&[Pass, Pass, NotApplicable, Fail, Pass, NotApplicable]);

        assert_eq!(summary.passed(), 3);
        assert_eq!(summary.applicable(), 4);
        assert!(!summary.all_passed());
        assert_eq!(summary.headline(), "3 out of 4 checks passed");
    }

    #[test]
    fn warn_counts_as_applicable_not_passed() {
        let summary = Summary::from_results(&[Pass, Warn]);
        assert_eq!(summary.headline(), "1 out of 2 checks passed");
    }

    #[test]
    fn all_passed_headline() {
        let summary = Summary::from_results(&[Pass, NotApplicable, Pass]);
        assert!(summary.all_passed());
        assert_eq!(summary.headline(), "All checks passed! (2/2)");
    }

    #[test]
    fn nothing_applicable_counts_as_all_passed() {
        let summary = Summary::from_results(&[NotApplicable, NotApplicable]);
        assert!(summary.all_passed());
        assert_eq!(summary.headline(), "All checks passed! (0/0)");
    }

    #[test]
    fn render_failure_verdict() {
        let mut ui = MockUI::new();
        Summary::from_results(&[Pass, Pass, NotApplicable, Fail, Pass, NotApplicable])
            .render(&mut ui);

        assert_eq!(ui.headers(), ["Summary"]);
        assert!(ui.has_warning("3 out of 4 checks passed"));
        assert!(!ui.has_warning("3/6"));
        assert!(!ui.verdicts()[0].1);
    }

    #[test]
    fn render_success_verdict_and_resources() {
        let mut ui = MockUI::new();
        Summary::from_results(&[Pass]).render(&mut ui);

        assert!(ui.has_success("All checks passed! (1/1)"));
        assert!(ui.verdicts()[0].1);
        assert_eq!(ui.subheadings(), ["Additional Resources:"]);
        assert_eq!(ui.infos().len(), 3);
        assert!(ui.has_info("https://docs.github.com/en/get-started"));
    }
}
