//! GitHub authentication check.
//!
//! A read-only `git ls-remote` against `origin` stands in for a real
//! authentication test. The output is merged with stderr and scanned for
//! `error`/`fatal`, so the verdict is a heuristic: a ref name containing
//! "error" reads as a failure, and a credential helper that prompts silently
//! can read as success.

use super::{Check, CheckContext, CheckResult};
use crate::ui::hints;

/// Handshake command; stderr is folded into stdout so failures are visible.
const HANDSHAKE: &str = "git ls-remote origin HEAD 2>&1";

/// Markers git prints when the handshake went wrong.
const FAILURE_MARKERS: [&str; 2] = ["error", "fatal"];

/// Verifies that `origin` can be reached with the configured credentials.
pub struct AuthenticationCheck;

/// Whether handshake output looks like a successful exchange.
pub fn handshake_succeeded(output: &str) -> bool {
    let lower = output.to_lowercase();
    !FAILURE_MARKERS.iter().any(|marker| lower.contains(marker))
}

impl Check for AuthenticationCheck {
    fn title(&self) -> &str {
        "Checking GitHub Authentication"
    }

    fn run(&self, ctx: &mut CheckContext<'_>) -> CheckResult {
        let outcome = ctx.runner.run(HANDSHAKE);

        if outcome.output().is_some_and(handshake_succeeded) {
            ctx.ui.success("GitHub authentication is working");
            return CheckResult::Pass;
        }

        ctx.ui.error("GitHub authentication may not be configured");
        for line in hints::configure_authentication() {
            ctx.ui.info(line);
        }
        CheckResult::Fail
    }
}
