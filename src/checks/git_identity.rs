//! Git identity check.
//!
//! Both identity keys are always queried and always reported, so a user
//! missing both sees both fixes in one run.

use super::{Check, CheckContext, CheckResult};
use crate::ui::hints;

/// Identity keys every commit needs.
const IDENTITY_KEYS: [&str; 2] = ["user.name", "user.email"];

/// Verifies that `user.name` and `user.email` are configured.
pub struct GitIdentityCheck;

impl GitIdentityCheck {
    fn check_key(ctx: &mut CheckContext<'_>, key: &str) -> bool {
        let outcome = ctx.runner.run(&format!("git config {}", key));

        match outcome.output() {
            Some(value) => {
                ctx.ui.success(&format!("Git {} is set: {}", key, value));
                true
            }
            None => {
                ctx.ui.error(&format!("Git {} is not configured", key));
                ctx.ui.info(&hints::configure_identity(key));
                false
            }
        }
    }
}

impl Check for GitIdentityCheck {
    fn title(&self) -> &str {
        "Checking Git Configuration"
    }

    fn run(&self, ctx: &mut CheckContext<'_>) -> CheckResult {
        // Evaluate every key before combining; `all` would stop early.
        let configured: Vec<bool> = IDENTITY_KEYS
            .iter()
            .map(|key| Self::check_key(ctx, key))
            .collect();

        if configured.iter().all(|ok| *ok) {
            CheckResult::Pass
        } else {
            CheckResult::Fail
        }
    }
}
