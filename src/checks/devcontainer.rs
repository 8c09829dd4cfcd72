//! Dev container configuration check.

use super::editor_extensions::COPILOT;
use super::{Check, CheckContext, CheckResult};
use crate::config::load_devcontainer;
use crate::error::GhcheckError;

/// Verifies `.devcontainer/devcontainer.json`, when there is one.
pub struct DevContainerCheck;

impl Check for DevContainerCheck {
    fn title(&self) -> &str {
        "Checking Dev Container Configuration"
    }

    fn run(&self, ctx: &mut CheckContext<'_>) -> CheckResult {
        let config = match load_devcontainer(ctx.root) {
            Ok(Some(config)) => config,
            Ok(None) => {
                ctx.ui.info("No Dev Container configuration found (optional)");
                return CheckResult::NotApplicable;
            }
            Err(e) => {
                let reason = match e {
                    GhcheckError::ConfigParseError { message, .. } => message,
                    other => other.to_string(),
                };
                ctx.ui.warning(&format!(
                    "Dev Container configuration exists but could not be parsed: {}",
                    reason
                ));
                return CheckResult::Warn;
            }
        };

        ctx.ui.success("Dev Container configuration found");

        if let Some(extensions) = config.extensions() {
            if config.has_extension(COPILOT) {
                ctx.ui
                    .success("GitHub Copilot is configured in devcontainer.json");
            }
            ctx.ui
                .info(&format!("Configured extensions: {}", extensions.join(", ")));
        }

        CheckResult::Pass
    }
}
