//! Library integration tests.

use ghcheck::checks::{default_checks, CheckContext, CheckResult, RemoteCheck};
use ghcheck::checks::Check;
use ghcheck::runner::Summary;
use ghcheck::shell::MockRunner;
use ghcheck::ui::MockUI;
use ghcheck::GhcheckError;
use std::path::Path;

#[test]
fn error_types_are_public() {
    let err = GhcheckError::CommandFailed {
        command: "git --version".into(),
        code: None,
    };
    assert!(err.to_string().contains("git --version"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> ghcheck::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use ghcheck::cli::Cli;

    let cli = Cli::parse_from(["ghcheck", "--no-color"]);
    assert!(cli.no_color);
}

#[test]
fn checks_can_be_driven_individually() {
    let runner = MockRunner::new()
        .with_output("git rev-parse --is-inside-work-tree", "true")
        .with_output("git remote get-url origin", "https://github.com/octo/repo");
    let mut ui = MockUI::new();
    let mut ctx = CheckContext::new(&runner, &mut ui, Path::new("."));

    assert_eq!(RemoteCheck.run(&mut ctx), CheckResult::Pass);
}

#[test]
fn summary_matches_documented_ratio() {
    use ghcheck::checks::CheckResult::*;
    let summary = Summary::from_results(&[Pass, Pass, NotApplicable, Fail, Pass, NotApplicable]);
    assert_eq!(summary.headline(), "3 out of 4 checks passed");
}

#[test]
fn editor_check_stops_after_missing_cli() {
    let checks = default_checks();
    let editor = checks
        .iter()
        .find(|c| c.title() == "Checking VS Code Extensions")
        .expect("editor check registered");

    let runner = MockRunner::new();
    let mut ui = MockUI::new();
    let mut ctx = CheckContext::new(&runner, &mut ui, Path::new("."));
    editor.run(&mut ctx);

    assert_eq!(runner.calls().len(), 1);
}
