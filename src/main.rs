//! ghcheck CLI entry point.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use ghcheck::cli::{CheckCommand, Cli, Command};
use ghcheck::shell::ShellRunner;
use ghcheck::ui::{TerminalUI, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout carries the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("ghcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ghcheck=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(ui: &mut dyn UserInterface) -> ghcheck::Result<()> {
    let project_root =
        std::env::current_dir().context("could not determine the current directory")?;
    let runner = ShellRunner::new(&project_root);

    let outcome = CheckCommand::new(&project_root, &runner).execute(ui)?;
    tracing::debug!(
        passed = outcome.summary.passed(),
        applicable = outcome.summary.applicable(),
        "checklist finished"
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("ghcheck starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = TerminalUI::new();

    // Advisory tool: report problems, never fail the process.
    if let Err(e) = run(&mut ui) {
        ui.error(&format!("Error: {}", e));
    }
    ExitCode::SUCCESS
}
