//! CLI argument definitions.
//!
//! ghcheck takes no functional options: it always inspects the current
//! directory. The flags below only affect presentation and logging.

use clap::Parser;

/// ghcheck - Check that your editor and Git are set up for GitHub.
#[derive(Debug, Parser)]
#[command(name = "ghcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
