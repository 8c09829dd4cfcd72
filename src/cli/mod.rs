//! Command-line interface for ghcheck.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`command`] - The [`Command`] trait and [`CheckCommand`]

pub mod args;
pub mod command;

pub use args::Cli;
pub use command::{CheckCommand, Command};
