//! Command-line interface definition for the Bosun CLI.
//!
//! This module defines the CLI structure using clap v4's derive macros.
//!
//! # Command Structure
//!
//! - `bosun plan` - Assemble the deploy plan for a build target
//! - `bosun check` - Validate configuration and project files

mod commands;

use clap::Parser;

pub use commands::{CheckArgs, Command, PlanArgs};

/// Bosun - deploy-plan assembler for web front-end bundles
#[derive(Parser, Debug)]
#[command(
    name = "bosun",
    version,
    about = "Assemble deploy plans for web front-end bundles",
    long_about = "Bosun turns a deployment target into a resolved build plan:\n\
                  an ordered list of transformation steps plus output naming and\n\
                  mode settings for the host bundler, with a fresh version stamp\n\
                  written for the service worker to detect new deployments."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows detailed information about settings resolution and plan
    /// assembly.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    ///
    /// Only critical errors will be displayed. Useful for CI/CD
    /// environments or when piping output to other tools.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
