use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available Bosun subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble the deploy plan for a build target
    ///
    /// Writes a fresh version stamp into the output directory, then emits
    /// the resolved plan as JSON for the host bundler to execute.
    Plan(PlanArgs),

    /// Validate configuration and project files
    ///
    /// Checks the settings file for schema errors and verifies that the
    /// template, manifest, assets directory and entry points exist.
    Check(CheckArgs),
}

/// Arguments for the plan command
#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Build target to assemble for (local, beta, production)
    ///
    /// Falls back to the BUILD environment variable when omitted.
    #[arg(short, long, value_name = "TARGET")]
    pub target: Option<String>,

    /// Path to the settings file
    ///
    /// Defaults to bosun.toml or bosun.config.json in the working
    /// directory when present.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the plan JSON to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Pretty-print the emitted JSON
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Build target to validate alongside the configuration
    #[arg(short, long, value_name = "TARGET")]
    pub target: Option<String>,

    /// Path to the settings file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Project root the source paths are resolved against
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,
}

#[cfg(test)]
mod tests {
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn parses_plan_with_target_and_out() {
        let cli = Cli::parse_from([
            "bosun", "plan", "--target", "beta", "--out", "plan.json", "--pretty",
        ]);
        match cli.command {
            super::Command::Plan(args) => {
                assert_eq!(args.target.as_deref(), Some("beta"));
                assert!(args.pretty);
                assert!(args.out.is_some());
            }
            other => panic!("expected plan command, got {other:?}"),
        }
    }

    #[test]
    fn check_root_defaults_to_cwd() {
        let cli = Cli::parse_from(["bosun", "check"]);
        match cli.command {
            super::Command::Check(args) => {
                assert_eq!(args.root, std::path::PathBuf::from("."));
            }
            other => panic!("expected check command, got {other:?}"),
        }
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["bosun", "--verbose", "--quiet", "check"]);
        assert!(result.is_err());
    }
}
