//! Plan command implementation.

use std::fs;
use std::time::Instant;

use bosun_config::ProjectSettings;
use bosun_plan::BuildTarget;

use crate::cli::PlanArgs;
use crate::error::{CliError, Result};
use crate::ui;

/// Environment variable consulted when `--target` is omitted.
const TARGET_ENV: &str = "BUILD";

/// Execute the plan command.
///
/// # Process
///
/// 1. Resolve the build target (flag, then `BUILD` environment variable)
/// 2. Load and schema-validate the project settings
/// 3. Assemble the plan (this writes the version stamp)
/// 4. Emit the plan JSON to stdout or `--out`
pub fn execute(args: PlanArgs) -> Result<()> {
    let start_time = Instant::now();

    let target = resolve_target(args.target.as_deref())?;
    ui::info(&format!("Assembling deploy plan for '{target}'"));

    let settings = ProjectSettings::load(args.config.as_deref())?;
    bosun_config::validate_schema(&settings)?;
    tracing::debug!(output_dir = %settings.output_dir.display(), "settings resolved");

    let plan = bosun_plan::assemble(target, &settings)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&plan)?
    } else {
        serde_json::to_string(&plan)?
    };

    match &args.out {
        Some(path) => {
            fs::write(path, json)?;
            ui::info(&format!("Plan written to {}", path.display()));
        }
        None => println!("{json}"),
    }

    ui::success(&format!(
        "Assembled {} steps in {}",
        plan.steps.len(),
        ui::format_duration(start_time.elapsed())
    ));

    Ok(())
}

/// Resolve the build target from the flag or the `BUILD` environment
/// variable.
pub(crate) fn resolve_target(flag: Option<&str>) -> Result<BuildTarget> {
    let raw = match flag {
        Some(value) => value.to_string(),
        None => std::env::var(TARGET_ENV).map_err(|_| {
            CliError::InvalidArgument(format!(
                "no build target given\n\nHint: pass --target <TARGET> or set the {TARGET_ENV} environment variable"
            ))
        })?,
    };

    Ok(raw.parse()?)
}
