//! Check command implementation.

use bosun_config::{validate_fs, validate_schema, ProjectSettings};
use bosun_plan::BuildTarget;

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// Loads the settings, runs schema validation, then verifies the
/// referenced project files exist under `--root`. No version stamp is
/// written.
pub fn execute(args: CheckArgs) -> Result<()> {
    let settings = ProjectSettings::load(args.config.as_deref())?;
    validate_schema(&settings)?;
    validate_fs(&settings, &args.root)?;

    if let Some(raw) = args.target.as_deref() {
        let target: BuildTarget = raw.parse()?;
        ui::info(&format!(
            "Target '{target}' builds in {} mode under '{}'",
            target.mode(),
            target.public_path()
        ));
    }

    ui::success("Configuration OK");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn scaffold_project(root: &std::path::Path) {
        fs::create_dir_all(root.join("public/assets")).unwrap();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("public/index.html"), "<html></html>").unwrap();
        fs::write(root.join("public/manifest.json"), "{}").unwrap();
        fs::write(root.join("src/polyfills.js"), "").unwrap();
        fs::write(root.join("src/index.tsx"), "").unwrap();
    }

    fn check_args(root: PathBuf, config: Option<PathBuf>, target: Option<&str>) -> CheckArgs {
        CheckArgs {
            target: target.map(ToString::to_string),
            config,
            root,
        }
    }

    #[test]
    fn passes_on_scaffolded_project() {
        let temp = TempDir::new().unwrap();
        scaffold_project(temp.path());
        execute(check_args(temp.path().to_path_buf(), None, Some("production"))).unwrap();
    }

    #[test]
    fn reports_missing_manifest() {
        let temp = TempDir::new().unwrap();
        scaffold_project(temp.path());
        fs::remove_file(temp.path().join("public/manifest.json")).unwrap();

        let err = execute(check_args(temp.path().to_path_buf(), None, None)).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn rejects_unknown_target() {
        let temp = TempDir::new().unwrap();
        scaffold_project(temp.path());

        let err = execute(check_args(temp.path().to_path_buf(), None, Some("qa"))).unwrap_err();
        assert!(matches!(err, CliError::Plan(_)));
    }
}
