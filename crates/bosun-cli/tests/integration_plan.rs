//! Integration tests for the plan command.
//!
//! These drive the command implementations against real temporary
//! directories, with explicit config paths so no test depends on the
//! process working directory.

use bosun_cli::cli::PlanArgs;
use bosun_cli::commands::plan;
use bosun_cli::error::CliError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use uuid::Uuid;

/// Write a config file pointing the output directory into the temp dir.
fn write_config(temp: &TempDir) -> PathBuf {
    let config_path = temp.path().join("bosun.config.json");
    let config = serde_json::json!({
        "output_dir": temp.path().join("build"),
    });
    fs::write(&config_path, config.to_string()).unwrap();
    config_path
}

fn plan_args(temp: &TempDir, target: &str, out: &str) -> PlanArgs {
    PlanArgs {
        target: Some(target.to_string()),
        config: Some(write_config(temp)),
        out: Some(temp.path().join(out)),
        pretty: false,
    }
}

#[test]
fn production_plan_lands_on_disk_with_stamp() {
    let temp = TempDir::new().unwrap();
    let args = plan_args(&temp, "production", "plan.json");

    plan::execute(args).unwrap();

    let plan: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("plan.json")).unwrap()).unwrap();
    assert_eq!(plan["mode"], "production");
    assert_eq!(plan["target"], "production");
    assert_eq!(plan["steps"].as_array().unwrap().len(), 8);
    assert_eq!(plan["output"]["filename"], "[name].[contenthash].bundle.js");
    assert_eq!(plan["output"]["public_path"], "/");

    let stamp: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(temp.path().join("build/sw-version.json")).unwrap(),
    )
    .unwrap();
    assert!(Uuid::parse_str(stamp["version"].as_str().unwrap()).is_ok());
}

#[test]
fn local_plan_keeps_debug_settings() {
    let temp = TempDir::new().unwrap();
    let args = plan_args(&temp, "local", "plan.json");

    plan::execute(args).unwrap();

    let plan: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("plan.json")).unwrap()).unwrap();
    assert_eq!(plan["mode"], "development");
    assert_eq!(plan["steps"].as_array().unwrap().len(), 3);
    assert_eq!(plan["output"]["filename"], "[name].bundle.js");
    assert_eq!(plan["output"]["source_maps"], "source-map");
    assert!(plan["dev_server"].is_object());
}

#[test]
fn beta_plan_serves_under_admin() {
    let temp = TempDir::new().unwrap();
    let args = plan_args(&temp, "beta", "plan.json");

    plan::execute(args).unwrap();

    let plan: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("plan.json")).unwrap()).unwrap();
    assert_eq!(plan["output"]["public_path"], "/admin");
}

#[test]
fn missing_target_is_an_argument_error() {
    std::env::remove_var("BUILD");
    let temp = TempDir::new().unwrap();
    let args = PlanArgs {
        target: None,
        config: Some(write_config(&temp)),
        out: None,
        pretty: false,
    };

    let err = plan::execute(args).unwrap_err();
    assert!(matches!(err, CliError::InvalidArgument(_)));
}

#[test]
fn missing_config_file_is_reported() {
    let temp = TempDir::new().unwrap();
    let args = PlanArgs {
        target: Some("production".to_string()),
        config: Some(temp.path().join("missing.toml")),
        out: None,
        pretty: false,
    };

    let err = plan::execute(args).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
}
