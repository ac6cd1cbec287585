//! Plan assembly.
//!
//! `assemble` is the one operation of this crate: persist a fresh version
//! stamp, then derive the step list and output settings for the requested
//! target. It runs exactly once per build process, synchronously.

use std::path::Path;

use bosun_config::ProjectSettings;

use crate::error::Result;
use crate::plan::{
    BuildPlan, DevServerOptions, ModuleRule, OutputSettings, HASHED_FILENAME_PATTERN,
    LOCAL_FILENAME_PATTERN,
};
use crate::stamp::VersionStamp;
use crate::step::{PlanStep, JS_COMPRESS_PATTERN};
use crate::target::BuildTarget;

/// Global hook the devtools extension attaches to; deployed bundles
/// replace it with a disabled stub.
const DEVTOOLS_HOOK: &str = "__REACT_DEVTOOLS_GLOBAL_HOOK__";
const DEVTOOLS_HOOK_STUB: &str = "({ isDisabled: true })";

/// Assemble the build plan for `target`.
///
/// The version stamp is generated and persisted into the output directory
/// before any step is constructed; an I/O failure there aborts the whole
/// assembly. The returned plan is otherwise a pure function of the target
/// and settings.
pub fn assemble(target: BuildTarget, settings: &ProjectSettings) -> Result<BuildPlan> {
    let stamp = VersionStamp::generate();
    stamp.persist(&settings.output_dir, &settings.version_file)?;
    tracing::info!(%target, version = %stamp.version, "assembling build plan");

    let mut steps = vec![
        PlanStep::HtmlTemplate {
            template: settings.html_template.clone(),
            base_path: String::new(),
        },
        PlanStep::CopyManifest {
            from: settings.manifest.clone(),
            minify: true,
        },
        PlanStep::CopyAssets {
            from: settings.assets_dir.clone(),
            to: settings.output_dir.join(&settings.assets_out),
        },
    ];

    if !target.is_local() {
        steps.push(PlanStep::ServiceWorker {
            dest: settings.sw_file.clone(),
            clients_claim: true,
            skip_waiting: true,
        });
        steps.push(PlanStep::DefineGlobal {
            name: DEVTOOLS_HOOK.to_string(),
            value: DEVTOOLS_HOOK_STUB.to_string(),
        });
        steps.push(PlanStep::Compress {
            pattern: JS_COMPRESS_PATTERN.to_string(),
        });
        steps.push(PlanStep::Minify);
        steps.push(PlanStep::ReplaceModule {
            matcher: settings.environment_module.clone(),
            replacement: environment_module_for(&settings.environment_module, target),
        });
    }

    Ok(BuildPlan {
        target,
        mode: target.mode(),
        output: OutputSettings {
            dir: settings.output_dir.clone(),
            filename: filename_pattern(target).to_string(),
            public_path: target.public_path().to_string(),
            source_maps: target.source_maps(),
        },
        entries: settings.entries.clone(),
        resolve_extensions: settings.resolve_extensions.clone(),
        rules: default_rules(),
        steps,
        dev_server: target
            .is_local()
            .then(|| dev_server_options(&settings.output_dir)),
    })
}

fn filename_pattern(target: BuildTarget) -> &'static str {
    if target.is_local() {
        LOCAL_FILENAME_PATTERN
    } else {
        HASHED_FILENAME_PATTERN
    }
}

/// Target-specific variant of the environment module, e.g.
/// `environment.ts` becomes `environment.beta.ts`.
fn environment_module_for(module: &str, target: BuildTarget) -> String {
    match module.strip_suffix(".ts") {
        Some(stem) => format!("{stem}.{target}.ts"),
        None => format!("{module}.{target}"),
    }
}

fn default_rules() -> Vec<ModuleRule> {
    vec![
        ModuleRule {
            test: r"\.ts(x?)$".to_string(),
            loaders: vec!["ts-loader".to_string()],
        },
        ModuleRule {
            test: r"\.scss$".to_string(),
            loaders: vec![
                "style-loader".to_string(),
                "css-loader".to_string(),
                "sass-loader".to_string(),
            ],
        },
    ]
}

fn dev_server_options(output_dir: &Path) -> DevServerOptions {
    DevServerOptions {
        serve_dir: output_dir.to_path_buf(),
        compress: false,
        history_api_fallback: true,
        watch: true,
    }
}
