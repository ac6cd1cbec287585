//! The assembled build plan.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use crate::error::Result;
use crate::step::PlanStep;
use crate::target::{BuildTarget, BundleMode, SourceMapMode};

/// Filename pattern for local builds.
pub const LOCAL_FILENAME_PATTERN: &str = "[name].bundle.js";

/// Filename pattern for deployed builds; the content hash busts caches on
/// every content change.
pub const HASHED_FILENAME_PATTERN: &str = "[name].[contenthash].bundle.js";

/// The fully resolved configuration for one build invocation.
///
/// A plan is derived purely from the target and project settings; its only
/// side effect happens earlier, when the version stamp is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildPlan {
    /// Target the plan was assembled for
    pub target: BuildTarget,

    /// Mode the host bundler runs in
    pub mode: BundleMode,

    /// Output naming and serving settings
    pub output: OutputSettings,

    /// Named entry points, in order
    pub entries: IndexMap<String, PathBuf>,

    /// Extensions tried during bare-import resolution
    pub resolve_extensions: Vec<String>,

    /// Loader rules for source files
    pub rules: Vec<ModuleRule>,

    /// Transformation steps, in execution order
    pub steps: Vec<PlanStep>,

    /// Dev-server settings, present for local builds only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerOptions>,
}

impl BuildPlan {
    /// Convert to serde_json::Value for handing to a host bundler.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Steps of a given kind, in plan order.
    pub fn steps_of_kind(&self, kind: &str) -> Vec<&PlanStep> {
        self.steps.iter().filter(|s| s.kind() == kind).collect()
    }
}

/// Output naming and serving settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Directory emitted files land in
    pub dir: PathBuf,

    /// Chunk filename pattern (`[name]`, `[contenthash]` placeholders)
    pub filename: String,

    /// Public base path the bundle is served under
    pub public_path: String,

    /// Source-map mode for emitted chunks
    pub source_maps: SourceMapMode,
}

/// Loader rule: which loader chain handles files matching `test`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRule {
    /// Regex matched against the source filename
    pub test: String,

    /// Loaders applied to matching files, first to last
    pub loaders: Vec<String>,
}

/// Dev-server settings for local builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerOptions {
    /// Directory the server serves from
    pub serve_dir: PathBuf,

    /// Whether the server compresses responses
    pub compress: bool,

    /// Serve the index document for unknown paths (SPA routing)
    pub history_api_fallback: bool,

    /// Watch the served directory for changes
    pub watch: bool,
}
