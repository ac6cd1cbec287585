//! Transformation steps handed to the host bundler.
//!
//! Each variant is the typed record of one collaborator invocation. The
//! collaborators own their algorithms (templating, minification,
//! compression, service-worker precaching); a step only carries the
//! parameters they consume.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File pattern the compression step applies to: JS chunks, with or
/// without a query-string suffix.
pub const JS_COMPRESS_PATTERN: &str = r"\.js(\?.*)?$";

/// One transformation step of a build plan, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PlanStep {
    /// Render the HTML entry file from a template
    HtmlTemplate { template: PathBuf, base_path: String },

    /// Copy the web app manifest, minifying its JSON on the way
    CopyManifest { from: PathBuf, minify: bool },

    /// Mirror the static assets tree unchanged
    CopyAssets { from: PathBuf, to: PathBuf },

    /// Generate the precaching service worker
    ServiceWorker {
        dest: String,
        clients_claim: bool,
        skip_waiting: bool,
    },

    /// Define a global constant in the emitted bundle
    DefineGlobal { name: String, value: String },

    /// Emit compressed siblings for files matching `pattern`
    Compress { pattern: String },

    /// Minify emitted JS chunks
    Minify,

    /// Rewrite imports of `matcher` to resolve to `replacement`
    ReplaceModule { matcher: String, replacement: String },
}

impl PlanStep {
    /// Stable name of the step kind, matching its serialized tag.
    pub fn kind(&self) -> &'static str {
        match self {
            PlanStep::HtmlTemplate { .. } => "html-template",
            PlanStep::CopyManifest { .. } => "copy-manifest",
            PlanStep::CopyAssets { .. } => "copy-assets",
            PlanStep::ServiceWorker { .. } => "service-worker",
            PlanStep::DefineGlobal { .. } => "define-global",
            PlanStep::Compress { .. } => "compress",
            PlanStep::Minify => "minify",
            PlanStep::ReplaceModule { .. } => "replace-module",
        }
    }

    /// Whether this compression step applies to `filename`.
    ///
    /// Returns `false` for non-compression steps and for patterns that do
    /// not compile as a regex.
    pub fn compresses(&self, filename: &str) -> bool {
        match self {
            PlanStep::Compress { pattern } => Regex::new(pattern)
                .map(|re| re.is_match(filename))
                .unwrap_or(false),
            _ => false,
        }
    }
}
