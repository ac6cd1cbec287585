//! # bosun-plan
//!
//! Deploy-plan assembly for web front-end bundles.
//!
//! Given a deployment target and project settings, this crate derives the
//! ordered list of transformation steps a host bundler should run, plus
//! output naming and mode settings, and persists a fresh version stamp the
//! service worker uses to detect new deployments. The steps themselves are
//! data; executing them is the host bundler's job.

pub mod assemble;
pub mod error;
pub mod plan;
pub mod stamp;
pub mod step;
pub mod target;

// Re-export main types
pub use assemble::assemble;
pub use error::{PlanError, Result};
pub use plan::{BuildPlan, DevServerOptions, ModuleRule, OutputSettings};
pub use stamp::VersionStamp;
pub use step::{PlanStep, JS_COMPRESS_PATTERN};
pub use target::{BuildTarget, BundleMode, SourceMapMode};
