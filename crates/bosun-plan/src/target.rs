//! Deployment targets and the output modes derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlanError;

/// Deployment target a bundle is produced for.
///
/// The set is closed: anything outside it is rejected when parsing rather
/// than silently building production-like output. Within the set, plan
/// derivation distinguishes only local from non-local builds, plus the
/// beta public-path special case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTarget {
    /// Developer machine build with full debugging support
    Local,
    /// Staging deployment served under the admin prefix
    Beta,
    /// Public production deployment
    Production,
}

impl BuildTarget {
    /// Every recognized target, in declaration order.
    pub const ALL: [BuildTarget; 3] = [
        BuildTarget::Local,
        BuildTarget::Beta,
        BuildTarget::Production,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildTarget::Local => "local",
            BuildTarget::Beta => "beta",
            BuildTarget::Production => "production",
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, BuildTarget::Local)
    }

    /// Public base path the bundle is served under.
    pub fn public_path(&self) -> &'static str {
        match self {
            BuildTarget::Beta => "/admin",
            _ => "/",
        }
    }

    /// Bundle mode the host bundler runs in.
    pub fn mode(&self) -> BundleMode {
        if self.is_local() {
            BundleMode::Development
        } else {
            BundleMode::Production
        }
    }

    /// Source-map mode for the emitted chunks.
    pub fn source_maps(&self) -> SourceMapMode {
        if self.is_local() {
            SourceMapMode::Full
        } else {
            SourceMapMode::None
        }
    }
}

impl FromStr for BuildTarget {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(BuildTarget::Local),
            "beta" => Ok(BuildTarget::Beta),
            "production" => Ok(BuildTarget::Production),
            other => Err(PlanError::UnknownTarget(other.to_string())),
        }
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mode the host bundler is put into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleMode {
    Development,
    Production,
}

impl fmt::Display for BundleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BundleMode::Development => f.write_str("development"),
            BundleMode::Production => f.write_str("production"),
        }
    }
}

/// Source map generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMapMode {
    /// Full external source maps
    #[serde(rename = "source-map")]
    Full,
    /// No source maps
    None,
}
