//! The deploy version stamp.
//!
//! A stamp is a single-key JSON record holding a fresh UUID. It is written
//! into the output directory before any plan is handed out; the deployed
//! service worker polls the file to notice that a new bundle shipped.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::error::{PlanError, Result};

/// Unix permission bits for a freshly created output directory.
#[cfg(unix)]
const OUTPUT_DIR_MODE: u32 = 0o744;

/// A freshly generated deploy identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionStamp {
    pub version: String,
}

impl VersionStamp {
    /// Generate a stamp with a new random identifier.
    pub fn generate() -> Self {
        Self {
            version: Uuid::new_v4().to_string(),
        }
    }

    /// Serialize as the minimal JSON object the service worker expects.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Write the stamp to `filename` inside `output_dir`, creating the
    /// directory first if needed and overwriting any prior stamp.
    ///
    /// This is one unit: directory creation, then write. Either step
    /// failing aborts the whole assembly, since a build without a fresh
    /// stamp silently breaks deploy detection.
    pub fn persist(&self, output_dir: &Path, filename: &str) -> Result<PathBuf> {
        ensure_output_dir(output_dir)?;

        let path = output_dir.join(filename);
        let json = self.to_json()?;
        fs::write(&path, json).map_err(|source| PlanError::StampWrite {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(version = %self.version, path = %path.display(), "wrote version stamp");
        Ok(path)
    }
}

/// Create the output directory if it is missing.
///
/// A pre-existing directory is left untouched; a pre-existing
/// non-directory is an error. Creation is non-recursive and uses mode
/// `0744` on Unix.
fn ensure_output_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    if dir.exists() {
        return Err(PlanError::OutputPathNotDirectory(dir.to_path_buf()));
    }

    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(OUTPUT_DIR_MODE);
    }
    builder.create(dir).map_err(|source| PlanError::OutputDirCreate {
        path: dir.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn generated_stamps_are_unique() {
        let a = VersionStamp::generate();
        let b = VersionStamp::generate();
        assert_ne!(a.version, b.version);
        assert!(Uuid::parse_str(&a.version).is_ok());
    }

    #[test]
    fn json_has_exactly_one_key() {
        let stamp = VersionStamp::generate();
        let value: serde_json::Value = serde_json::from_str(&stamp.to_json().unwrap()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["version"], stamp.version);
    }

    #[test]
    fn persist_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("build");
        let path = VersionStamp::generate()
            .persist(&out, "sw-version.json")
            .unwrap();
        assert!(out.is_dir());
        assert_eq!(path, out.join("sw-version.json"));
    }

    #[cfg(unix)]
    #[test]
    fn created_directory_honors_mode_bits() {
        use std::os::unix::fs::PermissionsExt;
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("build");
        VersionStamp::generate()
            .persist(&out, "sw-version.json")
            .unwrap();
        let mode = std::fs::metadata(&out).unwrap().permissions().mode() & 0o777;
        // The umask may clear bits but never adds any
        assert_eq!(mode & !0o744, 0);
    }

    #[test]
    fn persist_overwrites_prior_stamp() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("build");
        let first = VersionStamp::generate();
        let second = VersionStamp::generate();
        first.persist(&out, "sw-version.json").unwrap();
        second.persist(&out, "sw-version.json").unwrap();

        let content = std::fs::read_to_string(out.join("sw-version.json")).unwrap();
        let read: VersionStamp = serde_json::from_str(&content).unwrap();
        assert_eq!(read, second);
    }

    #[test]
    fn existing_directory_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        VersionStamp::generate()
            .persist(temp.path(), "sw-version.json")
            .unwrap();
    }

    #[test]
    fn file_collision_on_output_path_is_fatal() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("build");
        std::fs::write(&out, "not a directory").unwrap();
        let err = VersionStamp::generate()
            .persist(&out, "sw-version.json")
            .unwrap_err();
        assert!(matches!(err, PlanError::OutputPathNotDirectory(_)));
    }

    #[test]
    fn missing_parent_directory_is_fatal() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("missing/build");
        let err = VersionStamp::generate()
            .persist(&out, "sw-version.json")
            .unwrap_err();
        assert!(matches!(err, PlanError::OutputDirCreate { .. }));
    }
}
