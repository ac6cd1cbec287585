use indexmap::IndexMap;
use std::path::PathBuf;

// Helper defaults
pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("build")
}

pub(crate) fn default_html_template() -> PathBuf {
    PathBuf::from("public/index.html")
}

pub(crate) fn default_manifest() -> PathBuf {
    PathBuf::from("public/manifest.json")
}

pub(crate) fn default_assets_dir() -> PathBuf {
    PathBuf::from("public/assets")
}

pub(crate) fn default_assets_out() -> PathBuf {
    PathBuf::from("public/assets")
}

pub(crate) fn default_sw_file() -> String {
    "service-worker.js".to_string()
}

pub(crate) fn default_version_file() -> String {
    "sw-version.json".to_string()
}

pub(crate) fn default_environment_module() -> String {
    "environment.ts".to_string()
}

pub(crate) fn default_entries() -> IndexMap<String, PathBuf> {
    let mut entries = IndexMap::new();
    entries.insert("polyfills".to_string(), PathBuf::from("src/polyfills.js"));
    entries.insert("index".to_string(), PathBuf::from("src/index.tsx"));
    entries
}

pub(crate) fn default_resolve_extensions() -> Vec<String> {
    [".ts", ".tsx", ".js", ".json"]
        .iter()
        .map(ToString::to_string)
        .collect()
}
