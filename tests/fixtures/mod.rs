//! Settings documents shared by the integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Directory holding the fixture settings files
pub fn settings_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/settings")
}

/// Path to one fixture settings file
pub fn settings_path(name: &str) -> PathBuf {
    settings_dir().join(name)
}
