//! Golden scenario fixtures shared by the workspace's integration tests.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

const GOLDEN_DIR: &str = "test-fixtures/golden";

/// `test-fixtures/golden`, found by walking up from the calling crate.
fn golden_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    Path::new(&manifest_dir)
        .ancestors()
        .map(|dir| dir.join(GOLDEN_DIR))
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| panic!("no {GOLDEN_DIR} above {manifest_dir}"))
}

/// Deserialize a fixture given its path relative to `golden/`.
///
/// # Panics
/// Panics if the file is missing or doesn't match `T`.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = golden_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read {}: {e}", path.display()));
    serde_json::from_str(&content).unwrap_or_else(|e| panic!("parse {}: {e}", path.display()))
}

/// Sorted `golden/`-relative paths of the `.json` files in `relative_dir`.
pub fn list_fixtures(relative_dir: &str) -> Vec<String> {
    let dir = golden_root().join(relative_dir);
    let mut names: Vec<String> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("read {}: {e}", dir.display()))
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".json"))
        .map(|name| format!("{}/{name}", relative_dir.trim_end_matches('/')))
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scenario_has_input_and_expected() {
        let scenarios = list_fixtures("scenarios");
        assert!(!scenarios.is_empty());
        for path in scenarios {
            let value: serde_json::Value = load_fixture(&path);
            assert!(value["input"].is_object(), "{path} missing input");
            assert!(value["expected"].is_object(), "{path} missing expected");
        }
    }
}
