//! Loads vector suites from the JSON files shipped with this crate

use super::error::Result;
use super::model::TestSuite;
use std::fs;
use std::path::{Path, PathBuf};

fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("vectors")
}

/// Load `src/vectors/<name>.json` and push group defaults down to cases
pub fn load_suite_by_name(name: &str) -> Result<TestSuite> {
    let path = vectors_dir().join(format!("{}.json", name));
    let json = fs::read_to_string(&path)?;
    let mut suite: TestSuite = serde_json::from_str(&json)?;

    for group in &mut suite.groups {
        for case in &mut group.tests {
            for (key, value) in &group.defaults {
                case.inputs
                    .entry(key.clone())
                    .or_insert_with(|| value.clone());
            }
        }
    }
    tracing::debug!(
        suite = name,
        groups = suite.groups.len(),
        "loaded vector suite"
    );
    Ok(suite)
}
