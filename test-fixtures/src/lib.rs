//! Test fixture loader for PC golden datasets.
//!
//! Provides typed deserialization of the golden JSON scenarios and helper
//! functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// One golden PC scenario: a generating DAG and the expected output when
/// the skeleton is estimated with a d-separation oracle on that DAG.
#[derive(Debug, Clone, Deserialize)]
pub struct PcScenario {
    pub name: String,
    pub description: String,
    pub num_variables: usize,
    /// Generating DAG arcs `(from, to)`.
    pub dag: Vec<(usize, usize)>,
    pub alpha: f64,
    pub expected: PcExpected,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PcExpected {
    /// Skeleton edges `(low, high)`, ascending.
    pub skeleton: Vec<(usize, usize)>,
    pub separation_sets: Vec<ExpectedSeparation>,
    /// Directed arcs `(from, to)`, ascending.
    pub arcs: Vec<(usize, usize)>,
    /// Undirected edges `(low, high)`, ascending.
    pub undirected: Vec<(usize, usize)>,
    /// Arc-list rendering with undirected edges as opposite pairs.
    #[serde(default)]
    pub arc_list: Option<Vec<(usize, usize)>>,
    pub stats: ExpectedStats,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedSeparation {
    pub pair: (usize, usize),
    pub set: Vec<usize>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ExpectedStats {
    pub colliders: usize,
    pub rule1: usize,
    pub rule2: usize,
    pub rule3: usize,
}

/// Load a scenario from `golden/pc/<name>.json`.
pub fn load_pc_scenario(name: &str) -> PcScenario {
    load_fixture(&format!("golden/pc/{name}.json"))
}

/// Every scenario under `golden/pc`, sorted by file name.
pub fn all_pc_scenarios() -> Vec<PcScenario> {
    list_fixtures("golden/pc")
        .into_iter()
        .map(|path| {
            let content = std::fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
            serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e))
        })
        .collect()
}
