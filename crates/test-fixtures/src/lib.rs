//! Test fixture loader for biosearch corpora and golden query sets.
//!
//! Fixture files live in the workspace-level `test-fixtures/` directory:
//! `corpora/*.csv` for corpus sources, `golden/*.json` for expected rankings.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("corpora").exists() {
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

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Absolute path of a corpus CSV under `corpora/`.
pub fn corpus_path(name: &str) -> PathBuf {
    fixtures_root().join("corpora").join(name)
}

/// One golden query and the document id expected at rank 1.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenQuery {
    pub query: String,
    pub expected_first: u64,
}

/// A golden query set bound to one corpus fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenSet {
    /// Corpus path relative to the fixtures root.
    pub corpus: String,
    /// Hashing-provider dimensions the expectations were computed with.
    pub embedding_dimensions: usize,
    pub queries: Vec<GoldenQuery>,
}

/// Load `golden/queries.json`.
pub fn golden_queries() -> GoldenSet {
    load_fixture("golden/queries.json")
}
