//! Test fixture loader for monitor golden datasets.
//!
//! A scenario is a directory under `golden/` holding the four input JSONL
//! files of a monitoring run plus an `expected.json` with the numbers the
//! analyses must reproduce.

use std::path::PathBuf;

use ashwam_core::record::{ExtractionRecord, Journal};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    if path.ends_with("test-fixtures") {
        return path;
    }
    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Get the absolute path to a fixture file or directory.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Directory of a golden scenario, e.g. `scenario_dir("baseline")`.
pub fn scenario_dir(name: &str) -> PathBuf {
    fixture_path(&format!("golden/{name}"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> Value {
    load_fixture(relative_path)
}

/// Load every non-blank line of a JSONL fixture as a raw JSON value.
///
/// # Panics
/// Panics on a missing file or an unparsable line; fixtures must be clean.
pub fn load_jsonl_values(relative_path: &str) -> Vec<Value> {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            serde_json::from_str(line).unwrap_or_else(|e| {
                panic!("Failed to parse {} line {}: {}", path.display(), n + 1, e)
            })
        })
        .collect()
}

/// Load a JSONL fixture of parser outputs or gold labels.
pub fn load_records(relative_path: &str) -> Vec<ExtractionRecord> {
    load_jsonl_values(relative_path)
        .iter()
        .map(ExtractionRecord::from_value)
        .collect()
}

/// Load a JSONL fixture of journals, skipping lines without an id.
pub fn load_journals(relative_path: &str) -> Vec<Journal> {
    load_jsonl_values(relative_path)
        .iter()
        .filter_map(Journal::from_value)
        .collect()
}

/// The four input collections of a golden scenario.
pub struct Scenario {
    pub journals: Vec<Journal>,
    pub day0: Vec<ExtractionRecord>,
    pub day1: Vec<ExtractionRecord>,
    pub gold: Vec<ExtractionRecord>,
    pub expected: Value,
}

/// Load a full golden scenario by name.
pub fn load_scenario(name: &str) -> Scenario {
    let base = format!("golden/{name}");
    Scenario {
        journals: load_journals(&format!("{base}/journals.jsonl")),
        day0: load_records(&format!("{base}/parser_outputs_day0.jsonl")),
        day1: load_records(&format!("{base}/parser_outputs_day1.jsonl")),
        gold: load_records(&format!("{base}/gold.jsonl")),
        expected: load_fixture_value(&format!("{base}/expected.json")),
    }
}
