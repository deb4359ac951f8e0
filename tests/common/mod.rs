//! Test case loading utilities for integration tests.
//!
//! For assertion helpers, use `fathom_vectors::testing`.

#![allow(dead_code)]

use std::path::PathBuf;

use fathom_vectors::VectorizerOutput;

/// Base directory for test cases.
pub fn test_cases_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/test-cases")
}

/// Path of a named fixture, e.g. `"product_pages"`.
pub fn case_path(name: &str) -> PathBuf {
    test_cases_dir().join(format!("{name}.json"))
}

/// Load a vectorizer fixture by name.
pub fn load_corpus(name: &str) -> VectorizerOutput {
    let path = case_path(name);
    VectorizerOutput::from_path(&path)
        .unwrap_or_else(|e| panic!("Failed to load {}: {e}", path.display()))
}

/// Route `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
