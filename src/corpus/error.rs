//! Corpus loading errors.

use std::path::PathBuf;

/// Errors raised while reading or validating vectorizer output.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed vectorizer output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("page {page}, node {node}: expected {expected} features, got {got}")]
    FeatureCount {
        page: usize,
        node: usize,
        expected: usize,
        got: usize,
    },
}
