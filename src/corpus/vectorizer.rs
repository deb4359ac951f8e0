//! Vectorizer output files.
//!
//! The browser-side vectorizer exports one JSON document per corpus:
//!
//! ```json
//! {
//!   "header": {"featureNames": ["linkDensity", "hasPrice"]},
//!   "pages": [
//!     {"filename": "shop.html", "nodes": [{"features": [0.1, 1], "isTarget": true}]}
//!   ]
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::CorpusError;
use super::page::Page;
use crate::data::{DatasetError, PageOrder, TrainingSet};

/// Corpus-wide metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Names of the ruleset features, in the order each node's feature
    /// vector lists them.
    pub feature_names: Vec<String>,
}

/// A labeled corpus as exported by the vectorizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorizerOutput {
    pub header: Header,
    pub pages: Vec<Page>,
}

impl VectorizerOutput {
    /// Parse from any reader. Does not validate feature counts; call
    /// [`validate`](Self::validate) for that.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CorpusError> {
        let output: Self = serde_json::from_reader(reader)?;
        tracing::debug!(
            pages = output.pages.len(),
            features = output.n_features(),
            "parsed vectorizer output"
        );
        Ok(output)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CorpusError> {
        Self::from_reader(json.as_bytes())
    }

    /// Read and parse a vectorizer file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Number of features declared by the header.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.header.feature_names.len()
    }

    /// Total number of nodes across all pages.
    pub fn n_nodes(&self) -> usize {
        self.pages.iter().map(Page::n_nodes).sum()
    }

    /// Check that every node carries exactly one value per header feature.
    pub fn validate(&self) -> Result<(), CorpusError> {
        let expected = self.n_features();
        for (page_idx, page) in self.pages.iter().enumerate() {
            for (node_idx, node) in page.nodes.iter().enumerate() {
                if node.features.len() != expected {
                    return Err(CorpusError::FeatureCount {
                        page: page_idx,
                        node: node_idx,
                        expected,
                        got: node.features.len(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Flatten the pages into training matrices.
    pub fn training_set(&self, order: PageOrder) -> Result<TrainingSet, DatasetError> {
        TrainingSet::from_pages(&self.pages, order)
    }
}
