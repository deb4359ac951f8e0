//! fathom-vectors: training data and linear classifiers for Fathom rulesets.
//!
//! Turns labeled pages exported by the vectorizer into dense feature
//! matrices and builds the single-layer linear model whose coefficients
//! become a ruleset's rule weights.
//!
//! # Key Types
//!
//! - [`Page`] / [`Node`] - Labeled page records ([`corpus`])
//! - [`VectorizerOutput`] - A corpus file with its feature names
//! - [`TrainingSet`] - Row-aligned `inputs` / `labels` matrices
//! - [`LinearModel`] - Perceptron with bias and no activation
//!
//! # Example
//!
//! ```
//! use fathom_vectors::{classifier, Node, Page, PageOrder, TrainingSet};
//!
//! let pages = vec![Page::new(vec![
//!     Node::target(vec![1.0, 2.0]),
//!     Node::candidate(vec![3.0, 4.0]),
//! ])];
//!
//! let set = TrainingSet::from_pages(&pages, PageOrder::Shuffled { seed: 42 }).unwrap();
//! let model = classifier(set.n_features(), 1).unwrap();
//!
//! let logits = model.forward(set.inputs.view()).unwrap();
//! assert_eq!(logits.dim(), (2, 1));
//! ```

// Re-export approx traits for users who want to compare predictions
pub use approx;

pub mod corpus;
pub mod data;
pub mod eval;
pub mod model;
pub mod testing;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use corpus::{CorpusError, Node, NodeRecord, Page, PageRecord, VectorizerOutput};
pub use data::{tensors_from, DatasetError, PageOrder, TrainingSet};
pub use eval::{
    accuracy_per_page, accuracy_per_tag, confidences, sigmoid, PageAccuracy, PageOutcome,
    TagAccuracy,
};
pub use model::{classifier, ClassifierConfig, Coefficients, LinearModel, ModelError};
