//! Labeled page corpora.
//!
//! A corpus is a list of [`Page`]s, each holding the candidate DOM nodes a
//! ruleset considered, with their feature vectors and ground-truth labels.
//! Pages usually arrive as vectorizer JSON ([`VectorizerOutput`]), but any
//! type implementing [`PageRecord`] / [`NodeRecord`] can be flattened into a
//! training set.

mod error;
mod page;
mod vectorizer;

pub use error::CorpusError;
pub use page::{Node, NodeRecord, Page, PageRecord};
pub use vectorizer::{Header, VectorizerOutput};
