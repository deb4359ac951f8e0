//! Feature matrices for node classification.
//!
//! This module turns labeled pages into the dense matrices a trainer
//! consumes.
//!
//! # Overview
//!
//! - [`to_matrix`]: cast nested rows into a row-major `Array2<f32>`
//! - [`TrainingSet`]: row-aligned `inputs` / `labels` plus the target count
//! - [`PageOrder`]: keep page order or shuffle whole pages
//!
//! # Layout
//!
//! Unlike feature-major training buffers, both matrices here are
//! **sample-major**: `[n_nodes, n_features]` and `[n_nodes, 1]`.

mod cast;
mod dataset;
mod error;

pub use cast::to_matrix;
pub use dataset::{tensors_from, PageOrder, TrainingSet, NON_TARGET_LABEL, TARGET_LABEL};
pub use error::DatasetError;
