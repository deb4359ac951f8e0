//! Model construction and evaluation errors.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("model dimensions must be positive: {n_inputs} inputs, {n_outputs} outputs")]
    ZeroDimension { n_inputs: usize, n_outputs: usize },

    #[error("expected {expected} features, got {got}")]
    FeatureMismatch { expected: usize, got: usize },

    #[error("expected a single-output model, got {n_outputs} outputs")]
    MultiOutput { n_outputs: usize },

    #[error("expected {expected} rows, got {got}")]
    RowMismatch { expected: usize, got: usize },
}
