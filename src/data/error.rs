//! Dataset construction errors.

/// Errors raised while casting records into matrices.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DatasetError {
    #[error("inconsistent row length: row {row} has {got} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid matrix shape: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
