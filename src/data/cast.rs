//! Casting nested sequences into dense `f32` arrays.

use ndarray::Array2;

use super::error::DatasetError;

/// Cast a sequence of rows into a row-major `[n_rows, n_cols]` matrix.
///
/// Every row must have the same length as the first. An empty sequence
/// yields a `(0, 0)` matrix.
///
/// # Example
///
/// ```
/// use fathom_vectors::data::to_matrix;
///
/// let m = to_matrix(&[vec![1.0f32, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(m.dim(), (2, 2));
/// assert_eq!(m[[1, 0]], 3.0);
/// ```
pub fn to_matrix<R: AsRef<[f32]>>(rows: &[R]) -> Result<Array2<f32>, DatasetError> {
    let Some(first) = rows.first() else {
        return Ok(Array2::zeros((0, 0)));
    };

    let n_cols = first.as_ref().len();
    let mut flat = Vec::with_capacity(rows.len() * n_cols);

    for (row_idx, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != n_cols {
            return Err(DatasetError::RaggedRows {
                row: row_idx,
                expected: n_cols,
                got: row.len(),
            });
        }
        flat.extend_from_slice(row);
    }

    Ok(Array2::from_shape_vec((rows.len(), n_cols), flat)?)
}
