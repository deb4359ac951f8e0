//! Single-layer linear model.

use ndarray::{s, Array2, ArrayView1, ArrayView2};

use super::error::ModelError;

/// A fully-connected affine layer with bias and no activation.
///
/// Stores a weight matrix with shape `[n_features + 1, n_outputs]`:
///
/// ```text
/// weights[[feature, output]] → coefficient
/// weights[[n_features, output]] → bias (last row)
/// ```
///
/// so that `forward(x) = x · weights[:-1, :] + weights[-1, :]`.
/// Outputs are raw logits; apply [`sigmoid`](crate::eval::sigmoid) to get
/// probabilities.
///
/// # Example
///
/// ```
/// use fathom_vectors::model::LinearModel;
/// use ndarray::array;
///
/// // y = 0.5*x0 - 0.25*x1 + 0.1
/// let model = LinearModel::from_array(array![[0.5], [-0.25], [0.1]]);
///
/// let out = model.forward_row(&[2.0, 4.0]).unwrap();
/// assert!((out[0] - 0.1).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    /// Shape `[n_features + 1, n_outputs]`; last row is the bias.
    weights: Array2<f32>,
}

impl LinearModel {
    /// Create a model from a stacked weight/bias matrix.
    ///
    /// # Panics
    ///
    /// Panics if the array has no rows (the bias row is required).
    pub fn from_array(weights: Array2<f32>) -> Self {
        assert!(
            weights.nrows() >= 1,
            "weights must have at least 1 row (bias)"
        );
        Self { weights }
    }

    /// Create a zero-initialized model.
    pub fn zeros(n_features: usize, n_outputs: usize) -> Self {
        Self {
            weights: Array2::zeros((n_features + 1, n_outputs)),
        }
    }

    /// Number of input features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.weights.nrows() - 1
    }

    /// Number of outputs.
    #[inline]
    pub fn n_outputs(&self) -> usize {
        self.weights.ncols()
    }

    #[inline]
    pub fn weight(&self, feature: usize, output: usize) -> f32 {
        self.weights[[feature, output]]
    }

    #[inline]
    pub fn bias(&self, output: usize) -> f32 {
        self.weights[[self.n_features(), output]]
    }

    /// All biases, length `n_outputs`.
    #[inline]
    pub fn biases(&self) -> ArrayView1<'_, f32> {
        self.weights.row(self.n_features())
    }

    /// Coefficients without the bias row: `[n_features, n_outputs]`.
    #[inline]
    pub fn weight_matrix(&self) -> ArrayView2<'_, f32> {
        self.weights.slice(s![..self.n_features(), ..])
    }

    #[inline]
    pub fn set_weight(&mut self, feature: usize, output: usize, value: f32) {
        self.weights[[feature, output]] = value;
    }

    #[inline]
    pub fn set_bias(&mut self, output: usize, value: f32) {
        let n_features = self.n_features();
        self.weights[[n_features, output]] = value;
    }

    /// Evaluate a batch of sample-major rows.
    ///
    /// `inputs` has shape `[n_rows, n_features]`; the result has shape
    /// `[n_rows, n_outputs]`. A zero-row input yields a zero-row output
    /// regardless of its column count.
    pub fn forward(&self, inputs: ArrayView2<'_, f32>) -> Result<Array2<f32>, ModelError> {
        if inputs.nrows() == 0 {
            return Ok(Array2::zeros((0, self.n_outputs())));
        }
        self.check_width(inputs.ncols())?;

        let mut output = inputs.dot(&self.weight_matrix());
        output += &self.biases();
        Ok(output)
    }

    /// Evaluate a single feature vector. Returns `n_outputs` logits.
    pub fn forward_row(&self, features: &[f32]) -> Result<Vec<f32>, ModelError> {
        self.check_width(features.len())?;

        let outputs = (0..self.n_outputs())
            .map(|output| {
                features
                    .iter()
                    .enumerate()
                    .fold(self.bias(output), |sum, (feat_idx, &value)| {
                        sum + value * self.weight(feat_idx, output)
                    })
            })
            .collect();
        Ok(outputs)
    }

    fn check_width(&self, got: usize) -> Result<(), ModelError> {
        if got != self.n_features() {
            return Err(ModelError::FeatureMismatch {
                expected: self.n_features(),
                got,
            });
        }
        Ok(())
    }
}
