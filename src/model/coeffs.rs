//! Coefficient reports for pasting into a ruleset.

use serde::{Deserialize, Serialize};

use super::error::ModelError;
use super::linear::LinearModel;

/// Per-feature coefficients and bias of a single-output model.
///
/// Serializes as
///
/// ```json
/// {"coeffs": [["linkDensity", -1.5], ["hasPrice", 2.25]], "bias": -0.5}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub coeffs: Vec<(String, f32)>,
    pub bias: f32,
}

impl Coefficients {
    /// Pair each feature weight with its name.
    ///
    /// `feature_names` must list exactly one name per model feature, in the
    /// same order as the training vectors.
    pub fn from_model<S: AsRef<str>>(
        model: &LinearModel,
        feature_names: &[S],
    ) -> Result<Self, ModelError> {
        if model.n_outputs() != 1 {
            return Err(ModelError::MultiOutput {
                n_outputs: model.n_outputs(),
            });
        }
        if feature_names.len() != model.n_features() {
            return Err(ModelError::FeatureMismatch {
                expected: model.n_features(),
                got: feature_names.len(),
            });
        }

        let coeffs = feature_names
            .iter()
            .zip(model.weight_matrix().column(0))
            .map(|(name, &w)| (name.as_ref().to_owned(), w))
            .collect();

        Ok(Self {
            coeffs,
            bias: model.bias(0),
        })
    }

    /// Coefficient for a named feature.
    pub fn get(&self, name: &str) -> Option<f32> {
        self.coeffs
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, w)| w)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
