//! Construction of fresh, untrained classifiers.

use derive_builder::Builder;
use ndarray::Array2;
use rand::distributions::{Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use super::error::ModelError;
use super::linear::LinearModel;

/// Parameter initialization scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Init {
    /// Weights and biases drawn from `U(-k, k)` with `k = 1/sqrt(n_inputs)`,
    /// the usual default for fully-connected layers.
    #[default]
    Uniform,
    /// All parameters zero.
    Zeros,
}

/// Classifier construction settings.
///
/// # Example
///
/// ```
/// use fathom_vectors::model::{ClassifierConfig, Init};
///
/// let config = ClassifierConfig::builder()
///     .init(Init::Uniform)
///     .seed(42u64)
///     .build()
///     .unwrap();
///
/// let model = config.build_model(5).unwrap();
/// assert_eq!(model.n_features(), 5);
/// assert_eq!(model.n_outputs(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into), default)]
pub struct ClassifierConfig {
    /// Number of outputs. 1 for a binary classifier.
    #[builder(default = "1")]
    pub n_outputs: usize,

    #[builder(default)]
    pub init: Init,

    /// Seed for parameter initialization. `None` draws from the thread RNG.
    #[builder(default)]
    pub seed: Option<u64>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            n_outputs: 1,
            init: Init::default(),
            seed: None,
        }
    }
}

impl ClassifierConfig {
    pub fn builder() -> ClassifierConfigBuilder {
        ClassifierConfigBuilder::default()
    }

    /// Build a model taking `n_inputs` features.
    pub fn build_model(&self, n_inputs: usize) -> Result<LinearModel, ModelError> {
        match self.seed {
            Some(seed) => {
                let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                build(n_inputs, self.n_outputs, self.init, &mut rng)
            }
            None => build(n_inputs, self.n_outputs, self.init, &mut rand::thread_rng()),
        }
    }
}

/// Return a new, randomly initialized linear classifier.
///
/// The model is a single affine layer mapping `n_inputs` features to
/// `n_outputs` logits, with bias and no activation.
///
/// # Errors
///
/// [`ModelError::ZeroDimension`] if either dimension is zero.
pub fn classifier(n_inputs: usize, n_outputs: usize) -> Result<LinearModel, ModelError> {
    classifier_with_rng(n_inputs, n_outputs, &mut rand::thread_rng())
}

/// Like [`classifier`], drawing initial parameters from `rng`.
pub fn classifier_with_rng<R: Rng + ?Sized>(
    n_inputs: usize,
    n_outputs: usize,
    rng: &mut R,
) -> Result<LinearModel, ModelError> {
    build(n_inputs, n_outputs, Init::Uniform, rng)
}

fn build<R: Rng + ?Sized>(
    n_inputs: usize,
    n_outputs: usize,
    init: Init,
    rng: &mut R,
) -> Result<LinearModel, ModelError> {
    if n_inputs == 0 || n_outputs == 0 {
        return Err(ModelError::ZeroDimension {
            n_inputs,
            n_outputs,
        });
    }

    let shape = (n_inputs + 1, n_outputs);
    let weights = match init {
        Init::Zeros => Array2::zeros(shape),
        Init::Uniform => {
            let bound = 1.0 / (n_inputs as f32).sqrt();
            let dist = Uniform::new_inclusive(-bound, bound);
            Array2::from_shape_simple_fn(shape, || dist.sample(rng))
        }
    };

    tracing::debug!(n_inputs, n_outputs, ?init, "constructed linear classifier");

    Ok(LinearModel::from_array(weights))
}
