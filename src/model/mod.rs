//! Linear node classifiers.
//!
//! The classifier is a perceptron: one fully-connected layer with bias and
//! no activation. It produces raw logits; the sigmoid is applied by
//! evaluation code (see [`crate::eval`]), not by the model.
//!
//! # Key Types
//!
//! - [`LinearModel`]: weights + bias with `forward` evaluation
//! - [`classifier`]: factory for a freshly initialized model
//! - [`ClassifierConfig`]: initialization settings (outputs, scheme, seed)
//! - [`Coefficients`]: named weights for pasting into a ruleset

mod coeffs;
mod error;
mod factory;
mod linear;

pub use coeffs::Coefficients;
pub use error::ModelError;
pub use factory::{
    classifier, classifier_with_rng, ClassifierConfig, ClassifierConfigBuilder,
    ClassifierConfigBuilderError, Init,
};
pub use linear::LinearModel;
