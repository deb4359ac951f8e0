//! Evaluation helpers for trained classifiers.
//!
//! The model itself emits logits. These helpers apply the sigmoid and score
//! accuracy two ways:
//!
//! - [`accuracy_per_tag`]: every node row against its label
//! - [`accuracy_per_page`]: whether the ruleset would pick the right node on
//!   each page, or stay quiet on a negative sample

use std::fmt;

use ndarray::{Array2, ArrayView2};

use crate::corpus::{NodeRecord, PageRecord};
use crate::model::{LinearModel, ModelError};

/// Logistic sigmoid.
#[inline]
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Probabilities `sigmoid(model(x))` for each row of `inputs`.
pub fn confidences(model: &LinearModel, inputs: ArrayView2<'_, f32>) -> Result<Array2<f32>, ModelError> {
    Ok(model.forward(inputs)?.mapv_into(sigmoid))
}

/// Per-tag classification results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagAccuracy {
    /// Fraction of tags classified correctly, in `[0, 1]`.
    pub accuracy: f64,
    pub n_samples: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

impl fmt::Display for TagAccuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.5}% ({} samples, {} false positives, {} false negatives)",
            self.accuracy * 100.0,
            self.n_samples,
            self.false_positives,
            self.false_negatives
        )
    }
}

/// Score logit predictions against `{0, 1}` labels, one tag per row.
///
/// Only column 0 is read from both matrices. A logit above zero
/// (probability above 0.5) counts as a positive prediction. Empty input
/// scores an accuracy of 0.
///
/// Fails with [`ModelError::RowMismatch`] if the two matrices have different
/// row counts.
pub fn accuracy_per_tag(
    labels: ArrayView2<'_, f32>,
    logits: ArrayView2<'_, f32>,
) -> Result<TagAccuracy, ModelError> {
    if labels.nrows() != logits.nrows() {
        return Err(ModelError::RowMismatch {
            expected: labels.nrows(),
            got: logits.nrows(),
        });
    }

    let n_samples = labels.nrows();
    if n_samples == 0 || labels.ncols() == 0 || logits.ncols() == 0 {
        return Ok(TagAccuracy {
            accuracy: 0.0,
            n_samples,
            false_positives: 0,
            false_negatives: 0,
        });
    }

    let (mut correct, mut false_positives, mut false_negatives) = (0usize, 0usize, 0usize);
    for (&label, &logit) in labels.column(0).iter().zip(logits.column(0).iter()) {
        let predicted = logit > 0.0;
        let actual = label >= 0.5;
        match (predicted, actual) {
            (true, false) => false_positives += 1,
            (false, true) => false_negatives += 1,
            _ => correct += 1,
        }
    }

    Ok(TagAccuracy {
        accuracy: correct as f64 / n_samples as f64,
        n_samples,
        false_positives,
        false_negatives,
    })
}

/// How the model fared on one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOutcome {
    /// Position of the page in the scored slice.
    pub index: usize,
    pub filename: Option<String>,
    pub n_targets: usize,
    /// Node index and confidence of the most confident node; `None` when the
    /// page has no nodes.
    pub top: Option<(usize, f32)>,
    pub top_is_target: bool,
    pub success: bool,
}

impl PageOutcome {
    /// A page with no targets, meant to bait a false positive.
    #[inline]
    pub fn is_negative_sample(&self) -> bool {
        self.n_targets == 0
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filename {
            Some(name) => write!(f, "{name}: ")?,
            None => write!(f, "page {}: ", self.index)?,
        }
        f.write_str(if self.success { "ok" } else { "FAILED" })?;

        match (self.is_negative_sample(), self.top) {
            (true, None) => write!(f, ", negative sample, no candidate nodes"),
            (true, Some((_, confidence))) => write!(
                f,
                ", negative sample, highest confidence {confidence:.4}"
            ),
            (false, Some((node, confidence))) => write!(
                f,
                ", highest confidence {confidence:.4} on {} node {node}",
                if self.top_is_target { "target" } else { "non-target" }
            ),
            (false, None) => Ok(()),
        }
    }
}

/// Per-page classification results.
#[derive(Debug, Clone, PartialEq)]
pub struct PageAccuracy {
    /// Fraction of pages scored a success, in `[0, 1]`.
    pub accuracy: f64,
    pub outcomes: Vec<PageOutcome>,
}

impl PageAccuracy {
    #[inline]
    pub fn n_pages(&self) -> usize {
        self.outcomes.len()
    }

    pub fn n_successes(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    /// One line per page, in scoring order.
    pub fn report(&self) -> String {
        self.outcomes
            .iter()
            .map(PageOutcome::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for PageAccuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.5}% ({} pages)",
            self.accuracy * 100.0,
            self.n_pages()
        )
    }
}

/// Score whole pages the way a ruleset consumes the model.
///
/// - A page with targets succeeds when its most confident node is a target.
///   Ties go to the earliest node.
/// - A negative sample succeeds when no node has a confidence above 0.5.
///   A page with no nodes is a negative sample and always succeeds.
///
/// An empty page slice scores an accuracy of 0. The model must have a single
/// output ([`ModelError::MultiOutput`]) and every node must match its feature
/// count ([`ModelError::FeatureMismatch`]).
pub fn accuracy_per_page<P: PageRecord>(
    model: &LinearModel,
    pages: &[P],
) -> Result<PageAccuracy, ModelError> {
    if model.n_outputs() != 1 {
        return Err(ModelError::MultiOutput {
            n_outputs: model.n_outputs(),
        });
    }

    let outcomes = pages
        .iter()
        .enumerate()
        .map(|(index, page)| score_page(model, index, page))
        .collect::<Result<Vec<_>, _>>()?;

    let n_successes = outcomes.iter().filter(|o| o.success).count();
    let accuracy = if outcomes.is_empty() {
        0.0
    } else {
        n_successes as f64 / outcomes.len() as f64
    };

    tracing::debug!(
        pages = outcomes.len(),
        successes = n_successes,
        "scored pages"
    );

    Ok(PageAccuracy { accuracy, outcomes })
}

fn score_page<P: PageRecord>(
    model: &LinearModel,
    index: usize,
    page: &P,
) -> Result<PageOutcome, ModelError> {
    let nodes = page.nodes();
    let n_features = model.n_features();
    if let Some(node) = nodes.iter().find(|n| n.features().len() != n_features) {
        return Err(ModelError::FeatureMismatch {
            expected: n_features,
            got: node.features().len(),
        });
    }

    let inputs = Array2::from_shape_fn((nodes.len(), n_features), |(row, col)| {
        nodes[row].features()[col]
    });
    let probs = confidences(model, inputs.view())?;

    let mut top: Option<(usize, f32)> = None;
    for (node, &confidence) in probs.column(0).iter().enumerate() {
        if top.map_or(true, |(_, best)| confidence > best) {
            top = Some((node, confidence));
        }
    }

    let n_targets = nodes.iter().filter(|n| n.is_target()).count();
    let top_is_target = top.is_some_and(|(node, _)| nodes[node].is_target());
    let success = if n_targets == 0 {
        top.map_or(true, |(_, confidence)| confidence <= 0.5)
    } else {
        top_is_target
    };

    Ok(PageOutcome {
        index,
        filename: page.filename().map(str::to_owned),
        n_targets,
        top,
        top_is_target,
        success,
    })
}
