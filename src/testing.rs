//! Testing utilities for fathom-vectors.
//!
//! Assertion helpers shared by unit tests, integration tests and benches,
//! plus a small generator for synthetic corpora.
//!
//! ```ignore
//! use fathom_vectors::testing::{assert_matrix_approx_eq, DEFAULT_TOLERANCE};
//! ```

use ndarray::ArrayView2;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::corpus::{Node, Page};

/// Default tolerance for floating point comparisons of O(1) values.
pub const DEFAULT_TOLERANCE: f32 = 1e-5;

/// Assert that two f32 values are approximately equal.
///
/// # Examples
///
/// ```
/// # use fathom_vectors::assert_approx_eq;
/// assert_approx_eq!(1.0f32, 1.0001f32, 0.001);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let left_val: f32 = $left;
        let right_val: f32 = $right;
        let tol: f32 = $tolerance;
        let diff = (left_val - right_val).abs();
        if diff > tol {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`\n right: `{:?}`\n  diff: `{:?}` > tolerance `{:?}`",
                left_val, right_val, diff, tol
            );
        }
    }};
}

/// Assert that two matrices have the same shape and approximately equal
/// elements.
pub fn assert_matrix_approx_eq(
    actual: ArrayView2<'_, f32>,
    expected: ArrayView2<'_, f32>,
    tolerance: f32,
    context: &str,
) {
    assert_eq!(
        actual.dim(),
        expected.dim(),
        "{context}: shape mismatch - got {:?}, expected {:?}",
        actual.dim(),
        expected.dim()
    );

    for ((idx, a), e) in actual.indexed_iter().zip(expected.iter()) {
        let diff = (a - e).abs();
        assert!(
            diff <= tolerance,
            "{context}{idx:?}: {a} ≠ {e} (diff={diff}, tolerance={tolerance})"
        );
    }
}

/// Generate `n_pages` pages of random nodes with `n_features` features.
///
/// Each page holds 1 to `max_nodes` nodes. Each node is a target with
/// probability `target_rate`.
pub fn synthetic_pages(
    n_pages: usize,
    max_nodes: usize,
    n_features: usize,
    target_rate: f64,
    seed: u64,
) -> Vec<Page> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..n_pages)
        .map(|_| {
            let n_nodes = rng.gen_range(1..=max_nodes.max(1));
            let nodes = (0..n_nodes)
                .map(|_| {
                    let features = (0..n_features).map(|_| rng.gen::<f32>()).collect();
                    Node::new(features, rng.gen_bool(target_rate))
                })
                .collect();
            Page::new(nodes)
        })
        .collect()
}
