//! Training matrices built from labeled pages.

use ndarray::Array2;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use super::cast::to_matrix;
use super::error::DatasetError;
use crate::corpus::{NodeRecord, PageRecord};

/// Label value for a target node.
pub const TARGET_LABEL: f32 = 1.0;

/// Label value for a non-target node.
///
/// Labels are hard 0/1. Softened labels such as 0.1/0.9 trained much worse.
pub const NON_TARGET_LABEL: f32 = 0.0;

/// Order in which pages are flattened.
///
/// Shuffling permutes whole pages; nodes within a page always keep their
/// document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageOrder {
    /// Pages in the order given.
    #[default]
    Given,
    /// A full random permutation of the pages, reproducible from `seed`.
    Shuffled { seed: u64 },
}

impl PageOrder {
    /// Shuffled order with a freshly drawn seed.
    pub fn shuffled() -> Self {
        Self::Shuffled {
            seed: rand::random(),
        }
    }

    #[inline]
    pub fn is_shuffled(&self) -> bool {
        matches!(self, Self::Shuffled { .. })
    }
}

/// Row-aligned input and label matrices for a binary node classifier.
///
/// - `inputs`: `[n_nodes, n_features]`, one row per node
/// - `labels`: `[n_nodes, 1]`, [`TARGET_LABEL`] or [`NON_TARGET_LABEL`]
///
/// When there are no nodes at all `inputs` is `(0, 0)`, since no feature
/// width is known, while `labels` keeps its single column as `(0, 1)`.
///
/// # Example
///
/// ```
/// use fathom_vectors::corpus::{Node, Page};
/// use fathom_vectors::data::{PageOrder, TrainingSet};
/// use ndarray::array;
///
/// let pages = vec![Page::new(vec![
///     Node::target(vec![1.0, 2.0]),
///     Node::candidate(vec![3.0, 4.0]),
/// ])];
/// let set = TrainingSet::from_pages(&pages, PageOrder::Given).unwrap();
///
/// assert_eq!(set.inputs, array![[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(set.labels, array![[1.0], [0.0]]);
/// assert_eq!(set.n_targets, 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet {
    pub inputs: Array2<f32>,
    pub labels: Array2<f32>,
    /// Number of nodes labeled as targets.
    pub n_targets: usize,
}

impl TrainingSet {
    /// Flatten pages into training matrices.
    pub fn from_pages<P: PageRecord>(pages: &[P], order: PageOrder) -> Result<Self, DatasetError> {
        match order {
            PageOrder::Given => Self::flatten(pages.iter(), false),
            PageOrder::Shuffled { seed } => {
                let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                Self::from_pages_with_rng(pages, &mut rng)
            }
        }
    }

    /// Flatten pages in an order drawn from `rng`.
    ///
    /// The permutation covers every page exactly once.
    pub fn from_pages_with_rng<P, R>(pages: &[P], rng: &mut R) -> Result<Self, DatasetError>
    where
        P: PageRecord,
        R: Rng + ?Sized,
    {
        let mut permuted: Vec<&P> = pages.iter().collect();
        permuted.shuffle(rng);
        Self::flatten(permuted.into_iter(), true)
    }

    fn flatten<'a, P, I>(pages: I, shuffled: bool) -> Result<Self, DatasetError>
    where
        P: PageRecord + 'a,
        I: Iterator<Item = &'a P>,
    {
        let mut xs: Vec<&'a [f32]> = Vec::new();
        let mut ys: Vec<f32> = Vec::new();
        let mut n_targets = 0;

        for page in pages {
            for node in page.nodes() {
                xs.push(node.features());
                if node.is_target() {
                    ys.push(TARGET_LABEL);
                    n_targets += 1;
                } else {
                    ys.push(NON_TARGET_LABEL);
                }
            }
        }

        let inputs = to_matrix(&xs)?;
        let labels = Array2::from_shape_vec((ys.len(), 1), ys)?;

        tracing::debug!(
            rows = inputs.nrows(),
            features = inputs.ncols(),
            targets = n_targets,
            shuffled,
            "built training set"
        );

        Ok(Self {
            inputs,
            labels,
            n_targets,
        })
    }

    /// Number of node rows.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.inputs.nrows()
    }

    /// Feature vector length (0 when there are no rows).
    #[inline]
    pub fn n_features(&self) -> usize {
        self.inputs.ncols()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    /// Split into `(inputs, labels, n_targets)`.
    pub fn into_parts(self) -> (Array2<f32>, Array2<f32>, usize) {
        (self.inputs, self.labels, self.n_targets)
    }
}

/// Return `(inputs, labels, n_targets)` for a set of pages.
///
/// Shorthand for [`TrainingSet::from_pages`] followed by
/// [`TrainingSet::into_parts`].
pub fn tensors_from<P: PageRecord>(
    pages: &[P],
    order: PageOrder,
) -> Result<(Array2<f32>, Array2<f32>, usize), DatasetError> {
    TrainingSet::from_pages(pages, order).map(TrainingSet::into_parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Node, Page};
    use ndarray::array;

    /// Page `p` holds `n` nodes whose features are `[p, node_idx]`.
    fn tagged_pages(sizes: &[usize]) -> Vec<Page> {
        sizes
            .iter()
            .enumerate()
            .map(|(p, &n)| {
                Page::new(
                    (0..n)
                        .map(|i| Node::new(vec![p as f32, i as f32], i % 2 == 0))
                        .collect(),
                )
            })
            .collect()
    }

    #[test]
    fn single_page_example() {
        let pages = vec![Page::new(vec![
            Node::target(vec![1.0, 2.0]),
            Node::candidate(vec![3.0, 4.0]),
        ])];

        let (inputs, labels, n_targets) = tensors_from(&pages, PageOrder::Given).unwrap();

        assert_eq!(inputs, array![[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(labels, array![[1.0], [0.0]]);
        assert_eq!(n_targets, 1);
    }

    #[test]
    fn given_order_follows_pages_then_nodes() {
        let pages = tagged_pages(&[2, 1, 3]);
        let set = TrainingSet::from_pages(&pages, PageOrder::Given).unwrap();

        let expected = array![
            [0.0, 0.0],
            [0.0, 1.0],
            [1.0, 0.0],
            [2.0, 0.0],
            [2.0, 1.0],
            [2.0, 2.0]
        ];
        assert_eq!(set.inputs, expected);
        assert_eq!(set.labels, array![[1.0], [0.0], [1.0], [1.0], [0.0], [1.0]]);
        assert_eq!(set.n_targets, 4);
    }

    #[test]
    fn no_pages_gives_zero_rows() {
        let pages: Vec<Page> = Vec::new();
        let set = TrainingSet::from_pages(&pages, PageOrder::Given).unwrap();

        assert!(set.is_empty());
        assert_eq!(set.inputs.dim(), (0, 0));
        assert_eq!(set.labels.dim(), (0, 1));
        assert_eq!(set.n_targets, 0);
    }

    #[test]
    fn pages_without_nodes_give_zero_rows() {
        let pages = vec![Page::default(), Page::default()];
        let set = TrainingSet::from_pages(&pages, PageOrder::Shuffled { seed: 3 }).unwrap();

        assert_eq!(set.n_rows(), 0);
        assert_eq!(set.labels.dim(), (0, 1));
        assert_eq!(set.n_targets, 0);
    }

    #[test]
    fn empty_set_still_names_one_output() {
        let set = TrainingSet::from_pages(&[Page::default()], PageOrder::Given).unwrap();

        assert_eq!(set.labels.ncols(), 1);
        assert_eq!(
            crate::model::classifier(set.n_features(), set.labels.ncols()).unwrap_err(),
            crate::model::ModelError::ZeroDimension {
                n_inputs: 0,
                n_outputs: 1
            }
        );
    }

    #[test]
    fn ragged_features_fail_at_traversal_index() {
        let pages = vec![
            Page::new(vec![Node::target(vec![1.0, 2.0])]),
            Page::new(vec![
                Node::candidate(vec![3.0, 4.0]),
                Node::candidate(vec![5.0]),
            ]),
        ];

        match TrainingSet::from_pages(&pages, PageOrder::Given) {
            Err(DatasetError::RaggedRows { row, expected, got }) => {
                assert_eq!((row, expected, got), (2, 2, 1));
            }
            other => panic!("expected RaggedRows, got {other:?}"),
        }
    }

    #[test]
    fn same_seed_same_order() {
        let pages = tagged_pages(&[1, 2, 3, 4, 5]);
        let a = TrainingSet::from_pages(&pages, PageOrder::Shuffled { seed: 7 }).unwrap();
        let b = TrainingSet::from_pages(&pages, PageOrder::Shuffled { seed: 7 }).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_permutes_whole_pages() {
        let sizes = [3, 1, 4, 1, 5, 2, 6];
        let pages = tagged_pages(&sizes);
        let given = TrainingSet::from_pages(&pages, PageOrder::Given).unwrap();

        let mut any_reordered = false;
        for seed in 0..16 {
            let set = TrainingSet::from_pages(&pages, PageOrder::Shuffled { seed }).unwrap();
            assert_eq!(set.n_rows(), given.n_rows());
            assert_eq!(set.n_targets, given.n_targets);

            // Each page appears as one contiguous block with node indices 0..n.
            let mut seen = vec![false; sizes.len()];
            let mut row = 0;
            while row < set.n_rows() {
                let page = set.inputs[[row, 0]] as usize;
                assert!(!seen[page], "page {page} split across blocks");
                seen[page] = true;
                for node in 0..sizes[page] {
                    assert_eq!(set.inputs[[row + node, 0]] as usize, page);
                    assert_eq!(set.inputs[[row + node, 1]] as usize, node);
                }
                row += sizes[page];
            }
            assert!(seen.iter().all(|&s| s));

            any_reordered |= set.inputs != given.inputs;
        }
        assert!(any_reordered);
    }

    #[test]
    fn injected_rng_is_used() {
        let pages = tagged_pages(&[1, 1, 1, 1, 1, 1, 1, 1]);
        let mut rng_a = Xoshiro256PlusPlus::seed_from_u64(11);
        let mut rng_b = Xoshiro256PlusPlus::seed_from_u64(11);

        let a = TrainingSet::from_pages_with_rng(&pages, &mut rng_a).unwrap();
        let b = TrainingSet::from_pages_with_rng(&pages, &mut rng_b).unwrap();
        let c = TrainingSet::from_pages(&pages, PageOrder::Shuffled { seed: 11 }).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn borrowed_pages() {
        let pages = tagged_pages(&[2, 2]);
        let refs: Vec<&Page> = pages.iter().rev().collect();
        let set = TrainingSet::from_pages(&refs, PageOrder::Given).unwrap();
        assert_eq!(set.inputs[[0, 0]], 1.0);
        assert_eq!(set.inputs[[2, 0]], 0.0);
    }

    #[test]
    fn shuffled_flag() {
        assert!(!PageOrder::Given.is_shuffled());
        assert!(PageOrder::shuffled().is_shuffled());
        assert_eq!(PageOrder::default(), PageOrder::Given);
    }
}
