//! Page and node records.

use serde::{Deserialize, Serialize};

/// Read access to a labeled DOM node.
///
/// Implement this for your own node type to feed it into
/// [`TrainingSet::from_pages`](crate::data::TrainingSet::from_pages) without
/// converting to [`Node`] first.
pub trait NodeRecord {
    /// Feature vector, in header order.
    fn features(&self) -> &[f32];

    /// Whether this node is a recognition target.
    fn is_target(&self) -> bool;
}

/// Read access to a page of labeled nodes.
pub trait PageRecord {
    type Node: NodeRecord;

    /// Nodes in document order.
    fn nodes(&self) -> &[Self::Node];

    /// Source file name, shown in per-page reports.
    fn filename(&self) -> Option<&str> {
        None
    }
}

/// A single candidate DOM node with its precomputed features and label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Feature values, one per header feature name.
    pub features: Vec<f32>,
    /// Ground truth: `true` if the ruleset should recognize this node.
    pub is_target: bool,
}

impl Node {
    pub fn new(features: Vec<f32>, is_target: bool) -> Self {
        Self {
            features,
            is_target,
        }
    }

    /// Shorthand for a positive node.
    pub fn target(features: Vec<f32>) -> Self {
        Self::new(features, true)
    }

    /// Shorthand for a negative node.
    pub fn candidate(features: Vec<f32>) -> Self {
        Self::new(features, false)
    }
}

impl NodeRecord for Node {
    #[inline]
    fn features(&self) -> &[f32] {
        &self.features
    }

    #[inline]
    fn is_target(&self) -> bool {
        self.is_target
    }
}

/// A labeled web page: the candidate nodes a ruleset brought into
/// consideration, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Source file the vectorizer read, if it recorded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub nodes: Vec<Node>,
}

impl Page {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            filename: None,
            nodes,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Number of candidate nodes on this page.
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes labeled as targets.
    pub fn n_targets(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_target).count()
    }

    /// A page with no targets; used to bait the recognizer into a false
    /// positive.
    pub fn is_negative_sample(&self) -> bool {
        self.n_targets() == 0
    }
}

impl PageRecord for Page {
    type Node = Node;

    #[inline]
    fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }
}

impl<P: PageRecord> PageRecord for &P {
    type Node = P::Node;

    #[inline]
    fn nodes(&self) -> &[Self::Node] {
        (*self).nodes()
    }

    fn filename(&self) -> Option<&str> {
        (*self).filename()
    }
}
