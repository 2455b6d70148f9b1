//! Package index: a treap keyed by package code.
//!
//! Edges are inserted in spanning-forest acceptance order, which correlates
//! with weight rather than key, so a plain binary search tree could degrade
//! badly. Each node instead carries a randomly drawn priority, and rotations
//! keep the tree in max-heap order on priorities. The expected height is
//! O(log n) regardless of insertion order.

use std::cmp::Ordering;

use rand::{Rng, distributions::Standard, rngs::SmallRng};

use crate::graph::Edge;

#[derive(Debug)]
struct Node {
    edge: Edge,
    priority: u64,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn leaf(edge: Edge, priority: u64) -> Box<Self> {
        Box::new(Self {
            edge,
            priority,
            left: None,
            right: None,
        })
    }
}

/// Search index over the edges accepted into the spanning forest, keyed by
/// package code.
///
/// Duplicate codes are retained as distinct nodes: an insert whose key equals
/// the current node's key routes right, and a search returns whichever
/// duplicate the descent reaches first.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use trellis_core::{Edge, PackageIndex};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let mut index = PackageIndex::new();
/// index.insert(Edge::new(0, 1, 3, "AB"), &mut rng);
/// assert_eq!(index.get("AB").map(Edge::weight), Some(3));
/// assert!(index.get("ZZ").is_none());
/// ```
#[derive(Debug, Default)]
pub struct PackageIndex {
    root: Option<Box<Node>>,
    len: usize,
}

impl PackageIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of indexed edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.len }

    /// Returns `true` when no edges have been indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `edge` keyed by its package code, drawing the node priority
    /// from `rng`.
    pub fn insert(&mut self, edge: Edge, rng: &mut SmallRng) {
        let priority: u64 = rng.sample(Standard);
        self.root = Some(insert_at(self.root.take(), edge, priority));
        self.len += 1;
    }

    /// Looks up an edge by exact package code.
    ///
    /// `None` means the code is absent from this index, not that it is
    /// globally unknown.
    #[must_use]
    pub fn get(&self, package_code: &str) -> Option<&Edge> {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            match package_code.cmp(node.edge.package_code()) {
                Ordering::Equal => return Some(&node.edge),
                Ordering::Less => cursor = node.left.as_deref(),
                Ordering::Greater => cursor = node.right.as_deref(),
            }
        }
        None
    }
}

/// Inserts into the subtree rooted at `node`, returning the new subtree root.
///
/// Recursion depth is the tree height, O(log n) in expectation. A child whose
/// priority exceeds its parent's is rotated up on the way back out; the
/// rotation reassigns ownership of the displaced subtree, never duplicates it.
fn insert_at(node: Option<Box<Node>>, edge: Edge, priority: u64) -> Box<Node> {
    let Some(mut node) = node else {
        return Node::leaf(edge, priority);
    };

    if edge.package_code() < node.edge.package_code() {
        let mut child = insert_at(node.left.take(), edge, priority);
        if child.priority > node.priority {
            // rotate right: the left child becomes the subtree root
            node.left = child.right.take();
            child.right = Some(node);
            return child;
        }
        node.left = Some(child);
    } else {
        // equal keys route right, so duplicates stay distinct
        let mut child = insert_at(node.right.take(), edge, priority);
        if child.priority > node.priority {
            // rotate left: the right child becomes the subtree root
            node.right = child.left.take();
            child.left = Some(node);
            return child;
        }
        node.right = Some(child);
    }
    node
}
