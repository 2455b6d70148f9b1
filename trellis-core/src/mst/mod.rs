//! Spanning-forest construction via Kruskal's algorithm.
//!
//! Candidate edges are comb-sorted into non-decreasing weight order and
//! scanned once; a union-find forest rejects edges whose endpoints are
//! already connected. Accepted edges are appended to the result and inserted
//! into the [`PackageIndex`] so later lookups resolve in expected O(log n)
//! time.

mod sort;
mod union_find;

use rand::rngs::SmallRng;
use tracing::{info, instrument};

use crate::{
    graph::{Edge, Graph},
    index::PackageIndex,
};

use self::{sort::comb_sort, union_find::DisjointSet};

/// The output of a spanning-forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Debug)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    total_weight: i64,
    component_count: usize,
    index: PackageIndex,
}

impl SpanningForest {
    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> i64 { self.total_weight }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the package index built from the accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn index(&self) -> &PackageIndex { &self.index }
}

/// Computes a minimum spanning forest of `graph` using Kruskal's algorithm.
///
/// Treap priorities for the package index are drawn from `rng`; a fixed-seed
/// generator makes construction reproducible.
///
/// A disconnected graph yields fewer than `V - 1` edges and more than one
/// component; an empty edge list yields an empty forest of weight zero.
/// Neither case is an error. Edge endpoints must lie in
/// `[0, graph.vertex_count())`; that is a loader precondition.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use trellis_core::{Graph, kruskal};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 1, "AB");
/// graph.add_edge(1, 2, 2, "BC");
/// graph.add_edge(0, 2, 9, "AC");
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let forest = kruskal(&graph, &mut rng);
/// assert!(forest.is_tree());
/// assert_eq!(forest.total_weight(), 3);
/// ```
#[instrument(
    name = "mst.kruskal",
    skip(graph, rng),
    fields(vertices = graph.vertex_count(), candidates = graph.edge_count()),
)]
pub fn kruskal(graph: &Graph, rng: &mut SmallRng) -> SpanningForest {
    let mut candidates = graph.edges().to_vec();
    comb_sort(&mut candidates);

    let target_len = graph.vertex_count().saturating_sub(1);
    let mut union_find = DisjointSet::new(graph.vertex_count());
    let mut accepted = Vec::with_capacity(target_len);
    let mut index = PackageIndex::new();
    let mut total_weight = 0i64;

    for edge in candidates {
        if accepted.len() == target_len {
            break;
        }
        // union doubles as the cycle check: already-joined roots reject the edge
        if union_find.union(edge.source(), edge.target()) {
            total_weight += edge.weight();
            index.insert(edge.clone(), rng);
            accepted.push(edge);
        }
    }

    info!(
        accepted = accepted.len(),
        total_weight,
        components = union_find.components(),
        "spanning forest constructed"
    );

    SpanningForest {
        edges: accepted,
        total_weight,
        component_count: union_find.components(),
        index,
    }
}

#[cfg(test)]
mod property;
