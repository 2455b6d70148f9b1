//! Lookup classification for package codes.
//!
//! A code absent from the package index is not necessarily unknown: the edge
//! it names may simply have been rejected during forest construction. The
//! full known-code set disambiguates the two cases.

use std::collections::BTreeSet;

use tracing::debug;

use crate::{graph::Edge, index::PackageIndex};

/// Classification of a package-code query. Exactly one outcome is produced
/// per query.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LookupOutcome<'a> {
    /// The code names an edge selected into the spanning forest.
    InTree(&'a Edge),
    /// The code exists in the input graph, but its edge was not selected.
    OutsideTree,
    /// The code does not appear anywhere in the input.
    Unknown,
}

/// Resolves package codes against the index and the full known-code set.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use trellis_core::{Graph, LookupOutcome, PackageLookup, kruskal};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 1, "AB");
/// graph.add_edge(1, 2, 2, "BC");
/// graph.add_edge(0, 2, 9, "AC");
///
/// let known = graph.package_codes();
/// let mut rng = SmallRng::seed_from_u64(7);
/// let forest = kruskal(&graph, &mut rng);
/// let lookup = PackageLookup::new(forest.index(), &known);
///
/// assert!(matches!(lookup.lookup("AB"), LookupOutcome::InTree(_)));
/// assert_eq!(lookup.lookup("AC"), LookupOutcome::OutsideTree);
/// assert_eq!(lookup.lookup("ZZ"), LookupOutcome::Unknown);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PackageLookup<'a> {
    index: &'a PackageIndex,
    known_codes: &'a BTreeSet<String>,
}

impl<'a> PackageLookup<'a> {
    /// Creates a lookup service over `index` and the set of every code seen
    /// in the raw input.
    #[must_use]
    pub fn new(index: &'a PackageIndex, known_codes: &'a BTreeSet<String>) -> Self {
        Self { index, known_codes }
    }

    /// Classifies `package_code` as in the tree, known but outside it, or
    /// unknown.
    #[must_use]
    pub fn lookup(&self, package_code: &str) -> LookupOutcome<'a> {
        if let Some(edge) = self.index.get(package_code) {
            return LookupOutcome::InTree(edge);
        }
        if self.known_codes.contains(package_code) {
            return LookupOutcome::OutsideTree;
        }
        debug!(package_code, "code absent from input");
        LookupOutcome::Unknown
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use crate::{graph::Graph, mst::kruskal};

    use super::{LookupOutcome, PackageLookup};

    fn diamond() -> Graph {
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1, 10, "A");
        graph.add_edge(1, 2, 5, "B");
        graph.add_edge(2, 3, 1, "C");
        graph.add_edge(0, 3, 8, "D");
        graph
    }

    #[test]
    fn classifies_each_query_with_exactly_one_outcome() {
        let graph = diamond();
        let known = graph.package_codes();
        let mut rng = SmallRng::seed_from_u64(11);
        let forest = kruskal(&graph, &mut rng);
        let lookup = PackageLookup::new(forest.index(), &known);

        match lookup.lookup("C") {
            LookupOutcome::InTree(edge) => {
                assert_eq!((edge.source(), edge.target(), edge.weight()), (2, 3, 1));
            }
            other => panic!("expected InTree, got {other:?}"),
        }
        assert_eq!(lookup.lookup("A"), LookupOutcome::OutsideTree);
        assert_eq!(lookup.lookup("Z"), LookupOutcome::Unknown);
    }

    #[test]
    fn every_rejected_code_classifies_as_outside_tree() {
        let graph = diamond();
        let known = graph.package_codes();
        let mut rng = SmallRng::seed_from_u64(12);
        let forest = kruskal(&graph, &mut rng);
        let lookup = PackageLookup::new(forest.index(), &known);

        let accepted: Vec<&str> = forest.edges().iter().map(|edge| edge.package_code()).collect();
        for code in &known {
            let outcome = lookup.lookup(code);
            if accepted.contains(&code.as_str()) {
                assert!(matches!(outcome, LookupOutcome::InTree(_)));
            } else {
                assert_eq!(outcome, LookupOutcome::OutsideTree);
            }
        }
    }

    #[test]
    fn empty_known_set_classifies_everything_unknown() {
        let graph = Graph::new(2);
        let known = graph.package_codes();
        let mut rng = SmallRng::seed_from_u64(13);
        let forest = kruskal(&graph, &mut rng);
        let lookup = PackageLookup::new(forest.index(), &known);

        assert_eq!(lookup.lookup(""), LookupOutcome::Unknown);
        assert_eq!(lookup.lookup("anything"), LookupOutcome::Unknown);
    }
}
