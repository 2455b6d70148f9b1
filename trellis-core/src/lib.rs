//! Trellis core library.
//!
//! Builds a minimum spanning forest of a weighted, undirected graph whose
//! edges carry package-code labels, and answers point lookups against the
//! forest through a treap index keyed by those codes.

mod graph;
mod index;
mod lookup;
mod mst;

pub use crate::{
    graph::{Edge, Graph},
    index::PackageIndex,
    lookup::{LookupOutcome, PackageLookup},
    mst::{SpanningForest, kruskal},
};
