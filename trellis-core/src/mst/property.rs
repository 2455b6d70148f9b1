//! Property-based tests for spanning-forest construction.
//!
//! Random graphs are checked against structural invariants and against an
//! independent naive Kruskal oracle built on the standard-library sort, so a
//! defect in the comb-sort pipeline cannot hide behind a matching defect in
//! the checked implementation.

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::graph::{Edge, Graph};

use super::kruskal;

fn arbitrary_graph() -> impl Strategy<Value = Graph> {
    (2usize..24, any::<u64>()).prop_map(|(vertex_count, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut graph = Graph::new(vertex_count);
        let mut serial = 0u32;
        for source in 0..vertex_count {
            for target in (source + 1)..vertex_count {
                if rng.gen_bool(0.4) {
                    let weight = rng.gen_range(-50i64..=50);
                    graph.add_edge(source, target, weight, format!("PKG-{serial:04}"));
                    serial += 1;
                }
            }
        }
        graph
    })
}

/// Minimum-spanning-forest weight computed with a plain sort and a throwaway
/// union-find, independent of the production code paths.
fn oracle_weight(graph: &Graph) -> i64 {
    fn find(parent: &mut [usize], mut vertex: usize) -> usize {
        while parent[vertex] != vertex {
            parent[vertex] = parent[parent[vertex]];
            vertex = parent[vertex];
        }
        vertex
    }

    let mut edges = graph.edges().to_vec();
    edges.sort_by_key(Edge::weight);

    let mut parent: Vec<usize> = (0..graph.vertex_count()).collect();
    let mut total = 0;
    for edge in &edges {
        let left = find(&mut parent, edge.source());
        let right = find(&mut parent, edge.target());
        if left != right {
            parent[right] = left;
            total += edge.weight();
        }
    }
    total
}

proptest! {
    #[test]
    fn forest_edge_count_matches_component_count(graph in arbitrary_graph()) {
        let forest = kruskal(&graph, &mut SmallRng::seed_from_u64(1));
        prop_assert_eq!(
            forest.edges().len(),
            graph.vertex_count() - forest.component_count()
        );
    }

    #[test]
    fn accepted_edges_never_close_a_cycle(graph in arbitrary_graph()) {
        let forest = kruskal(&graph, &mut SmallRng::seed_from_u64(2));

        // Replay the accepted set through a fresh union-find; every edge must
        // join two previously separate components.
        let mut parent: Vec<usize> = (0..graph.vertex_count()).collect();
        for edge in forest.edges() {
            let mut left = edge.source();
            while parent[left] != left { left = parent[left]; }
            let mut right = edge.target();
            while parent[right] != right { right = parent[right]; }
            prop_assert_ne!(left, right, "accepted edge closed a cycle");
            parent[right] = left;
        }
    }

    #[test]
    fn total_weight_matches_sum_and_oracle(graph in arbitrary_graph()) {
        let forest = kruskal(&graph, &mut SmallRng::seed_from_u64(3));
        let sum: i64 = forest.edges().iter().map(Edge::weight).sum();
        prop_assert_eq!(forest.total_weight(), sum);
        prop_assert_eq!(forest.total_weight(), oracle_weight(&graph));
    }

    #[test]
    fn every_accepted_code_resolves_in_the_index(graph in arbitrary_graph()) {
        let forest = kruskal(&graph, &mut SmallRng::seed_from_u64(4));
        for edge in forest.edges() {
            prop_assert!(forest.index().get(edge.package_code()).is_some());
        }
        prop_assert_eq!(forest.index().len(), forest.edges().len());
    }

    #[test]
    fn acceptance_order_is_non_decreasing_in_weight(graph in arbitrary_graph()) {
        let forest = kruskal(&graph, &mut SmallRng::seed_from_u64(5));
        let weights: Vec<i64> = forest.edges().iter().map(Edge::weight).collect();
        prop_assert!(weights.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
