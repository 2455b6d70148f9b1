//! Benchmark support utilities for trellis.

pub mod synthetic {
    //! Synthetic graph generation with fixed seeds.

    use rand::{Rng, SeedableRng, rngs::SmallRng};
    use trellis_core::Graph;

    /// Configuration for synthetic graph generation.
    #[derive(Clone, Copy, Debug)]
    pub struct SyntheticConfig {
        /// Number of vertices.
        pub vertex_count: usize,
        /// Number of candidate edges to draw.
        pub edge_count: usize,
        /// Seed for the generator.
        pub seed: u64,
    }

    /// Generates a random multigraph matching `config`.
    ///
    /// Endpoints are drawn uniformly, so the output may contain self-edges
    /// and parallel edges; the forest builder discards both naturally.
    #[must_use]
    pub fn generate(config: &SyntheticConfig) -> Graph {
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut graph = Graph::new(config.vertex_count);
        for serial in 0..config.edge_count {
            let source = rng.gen_range(0..config.vertex_count);
            let target = rng.gen_range(0..config.vertex_count);
            let weight: i64 = rng.gen_range(1..=1_000);
            graph.add_edge(source, target, weight, format!("PKG-{serial:06}"));
        }
        graph
    }
}
