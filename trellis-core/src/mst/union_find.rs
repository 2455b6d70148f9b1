//! Union-find (disjoint set union) used for cycle detection during the
//! Kruskal scan.
//!
//! Vertices are identified by their array slot, so membership tracking is a
//! pair of flat vectors rather than a pointer structure.

use std::mem;

/// Disjoint-set forest over a fixed set of vertices, with path compression
/// and union by rank.
#[derive(Clone, Debug)]
pub(super) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets, one per vertex.
    pub(super) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Returns the representative of the set containing `vertex`.
    ///
    /// Every vertex visited on the way up is re-parented directly to the
    /// root, so repeated finds along the same chain are amortised O(1).
    pub(super) fn find(&mut self, mut vertex: usize) -> usize {
        let mut root = vertex;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[vertex] != vertex {
            let next = self.parent[vertex];
            self.parent[vertex] = root;
            vertex = next;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` when both vertices already share a representative,
    /// i.e. when joining them would close a cycle.
    pub(super) fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }

        if self.rank[left] < self.rank[right] {
            mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if self.rank[left] == self.rank[right] {
            self.rank[left] = self.rank[left].saturating_add(1);
        }
        self.components -= 1;
        true
    }

    /// Returns the number of disjoint sets currently tracked.
    #[rustfmt::skip]
    pub(super) fn components(&self) -> usize { self.components }
}

#[cfg(test)]
mod tests {
    use super::DisjointSet;

    #[test]
    fn singletons_have_distinct_roots() {
        let mut sets = DisjointSet::new(4);
        let roots: Vec<usize> = (0..4).map(|vertex| sets.find(vertex)).collect();
        assert_eq!(roots, vec![0, 1, 2, 3]);
        assert_eq!(sets.components(), 4);
    }

    #[test]
    fn union_reports_whether_a_merge_happened() {
        let mut sets = DisjointSet::new(3);
        assert!(sets.union(0, 1));
        assert!(!sets.union(1, 0), "second union must detect the cycle");
        assert!(sets.union(1, 2));
        assert_eq!(sets.components(), 1);
    }

    #[test]
    fn transitive_unions_share_a_root() {
        let mut sets = DisjointSet::new(6);
        sets.union(0, 1);
        sets.union(2, 3);
        sets.union(1, 2);
        let root = sets.find(0);
        for vertex in 1..4 {
            assert_eq!(sets.find(vertex), root);
        }
        assert_ne!(sets.find(4), root);
        assert_eq!(sets.components(), 3);
    }

    #[test]
    fn find_compresses_the_visited_chain() {
        let mut sets = DisjointSet::new(5);
        // Hand-build the chain 4 -> 3 -> 2 -> 1 -> 0; union by rank never
        // produces one this deep.
        for vertex in 1..5 {
            sets.parent[vertex] = vertex - 1;
        }
        sets.components = 1;

        assert_eq!(sets.find(4), 0);
        for vertex in 0..5 {
            assert_eq!(sets.parent[vertex], 0, "visited vertices must point at the root");
        }
    }

    #[test]
    fn rank_tie_promotes_exactly_one_root() {
        let mut sets = DisjointSet::new(4);
        sets.union(0, 1);
        sets.union(2, 3);
        // Both trees have rank 1; merging them must bump the winner to 2.
        sets.union(0, 2);
        let root = sets.find(0);
        assert_eq!(sets.rank[root], 2);
    }
}
