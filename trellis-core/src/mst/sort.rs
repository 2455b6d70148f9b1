//! Comb sort over candidate edges.
//!
//! The spanning-forest builder needs edges in non-decreasing weight order.
//! Comb sort generalises exchange sort by comparing elements a shrinking gap
//! apart, which moves low-weight stragglers at the tail of the slice forward
//! in large strides instead of one slot per pass. Not stable: equal-weight
//! edges may be reordered relative to each other.

use crate::graph::Edge;

/// Gap shrink factor, applied as `gap * 10 / 13` with a floor of 1.
const SHRINK_NUM: usize = 10;
const SHRINK_DEN: usize = 13;

/// Sorts `edges` in place by non-decreasing weight.
///
/// Terminates once a full gap-1 pass performs no swaps, so sorting an
/// already-sorted slice leaves it untouched. Empty and single-element slices
/// finish after one swapless pass.
pub(super) fn comb_sort(edges: &mut [Edge]) {
    let len = edges.len();
    let mut gap = len;
    loop {
        gap = gap * SHRINK_NUM / SHRINK_DEN;
        if gap < 1 {
            gap = 1;
        }

        let mut swapped = false;
        for i in 0..len.saturating_sub(gap) {
            if edges[i].weight() > edges[i + gap].weight() {
                edges.swap(i, i + gap);
                swapped = true;
            }
        }

        if gap == 1 && !swapped {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::graph::Edge;

    use super::comb_sort;

    fn edges(weights: &[i64]) -> Vec<Edge> {
        weights
            .iter()
            .enumerate()
            .map(|(serial, weight)| Edge::new(0, 1, *weight, format!("PKG-{serial:02}")))
            .collect()
    }

    fn weights(edges: &[Edge]) -> Vec<i64> {
        edges.iter().map(Edge::weight).collect()
    }

    #[rstest]
    #[case::empty(&[], &[])]
    #[case::single(&[7], &[7])]
    #[case::reversed(&[9, 7, 5, 3, 1], &[1, 3, 5, 7, 9])]
    #[case::duplicates(&[4, 1, 4, 0, 4], &[0, 1, 4, 4, 4])]
    #[case::negative(&[3, -8, 0, -1], &[-8, -1, 0, 3])]
    fn sorts_by_non_decreasing_weight(#[case] input: &[i64], #[case] expected: &[i64]) {
        let mut sorted = edges(input);
        comb_sort(&mut sorted);
        assert_eq!(weights(&sorted), expected);
    }

    #[test]
    fn is_idempotent_on_sorted_input() {
        let mut sorted = edges(&[1, 2, 3, 5, 8, 13, 21]);
        comb_sort(&mut sorted);
        let first_pass = sorted.clone();
        comb_sort(&mut sorted);
        assert_eq!(sorted, first_pass);
    }

    #[test]
    fn sorts_a_larger_shuffled_slice() {
        let input: Vec<i64> = (0..97).map(|i| (i * 37) % 101).collect();
        let mut sorted = edges(&input);
        comb_sort(&mut sorted);

        let mut expected = input;
        expected.sort_unstable();
        assert_eq!(weights(&sorted), expected);
    }
}
