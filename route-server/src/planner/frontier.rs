//! Priority-queue entries for Dijkstra search.

use std::cmp::Ordering;

use crate::graph::CityId;

/// A discovered-but-unsettled city waiting in the frontier.
///
/// Ordered so that `BinaryHeap` (a max-heap) pops the entry with the
/// smallest accumulated weight first, and among equal weights the one
/// pushed earliest (smallest sequence number).
#[derive(Debug, Clone, Copy)]
pub(super) struct FrontierEntry {
    pub weight: f64,
    pub sequence: u64,
    pub city: CityId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn entry(weight: f64, sequence: u64, city: usize) -> FrontierEntry {
        FrontierEntry {
            weight,
            sequence,
            city: CityId(city),
        }
    }

    #[test]
    fn pops_lightest_first() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(5.0, 0, 0));
        heap.push(entry(1.5, 1, 1));
        heap.push(entry(3.0, 2, 2));

        let order: Vec<usize> = std::iter::from_fn(|| heap.pop()).map(|e| e.city.0).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn ties_pop_in_push_order() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(2.0, 7, 0));
        heap.push(entry(2.0, 3, 1));
        heap.push(entry(2.0, 5, 2));

        let order: Vec<u64> = std::iter::from_fn(|| heap.pop()).map(|e| e.sequence).collect();
        assert_eq!(order, vec![3, 5, 7]);
    }
}
