//! Breadth-first traversal over a graph.

use std::collections::VecDeque;

use super::{CityId, Graph};

/// Breadth-first iterator over the cities reachable from a start city.
///
/// Yields the start city first, then every reachable city exactly once in
/// BFS order. Edge weights are ignored.
pub struct Traverse<'g> {
    graph: &'g Graph,
    queue: VecDeque<CityId>,
    seen: Vec<bool>,
}

impl<'g> Traverse<'g> {
    pub(super) fn new(graph: &'g Graph, start: CityId) -> Self {
        let mut seen = vec![false; graph.city_count()];
        let mut queue = VecDeque::new();
        if let Some(slot) = seen.get_mut(start.0) {
            *slot = true;
            queue.push_back(start);
        }
        Traverse { graph, queue, seen }
    }
}

impl Iterator for Traverse<'_> {
    type Item = CityId;

    fn next(&mut self) -> Option<CityId> {
        let current = self.queue.pop_front()?;
        for (target, _) in self.graph.edges(current) {
            if !self.seen[target.0] {
                self.seen[target.0] = true;
                self.queue.push_back(target);
            }
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{City, Route};

    fn city(name: &str) -> City {
        City::new(name, 0.0, 0.0).unwrap()
    }

    fn one_way(from: &str, to: &str) -> Route {
        Route::new(city(from), city(to), 1.0, 1.0, false).unwrap()
    }

    #[test]
    fn visits_in_bfs_order() {
        let mut graph = Graph::new();
        graph.add_route(one_way("A", "B"));
        graph.add_route(one_way("A", "C"));
        graph.add_route(one_way("B", "D"));
        graph.add_route(one_way("C", "D"));
        graph.add_route(one_way("D", "A"));

        let start = graph.city_id("A").unwrap();
        let names: Vec<&str> = graph
            .traverse(start)
            .map(|id| graph.city(id).name())
            .collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn respects_direction() {
        let mut graph = Graph::new();
        graph.add_route(one_way("A", "B"));

        let b = graph.city_id("B").unwrap();
        let reached: Vec<CityId> = graph.traverse(b).collect();
        assert_eq!(reached, vec![b]);
    }

    #[test]
    fn out_of_range_start_yields_nothing() {
        let graph = Graph::new();
        assert_eq!(graph.traverse(CityId(3)).count(), 0);
    }
}
