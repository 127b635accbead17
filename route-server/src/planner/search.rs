//! Dijkstra path search.
//!
//! Finds the cheapest path between two cities under one criterion at a
//! time (distance or cost), plus unweighted reachability queries.

use std::collections::BinaryHeap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, trace};

use crate::domain::{City, Criterion, DomainError, Route, Trip, TripComparison};
use crate::graph::{CityId, Graph};

use super::frontier::FrontierEntry;

/// Error from path search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// Origin name does not resolve to a city
    #[error("origin city '{0}' not found in graph")]
    OriginNotFound(String),

    /// Destination name does not resolve to a city
    #[error("destination city '{0}' not found in graph")]
    DestinationNotFound(String),

    /// Invalid request, e.g. an unknown optimization criterion
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

impl SearchError {
    /// Returns true if the error is an unresolved city name.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SearchError::OriginNotFound(_) | SearchError::DestinationNotFound(_)
        )
    }
}

/// Shortest and cheapest trips between the same two cities.
#[derive(Debug, Clone)]
pub struct TripsByCriterion {
    pub by_distance: Trip,
    pub by_cost: Trip,
}

impl TripsByCriterion {
    /// Returns the trip optimized for `criterion`.
    pub fn get(&self, criterion: Criterion) -> &Trip {
        match criterion {
            Criterion::Distance => &self.by_distance,
            Criterion::Cost => &self.by_cost,
        }
    }

    /// Compares the shortest trip against the cheapest one.
    pub fn comparison(&self) -> TripComparison {
        self.by_distance.compare_with(&self.by_cost)
    }
}

/// Path search over one graph.
///
/// The finder owns a tie-break sequence that is shared by every search it
/// runs and never reset. Frontier entries are numbered as they are pushed,
/// so among equal accumulated weights the earliest-discovered city is
/// settled first and identical inputs always yield identical paths.
///
/// The graph sits behind an `Arc` and is never mutated, so a finder can be
/// shared between threads; the sequence is an atomic counter.
#[derive(Debug)]
pub struct PathFinder {
    graph: Arc<Graph>,
    sequence: AtomicU64,
}

impl PathFinder {
    /// Create a finder over `graph`.
    pub fn new(graph: impl Into<Arc<Graph>>) -> Self {
        Self {
            graph: graph.into(),
            sequence: AtomicU64::new(0),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed)
    }

    /// Like [`PathFinder::find_path`], with the criterion given as text.
    ///
    /// The criterion is checked before the city names.
    pub fn find_path_by(
        &self,
        origin: &str,
        destination: &str,
        optimize_by: &str,
    ) -> Result<Trip, SearchError> {
        let criterion: Criterion = optimize_by.parse()?;
        self.find_path(origin, destination, criterion)
    }

    /// Find the optimal trip from `origin` to `destination`.
    ///
    /// Minimizes the sum of the route weight selected by `criterion`; both
    /// totals are reported on the returned trip regardless.
    ///
    /// An unreachable destination is not an error: the trip comes back
    /// with an empty path (`is_valid() == false`). Origin equal to
    /// destination yields a valid single-city trip.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either name does not resolve to a city.
    pub fn find_path(
        &self,
        origin: &str,
        destination: &str,
        criterion: Criterion,
    ) -> Result<Trip, SearchError> {
        let origin_id = self
            .graph
            .city_id(origin)
            .ok_or_else(|| SearchError::OriginNotFound(origin.to_string()))?;
        let destination_id = self
            .graph
            .city_id(destination)
            .ok_or_else(|| SearchError::DestinationNotFound(destination.to_string()))?;

        let origin_city = self.graph.city(origin_id).clone();
        let destination_city = self.graph.city(destination_id).clone();
        let mut trip = Trip::new(origin_city.clone(), destination_city, criterion);

        if origin_id == destination_id {
            trip.set_path(vec![origin_city], Vec::new())?;
            return Ok(trip);
        }

        if let Some((path, routes)) = self.dijkstra(origin_id, destination_id, criterion) {
            trip.set_path(path, routes)?;
        }

        Ok(trip)
    }

    /// Core Dijkstra search between two distinct cities.
    ///
    /// Returns the path and the routes taken, or `None` if the destination
    /// is unreachable.
    fn dijkstra(
        &self,
        origin: CityId,
        destination: CityId,
        criterion: Criterion,
    ) -> Option<(Vec<City>, Vec<Route>)> {
        let graph = &*self.graph;
        let n = graph.city_count();

        let mut best = vec![f64::INFINITY; n];
        let mut settled = vec![false; n];
        let mut previous: Vec<Option<(CityId, &Route)>> = vec![None; n];
        let mut frontier = BinaryHeap::new();
        let mut settled_count = 0usize;

        best[origin.0] = 0.0;
        frontier.push(FrontierEntry {
            weight: 0.0,
            sequence: self.next_sequence(),
            city: origin,
        });

        while let Some(entry) = frontier.pop() {
            let current = entry.city;
            if settled[current.0] {
                continue;
            }
            settled[current.0] = true;
            settled_count += 1;

            if current == destination {
                break;
            }

            trace!(
                city = graph.city(current).name(),
                weight = best[current.0],
                "settled city"
            );

            for (target, route) in graph.edges(current) {
                if settled[target.0] {
                    continue;
                }
                let candidate = best[current.0] + route.weight(criterion);
                if candidate < best[target.0] {
                    best[target.0] = candidate;
                    previous[target.0] = Some((current, route));
                    frontier.push(FrontierEntry {
                        weight: candidate,
                        sequence: self.next_sequence(),
                        city: target,
                    });
                }
            }
        }

        debug!(
            origin = graph.city(origin).name(),
            destination = graph.city(destination).name(),
            criterion = %criterion,
            settled = settled_count,
            found = previous[destination.0].is_some(),
            "dijkstra search complete"
        );

        if previous[destination.0].is_none() {
            return None;
        }

        let mut path = vec![graph.city(destination).clone()];
        let mut routes = Vec::new();
        let mut current = destination;
        while let Some((prev, route)) = previous[current.0] {
            routes.push(route.clone());
            path.push(graph.city(prev).clone());
            current = prev;
        }
        path.reverse();
        routes.reverse();

        Some((path, routes))
    }

    /// Find both the shortest and the cheapest trip.
    pub fn find_all_paths(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<TripsByCriterion, SearchError> {
        Ok(TripsByCriterion {
            by_distance: self.find_path(origin, destination, Criterion::Distance)?,
            by_cost: self.find_path(origin, destination, Criterion::Cost)?,
        })
    }

    /// Names of every city reachable from `origin`, excluding `origin`
    /// itself, in lexicographic order.
    ///
    /// Unknown origins reach nothing.
    pub fn get_reachable_cities(&self, origin: &str) -> Vec<String> {
        let Some(start) = self.graph.city_id(origin) else {
            return Vec::new();
        };

        let mut names: Vec<String> = self
            .graph
            .traverse(start)
            .filter(|&id| id != start)
            .map(|id| self.graph.city(id).name().to_string())
            .collect();
        names.sort();
        names
    }
}
