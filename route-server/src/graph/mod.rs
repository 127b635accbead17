//! The city/route graph.
//!
//! Cities live in a dense arena indexed by [`CityId`]; a normalized-name
//! map gives O(1) lookup by name and each city owns its outgoing edges in
//! insertion order.
//!
//! A graph is built once through the `add_*` methods, which need `&mut`
//! access. Search code holds it behind an `Arc`, so it is read-only for as
//! long as any query can see it.

mod error;
mod traverse;

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::domain::{City, CityKey, Route};

pub use error::GraphError;
pub use traverse::Traverse;

/// Position of a city in its graph's arena.
///
/// Only meaningful for the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityId(pub usize);

/// An outgoing edge: the route plus the arena index of its destination.
#[derive(Debug, Clone)]
struct Edge {
    target: CityId,
    route: Route,
    /// Reverse copy of a bidirectional route, not added by the caller
    materialized: bool,
}

/// A directed graph of cities connected by routes.
///
/// Bidirectional routes are stored as two directed edges: the route itself
/// and a one-way reverse copy on the destination.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    cities: Vec<City>,
    index: HashMap<CityKey, CityId>,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a city.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateCity`] if a city with the same
    /// normalized name is already present.
    pub fn add_city(&mut self, city: City) -> Result<CityId, GraphError> {
        if self.index.contains_key(city.key()) {
            return Err(GraphError::DuplicateCity(city.name().to_string()));
        }
        Ok(self.insert_city(city))
    }

    /// Returns the id of `city`, registering it first if absent.
    fn ensure_city(&mut self, city: &City) -> CityId {
        match self.index.get(city.key()) {
            Some(&id) => id,
            None => self.insert_city(city.clone()),
        }
    }

    fn insert_city(&mut self, city: City) -> CityId {
        let id = CityId(self.cities.len());
        self.index.insert(city.key().clone(), id);
        self.cities.push(city);
        self.adjacency.push(Vec::new());
        id
    }

    /// Add a route, registering any endpoint not yet present.
    ///
    /// Endpoints are replaced by the graph's own city values, so an
    /// endpoint spelled `"delhi"` is stored as the registered `"Delhi"`.
    /// A bidirectional route also materializes a one-way reverse edge on
    /// its destination.
    pub fn add_route(&mut self, route: Route) {
        let origin = self.ensure_city(route.origin());
        let destination = self.ensure_city(route.destination());

        let route = route.with_endpoints(
            self.cities[origin.0].clone(),
            self.cities[destination.0].clone(),
        );

        if route.is_bidirectional() {
            self.adjacency[destination.0].push(Edge {
                target: origin,
                route: route.materialized_reverse(),
                materialized: true,
            });
        }
        self.adjacency[origin.0].push(Edge {
            target: destination,
            route,
            materialized: false,
        });
    }

    /// Look up a city by name (trimmed, case-insensitive).
    pub fn get_city(&self, name: &str) -> Option<&City> {
        self.city_id(name).map(|id| self.city(id))
    }

    /// Look up a city's arena index by name (trimmed, case-insensitive).
    pub fn city_id(&self, name: &str) -> Option<CityId> {
        self.index.get(&CityKey::new(name)).copied()
    }

    /// Returns the city at `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this graph.
    pub fn city(&self, id: CityId) -> &City {
        &self.cities[id.0]
    }

    /// Routes leaving `city`, in insertion order.
    ///
    /// Unknown cities have no neighbours.
    pub fn get_neighbors(&self, city: &City) -> Vec<&Route> {
        match self.index.get(city.key()) {
            Some(&id) => self.edges(id).map(|(_, route)| route).collect(),
            None => Vec::new(),
        }
    }

    /// Outgoing edges of `id` as `(target, route)` pairs.
    pub(crate) fn edges(&self, id: CityId) -> impl Iterator<Item = (CityId, &Route)> + '_ {
        self.adjacency
            .get(id.0)
            .into_iter()
            .flatten()
            .map(|edge| (edge.target, &edge.route))
    }

    /// All cities in registration order.
    pub fn get_all_cities(&self) -> &[City] {
        &self.cities
    }

    /// All routes, with both directions of a pair reported once.
    ///
    /// Only routes as they were added are reported, never a materialized
    /// reverse. Routes are keyed by their unordered endpoint pair; the
    /// first one encountered (by origin registration order, then insertion
    /// order) is kept.
    pub fn get_all_routes(&self) -> Vec<&Route> {
        let mut seen: HashSet<(&CityKey, &CityKey)> = HashSet::new();
        let mut routes = Vec::new();

        for edge in self.adjacency.iter().flatten() {
            if edge.materialized {
                continue;
            }
            let a = edge.route.origin().key();
            let b = edge.route.destination().key();
            let pair = if a <= b { (a, b) } else { (b, a) };
            if seen.insert(pair) {
                routes.push(&edge.route);
            }
        }

        routes
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Number of distinct routes, as reported by [`Graph::get_all_routes`].
    pub fn route_count(&self) -> usize {
        self.get_all_routes().len()
    }

    /// Whether `destination` can be reached from `origin`.
    ///
    /// A city always reaches itself. Unknown names yield `false`.
    pub fn has_path(&self, origin: &str, destination: &str) -> bool {
        let (Some(from), Some(to)) = (self.city_id(origin), self.city_id(destination)) else {
            return false;
        };
        self.traverse(from).any(|id| id == to)
    }

    /// Breadth-first traversal starting at `start`.
    pub fn traverse(&self, start: CityId) -> Traverse<'_> {
        Traverse::new(self, start)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph(cities={}, routes={})",
            self.city_count(),
            self.route_count()
        )
    }
}
