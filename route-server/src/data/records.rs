//! Plain records for graph construction and persistence.

use serde::{Deserialize, Serialize};

use crate::domain::{City, Route};
use crate::graph::{Graph, GraphError};

/// A city as it appears in a data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,

    #[serde(default)]
    pub latitude: f64,

    #[serde(default)]
    pub longitude: f64,
}

/// A route as it appears in a data file; endpoints are city names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub origin: String,
    pub destination: String,
    pub distance: f64,
    pub cost: f64,

    #[serde(default = "default_bidirectional")]
    pub bidirectional: bool,
}

fn default_bidirectional() -> bool {
    true
}

/// Cities and routes together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default)]
    pub cities: Vec<CityRecord>,

    #[serde(default)]
    pub routes: Vec<RouteRecord>,
}

impl From<&City> for CityRecord {
    fn from(city: &City) -> Self {
        CityRecord {
            name: city.name().to_string(),
            latitude: city.latitude(),
            longitude: city.longitude(),
        }
    }
}

impl From<&Route> for RouteRecord {
    fn from(route: &Route) -> Self {
        RouteRecord {
            origin: route.origin().name().to_string(),
            destination: route.destination().name().to_string(),
            distance: route.distance(),
            cost: route.cost(),
            bidirectional: route.is_bidirectional(),
        }
    }
}

impl GraphData {
    /// Snapshot a graph: all cities, and routes with each pair once.
    pub fn from_graph(graph: &Graph) -> Self {
        GraphData {
            cities: graph.get_all_cities().iter().map(CityRecord::from).collect(),
            routes: graph
                .get_all_routes()
                .into_iter()
                .map(RouteRecord::from)
                .collect(),
        }
    }

    /// Build a graph from the records.
    ///
    /// All cities are registered first; route endpoints must name one of
    /// them (trimmed, case-insensitive).
    ///
    /// # Errors
    ///
    /// Fails on the first invalid city or route, duplicate city name, or
    /// route endpoint that names an undeclared city.
    pub fn to_graph(&self) -> Result<Graph, GraphError> {
        let mut graph = Graph::new();

        for record in &self.cities {
            let city = City::new(&record.name, record.latitude, record.longitude)?;
            graph.add_city(city)?;
        }

        for record in &self.routes {
            let origin = graph
                .get_city(&record.origin)
                .ok_or_else(|| GraphError::UnknownCity(record.origin.clone()))?
                .clone();
            let destination = graph
                .get_city(&record.destination)
                .ok_or_else(|| GraphError::UnknownCity(record.destination.clone()))?
                .clone();
            let route = Route::new(
                origin,
                destination,
                record.distance,
                record.cost,
                record.bidirectional,
            )?;
            graph.add_route(route);
        }

        Ok(graph)
    }
}
