//! Trip types.
//!
//! A `Trip` is the result of a path search: the ordered cities visited,
//! the routes taken between them and the aggregated totals.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::city::round2;
use super::{City, DomainError, Route};

/// Which route weight a search minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    #[default]
    Distance,
    Cost,
}

impl Criterion {
    /// Both criteria, in reporting order.
    pub const ALL: [Criterion; 2] = [Criterion::Distance, Criterion::Cost];

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Distance => "distance",
            Criterion::Cost => "cost",
        }
    }
}

impl FromStr for Criterion {
    type Err = DomainError;

    /// Parse `"distance"` or `"cost"`. Anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "distance" => Ok(Criterion::Distance),
            "cost" => Ok(Criterion::Cost),
            other => Err(DomainError::InvalidCriterion(other.to_string())),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One leg of a trip, for per-segment display.
#[derive(Debug, Clone, PartialEq)]
pub struct TripSegment {
    /// 1-based position in the trip
    pub step: usize,
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub cost: f64,
    /// Cost divided by distance, rounded to 2 decimal places
    pub cost_per_km: f64,
}

/// Signed differences between two trips (`self - other`).
#[derive(Debug, Clone, PartialEq)]
pub struct TripComparison {
    pub distance_difference: f64,
    pub cost_difference: f64,
    pub stops_difference: i64,
    pub this_trip_better_by_distance: bool,
    pub this_trip_better_by_cost: bool,
}

/// Compact description of a trip, with totals rounded for display.
#[derive(Debug, Clone, PartialEq)]
pub enum TripSummary {
    NoPath {
        origin: String,
        destination: String,
    },
    Found {
        origin: String,
        destination: String,
        path: Vec<String>,
        stops: usize,
        total_distance: f64,
        total_cost: f64,
        optimized_by: Criterion,
    },
}

/// A calculated trip between two cities.
///
/// A trip starts out empty ("no path found") and is populated at most once
/// through [`Trip::set_path`].
///
/// # Invariants
///
/// - Empty `path` means no path was found; `routes` is then empty too
/// - Otherwise `routes.len() == path.len() - 1`, route `i` goes from
///   `path[i]` to `path[i + 1]`, and the path runs from `origin` to
///   `destination`
/// - Totals are exact sums over `routes`
#[derive(Debug, Clone)]
pub struct Trip {
    origin: City,
    destination: City,
    criterion: Criterion,
    path: Vec<City>,
    routes: Vec<Route>,
    total_distance: f64,
    total_cost: f64,
}

impl Trip {
    /// Create an unpathed trip.
    pub fn new(origin: City, destination: City, criterion: Criterion) -> Self {
        Trip {
            origin,
            destination,
            criterion,
            path: Vec::new(),
            routes: Vec::new(),
            total_distance: 0.0,
            total_cost: 0.0,
        }
    }

    /// Populate the trip and compute its totals.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - The trip already has a path
    /// - `path` is empty
    /// - `routes.len() != path.len() - 1`
    /// - The path does not run from the trip's origin to its destination
    /// - A route does not connect its neighbouring path cities
    ///
    /// # Examples
    ///
    /// ```
    /// use route_server::domain::{City, Criterion, Route, Trip};
    ///
    /// let delhi = City::new("Delhi", 28.6139, 77.2090).unwrap();
    /// let mumbai = City::new("Mumbai", 19.0760, 72.8777).unwrap();
    /// let route = Route::new(delhi.clone(), mumbai.clone(), 1400.0, 5000.0, true).unwrap();
    ///
    /// let mut trip = Trip::new(delhi.clone(), mumbai.clone(), Criterion::Distance);
    /// assert!(!trip.is_valid());
    ///
    /// trip.set_path(vec![delhi, mumbai], vec![route]).unwrap();
    /// assert!(trip.is_valid());
    /// assert_eq!(trip.total_distance(), 1400.0);
    /// assert_eq!(trip.stops(), 0);
    /// ```
    pub fn set_path(&mut self, path: Vec<City>, routes: Vec<Route>) -> Result<(), DomainError> {
        if self.is_valid() {
            return Err(DomainError::InvalidPath("trip already has a path"));
        }
        if path.is_empty() {
            return Err(DomainError::InvalidPath("path cannot be empty"));
        }
        if routes.len() != path.len() - 1 {
            return Err(DomainError::InvalidPath(
                "number of routes must be one less than number of cities",
            ));
        }
        if path.first() != Some(&self.origin) || path.last() != Some(&self.destination) {
            return Err(DomainError::InvalidPath(
                "path must run from origin to destination",
            ));
        }
        let connected = routes.iter().zip(path.windows(2)).all(|(route, pair)| {
            route.origin() == &pair[0] && route.destination() == &pair[1]
        });
        if !connected {
            return Err(DomainError::InvalidPath("routes do not connect the path"));
        }

        self.total_distance = routes.iter().map(Route::distance).sum();
        self.total_cost = routes.iter().map(Route::cost).sum();
        self.path = path;
        self.routes = routes;
        Ok(())
    }

    pub fn origin(&self) -> &City {
        &self.origin
    }

    pub fn destination(&self) -> &City {
        &self.destination
    }

    pub fn criterion(&self) -> Criterion {
        self.criterion
    }

    pub fn path(&self) -> &[City] {
        &self.path
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// City names along the path.
    pub fn path_names(&self) -> Vec<&str> {
        self.path.iter().map(City::name).collect()
    }

    /// Number of intermediate stops (excluding origin and destination).
    pub fn stops(&self) -> usize {
        self.path.len().saturating_sub(2)
    }

    /// Returns true if a path was found.
    pub fn is_valid(&self) -> bool {
        !self.path.is_empty()
    }

    /// Per-segment detail, in travel order.
    pub fn segments(&self) -> Vec<TripSegment> {
        self.routes
            .iter()
            .enumerate()
            .map(|(i, route)| TripSegment {
                step: i + 1,
                from: route.origin().name().to_string(),
                to: route.destination().name().to_string(),
                distance: route.distance(),
                cost: route.cost(),
                cost_per_km: route.cost_per_km(),
            })
            .collect()
    }

    /// Compare against another trip.
    ///
    /// Differences are `self - other`; the "better" flags are strict.
    pub fn compare_with(&self, other: &Trip) -> TripComparison {
        TripComparison {
            distance_difference: self.total_distance - other.total_distance,
            cost_difference: self.total_cost - other.total_cost,
            stops_difference: self.stops() as i64 - other.stops() as i64,
            this_trip_better_by_distance: self.total_distance < other.total_distance,
            this_trip_better_by_cost: self.total_cost < other.total_cost,
        }
    }

    pub fn summary(&self) -> TripSummary {
        let origin = self.origin.name().to_string();
        let destination = self.destination.name().to_string();
        if !self.is_valid() {
            return TripSummary::NoPath {
                origin,
                destination,
            };
        }
        TripSummary::Found {
            origin,
            destination,
            path: self.path_names().into_iter().map(str::to_string).collect(),
            stops: self.stops(),
            total_distance: round2(self.total_distance),
            total_cost: round2(self.total_cost),
            optimized_by: self.criterion,
        }
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(
                f,
                "No path found from {} to {}",
                self.origin.name(),
                self.destination.name()
            );
        }
        writeln!(f, "Trip: {}", self.path_names().join(" -> "))?;
        writeln!(f, "Distance: {:.2} km", self.total_distance)?;
        writeln!(f, "Cost: ${:.2}", self.total_cost)?;
        writeln!(f, "Stops: {}", self.stops())?;
        write!(f, "Optimized by: {}", self.criterion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str) -> City {
        City::new(name, 0.0, 0.0).unwrap()
    }

    fn route(from: &str, to: &str, distance: f64, cost: f64) -> Route {
        Route::new(city(from), city(to), distance, cost, true).unwrap()
    }

    /// Delhi -> Mumbai -> Bangalore
    fn two_leg_trip(criterion: Criterion) -> Trip {
        let mut trip = Trip::new(city("Delhi"), city("Bangalore"), criterion);
        trip.set_path(
            vec![city("Delhi"), city("Mumbai"), city("Bangalore")],
            vec![
                route("Delhi", "Mumbai", 1400.0, 5000.0),
                route("Mumbai", "Bangalore", 980.0, 3500.0),
            ],
        )
        .unwrap();
        trip
    }

    #[test]
    fn criterion_parse() {
        assert_eq!("distance".parse::<Criterion>().unwrap(), Criterion::Distance);
        assert_eq!("cost".parse::<Criterion>().unwrap(), Criterion::Cost);
        assert_eq!(
            "time".parse::<Criterion>().unwrap_err(),
            DomainError::InvalidCriterion("time".into())
        );
        assert!("Distance".parse::<Criterion>().is_err());
    }

    #[test]
    fn criterion_serde() {
        assert_eq!(serde_json::to_string(&Criterion::Cost).unwrap(), "\"cost\"");
        let parsed: Criterion = serde_json::from_str("\"distance\"").unwrap();
        assert_eq!(parsed, Criterion::Distance);
        assert_eq!(Criterion::default(), Criterion::Distance);
    }

    #[test]
    fn new_trip_is_empty() {
        let trip = Trip::new(city("A"), city("B"), Criterion::Cost);
        assert!(!trip.is_valid());
        assert!(trip.path().is_empty());
        assert!(trip.routes().is_empty());
        assert_eq!(trip.total_distance(), 0.0);
        assert_eq!(trip.total_cost(), 0.0);
        assert_eq!(trip.stops(), 0);
        assert!(trip.segments().is_empty());
    }

    #[test]
    fn set_path_computes_totals() {
        let trip = two_leg_trip(Criterion::Distance);
        assert!(trip.is_valid());
        assert_eq!(trip.total_distance(), 2380.0);
        assert_eq!(trip.total_cost(), 8500.0);
        assert_eq!(trip.stops(), 1);
        assert_eq!(trip.path_names(), vec!["Delhi", "Mumbai", "Bangalore"]);
    }

    #[test]
    fn single_city_path() {
        let mut trip = Trip::new(city("A"), city("A"), Criterion::Distance);
        trip.set_path(vec![city("A")], vec![]).unwrap();
        assert!(trip.is_valid());
        assert_eq!(trip.stops(), 0);
        assert_eq!(trip.total_distance(), 0.0);
    }

    #[test]
    fn set_path_rejects_empty() {
        let mut trip = Trip::new(city("A"), city("B"), Criterion::Distance);
        let err = trip.set_path(vec![], vec![]).unwrap_err();
        assert_eq!(err, DomainError::InvalidPath("path cannot be empty"));
    }

    #[test]
    fn set_path_rejects_length_mismatch() {
        let mut trip = Trip::new(city("A"), city("B"), Criterion::Distance);
        assert!(trip.set_path(vec![city("A"), city("B")], vec![]).is_err());
        assert!(!trip.is_valid());
    }

    #[test]
    fn set_path_rejects_wrong_endpoints() {
        let mut trip = Trip::new(city("A"), city("C"), Criterion::Distance);
        let err = trip
            .set_path(vec![city("A"), city("B")], vec![route("A", "B", 1.0, 1.0)])
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidPath("path must run from origin to destination")
        );
    }

    #[test]
    fn set_path_rejects_disconnected_routes() {
        let mut trip = Trip::new(city("A"), city("C"), Criterion::Distance);
        let err = trip
            .set_path(
                vec![city("A"), city("B"), city("C")],
                vec![route("A", "B", 1.0, 1.0), route("A", "C", 1.0, 1.0)],
            )
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidPath("routes do not connect the path"));
    }

    #[test]
    fn set_path_only_once() {
        let mut trip = two_leg_trip(Criterion::Distance);
        let err = trip
            .set_path(vec![city("Delhi")], vec![])
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidPath("trip already has a path"));
        assert_eq!(trip.total_distance(), 2380.0);
    }

    #[test]
    fn segments_detail() {
        let segments = two_leg_trip(Criterion::Distance).segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(
            segments[0],
            TripSegment {
                step: 1,
                from: "Delhi".into(),
                to: "Mumbai".into(),
                distance: 1400.0,
                cost: 5000.0,
                cost_per_km: 3.57,
            }
        );
        assert_eq!(segments[1].step, 2);
        assert_eq!(segments[1].cost_per_km, 3.57);
    }

    #[test]
    fn compare_trips() {
        let via_mumbai = two_leg_trip(Criterion::Distance);
        let mut direct = Trip::new(city("Delhi"), city("Bangalore"), Criterion::Cost);
        direct
            .set_path(
                vec![city("Delhi"), city("Bangalore")],
                vec![route("Delhi", "Bangalore", 2150.0, 8000.0)],
            )
            .unwrap();

        let cmp = via_mumbai.compare_with(&direct);
        assert_eq!(cmp.distance_difference, 230.0);
        assert_eq!(cmp.cost_difference, 500.0);
        assert_eq!(cmp.stops_difference, 1);
        assert!(!cmp.this_trip_better_by_distance);
        assert!(!cmp.this_trip_better_by_cost);

        let cmp = direct.compare_with(&via_mumbai);
        assert_eq!(cmp.stops_difference, -1);
        assert!(cmp.this_trip_better_by_distance);
        assert!(cmp.this_trip_better_by_cost);

        let cmp = direct.compare_with(&direct);
        assert!(!cmp.this_trip_better_by_distance);
        assert!(!cmp.this_trip_better_by_cost);
    }

    #[test]
    fn summary() {
        let empty = Trip::new(city("A"), city("B"), Criterion::Cost);
        assert_eq!(
            empty.summary(),
            TripSummary::NoPath {
                origin: "A".into(),
                destination: "B".into()
            }
        );

        match two_leg_trip(Criterion::Cost).summary() {
            TripSummary::Found {
                stops,
                total_cost,
                optimized_by,
                ..
            } => {
                assert_eq!(stops, 1);
                assert_eq!(total_cost, 8500.0);
                assert_eq!(optimized_by, Criterion::Cost);
            }
            other => panic!("expected a found summary, got {other:?}"),
        }
    }

    #[test]
    fn display() {
        let empty = Trip::new(city("A"), city("B"), Criterion::Cost);
        assert_eq!(empty.to_string(), "No path found from A to B");

        let text = two_leg_trip(Criterion::Distance).to_string();
        assert!(text.starts_with("Trip: Delhi -> Mumbai -> Bangalore\n"));
        assert!(text.contains("Distance: 2380.00 km"));
        assert!(text.ends_with("Optimized by: distance"));
    }
}
