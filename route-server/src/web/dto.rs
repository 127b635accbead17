//! Data transfer objects for web requests and responses.
//!
//! Totals and differences are rounded to 2 decimal places here and only
//! here; the domain keeps full precision.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{City, Route, Trip, TripComparison, TripSegment, round2};
use crate::planner::TripsByCriterion;

/// A city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A route between two named cities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub origin: String,
    pub destination: String,
    /// Distance in kilometres
    pub distance: f64,
    pub cost: f64,
    pub bidirectional: bool,
}

/// Request to find a path.
#[derive(Debug, Deserialize)]
pub struct FindPathRequest {
    /// Starting city name
    pub origin: String,

    /// Destination city name
    pub destination: String,

    /// "distance" or "cost"
    #[serde(default = "default_optimize_by")]
    pub optimize_by: String,
}

fn default_optimize_by() -> String {
    "distance".to_string()
}

/// Request to compare the shortest and cheapest paths.
#[derive(Debug, Deserialize)]
pub struct ComparePathsRequest {
    pub origin: String,
    pub destination: String,
}

/// One step of a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentResult {
    /// 1-based step number
    pub step: usize,
    pub from_city: String,
    pub to_city: String,
    pub distance: f64,
    pub cost: f64,
    pub cost_per_km: f64,
}

/// A computed trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripResult {
    pub origin: String,
    pub destination: String,

    /// City names in travel order; empty when no path exists
    pub path: Vec<String>,

    pub routes: Vec<RouteResult>,
    pub segments: Vec<SegmentResult>,
    pub total_distance: f64,
    pub total_cost: f64,

    /// Intermediate stops
    pub stops: usize,

    pub optimization_type: String,

    /// False when the destination is unreachable
    pub valid: bool,
}

/// Differences between the shortest and the cheapest trip
/// (shortest minus cheapest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub distance_difference: f64,
    pub cost_difference: f64,
    pub stops_difference: i64,
    pub this_trip_better_by_distance: bool,
    pub this_trip_better_by_cost: bool,
}

/// Response for path comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparePathsResponse {
    pub by_distance: TripResult,
    pub by_cost: TripResult,
    pub comparison: ComparisonResult,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub cities_loaded: usize,
    pub routes_loaded: usize,
}

/// API information.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiInfoResponse {
    pub name: String,
    pub version: String,
    pub status: String,

    /// Endpoint name to path
    pub endpoints: BTreeMap<String, String>,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl CityResult {
    /// Create from a domain City.
    pub fn from_city(city: &City) -> Self {
        Self {
            name: city.name().to_string(),
            latitude: city.latitude(),
            longitude: city.longitude(),
        }
    }
}

impl RouteResult {
    /// Create from a domain Route.
    pub fn from_route(route: &Route) -> Self {
        Self {
            origin: route.origin().name().to_string(),
            destination: route.destination().name().to_string(),
            distance: route.distance(),
            cost: route.cost(),
            bidirectional: route.is_bidirectional(),
        }
    }
}

impl SegmentResult {
    fn from_segment(segment: TripSegment) -> Self {
        Self {
            step: segment.step,
            from_city: segment.from,
            to_city: segment.to,
            distance: segment.distance,
            cost: segment.cost,
            cost_per_km: segment.cost_per_km,
        }
    }
}

impl TripResult {
    /// Create from a domain Trip.
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            origin: trip.origin().name().to_string(),
            destination: trip.destination().name().to_string(),
            path: trip.path_names().into_iter().map(str::to_string).collect(),
            routes: trip.routes().iter().map(RouteResult::from_route).collect(),
            segments: trip
                .segments()
                .into_iter()
                .map(SegmentResult::from_segment)
                .collect(),
            total_distance: round2(trip.total_distance()),
            total_cost: round2(trip.total_cost()),
            stops: trip.stops(),
            optimization_type: trip.criterion().to_string(),
            valid: trip.is_valid(),
        }
    }
}

impl ComparisonResult {
    /// Create from a domain TripComparison.
    pub fn from_comparison(comparison: &TripComparison) -> Self {
        Self {
            distance_difference: round2(comparison.distance_difference),
            cost_difference: round2(comparison.cost_difference),
            stops_difference: comparison.stops_difference,
            this_trip_better_by_distance: comparison.this_trip_better_by_distance,
            this_trip_better_by_cost: comparison.this_trip_better_by_cost,
        }
    }
}

impl ComparePathsResponse {
    pub fn from_trips(trips: &TripsByCriterion) -> Self {
        Self {
            by_distance: TripResult::from_trip(&trips.by_distance),
            by_cost: TripResult::from_trip(&trips.by_cost),
            comparison: ComparisonResult::from_comparison(&trips.comparison()),
        }
    }
}
