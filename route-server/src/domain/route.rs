//! Route (edge) types.

use std::fmt;

use super::city::round2;
use super::{City, Criterion, DomainError};

/// A weighted connection between two cities.
///
/// Every route carries two independent weights, `distance` (km) and `cost`
/// (currency units). Both are strictly positive and finite, and the
/// endpoints are always distinct cities.
///
/// Equality is order-independent when both routes are bidirectional and
/// order-sensitive otherwise. Weights do not take part in equality.
#[derive(Debug, Clone)]
pub struct Route {
    origin: City,
    destination: City,
    distance: f64,
    cost: f64,
    bidirectional: bool,
}

impl Route {
    /// Create a route, validating endpoints and weights.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_server::domain::{City, Route};
    ///
    /// let delhi = City::new("Delhi", 28.6139, 77.2090).unwrap();
    /// let mumbai = City::new("Mumbai", 19.0760, 72.8777).unwrap();
    ///
    /// let route = Route::new(delhi.clone(), mumbai, 1400.0, 5000.0, true).unwrap();
    /// assert_eq!(route.cost_per_km(), 3.57);
    ///
    /// // Self-loops are rejected
    /// assert!(Route::new(delhi.clone(), delhi, 1.0, 1.0, true).is_err());
    /// ```
    pub fn new(
        origin: City,
        destination: City,
        distance: f64,
        cost: f64,
        bidirectional: bool,
    ) -> Result<Self, DomainError> {
        if origin == destination {
            return Err(DomainError::InvalidRoute(
                "origin and destination cannot be the same city",
            ));
        }
        if !distance.is_finite() || distance <= 0.0 {
            return Err(DomainError::InvalidRoute("distance must be a positive number"));
        }
        if !cost.is_finite() || cost <= 0.0 {
            return Err(DomainError::InvalidRoute("cost must be a positive number"));
        }

        Ok(Route {
            origin,
            destination,
            distance,
            cost,
            bidirectional,
        })
    }

    pub fn origin(&self) -> &City {
        &self.origin
    }

    pub fn destination(&self) -> &City {
        &self.destination
    }

    /// Distance in kilometres.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn is_bidirectional(&self) -> bool {
        self.bidirectional
    }

    /// Returns the weight selected by `criterion`.
    pub fn weight(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Distance => self.distance,
            Criterion::Cost => self.cost,
        }
    }

    /// Cost per kilometre, rounded to 2 decimal places.
    pub fn cost_per_km(&self) -> f64 {
        round2(self.cost / self.distance)
    }

    /// Returns the same route travelled the other way.
    ///
    /// Only bidirectional routes can be reversed; the result is itself
    /// bidirectional.
    pub fn reverse(&self) -> Result<Route, DomainError> {
        if !self.bidirectional {
            return Err(DomainError::InvalidRoute(
                "cannot reverse a one-way route",
            ));
        }
        Ok(Route {
            origin: self.destination.clone(),
            destination: self.origin.clone(),
            distance: self.distance,
            cost: self.cost,
            bidirectional: true,
        })
    }

    /// The one-way reverse edge a graph materializes for a bidirectional route.
    pub(crate) fn materialized_reverse(&self) -> Route {
        Route {
            origin: self.destination.clone(),
            destination: self.origin.clone(),
            distance: self.distance,
            cost: self.cost,
            bidirectional: false,
        }
    }

    /// Same weights and direction, with endpoints replaced.
    ///
    /// The replacements must be equal to the current endpoints; this only
    /// swaps in canonical city values.
    pub(crate) fn with_endpoints(self, origin: City, destination: City) -> Route {
        debug_assert!(origin == self.origin && destination == self.destination);
        Route {
            origin,
            destination,
            ..self
        }
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        let same_direction =
            self.origin == other.origin && self.destination == other.destination;
        if self.bidirectional && other.bidirectional {
            same_direction
                || (self.origin == other.destination && self.destination == other.origin)
        } else {
            same_direction
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.bidirectional { "<->" } else { "->" };
        write!(
            f,
            "{} {} {} ({}km, ${})",
            self.origin.name(),
            arrow,
            self.destination.name(),
            self.distance,
            self.cost
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str) -> City {
        City::new(name, 0.0, 0.0).unwrap()
    }

    fn route(from: &str, to: &str, bidirectional: bool) -> Route {
        Route::new(city(from), city(to), 100.0, 250.0, bidirectional).unwrap()
    }

    #[test]
    fn rejects_self_loop() {
        let err = Route::new(city("Pune"), city("PUNE"), 1.0, 1.0, true).unwrap_err();
        assert!(matches!(err, DomainError::InvalidRoute(_)));
    }

    #[test]
    fn rejects_non_positive_weights() {
        assert!(Route::new(city("A"), city("B"), 0.0, 1.0, true).is_err());
        assert!(Route::new(city("A"), city("B"), -5.0, 1.0, true).is_err());
        assert!(Route::new(city("A"), city("B"), 1.0, 0.0, true).is_err());
        assert!(Route::new(city("A"), city("B"), 1.0, -0.1, true).is_err());
        assert!(Route::new(city("A"), city("B"), f64::NAN, 1.0, true).is_err());
        assert!(Route::new(city("A"), city("B"), 1.0, f64::INFINITY, true).is_err());
    }

    #[test]
    fn weight_by_criterion() {
        let r = route("A", "B", true);
        assert_eq!(r.weight(Criterion::Distance), 100.0);
        assert_eq!(r.weight(Criterion::Cost), 250.0);
    }

    #[test]
    fn cost_per_km_rounds() {
        let r = Route::new(city("A"), city("B"), 3.0, 10.0, true).unwrap();
        assert_eq!(r.cost_per_km(), 3.33);
    }

    #[test]
    fn bidirectional_equality_ignores_order() {
        assert_eq!(route("A", "B", true), route("B", "A", true));
        assert_eq!(route("A", "B", true), route("a", "b", true));
    }

    #[test]
    fn directional_equality_respects_order() {
        assert_ne!(route("A", "B", false), route("B", "A", false));
        assert_ne!(route("A", "B", true), route("B", "A", false));
        assert_eq!(route("A", "B", false), route("A", "B", true));
    }

    #[test]
    fn reverse_bidirectional() {
        let r = route("A", "B", true).reverse().unwrap();
        assert_eq!(r.origin().name(), "B");
        assert_eq!(r.destination().name(), "A");
        assert!(r.is_bidirectional());
        assert_eq!(r.distance(), 100.0);
    }

    #[test]
    fn reverse_one_way_fails() {
        assert!(route("A", "B", false).reverse().is_err());
    }

    #[test]
    fn materialized_reverse_is_one_way() {
        let r = route("A", "B", true).materialized_reverse();
        assert_eq!(r.origin().name(), "B");
        assert!(!r.is_bidirectional());
        assert_eq!(r.cost(), 250.0);
    }

    #[test]
    fn display() {
        assert_eq!(route("A", "B", true).to_string(), "A <-> B (100km, $250)");
        assert_eq!(route("A", "B", false).to_string(), "A -> B (100km, $250)");
    }
}
