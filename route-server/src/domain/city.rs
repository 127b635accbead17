//! City types.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::DomainError;

/// Mean Earth radius in kilometres, used by [`City::distance_to`].
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Normalized city name used as the identity key in maps and sets.
///
/// Two names map to the same key when they are equal after trimming and
/// lowercasing.
///
/// # Examples
///
/// ```
/// use route_server::domain::CityKey;
///
/// assert_eq!(CityKey::new(" Mumbai "), CityKey::new("mumbai"));
/// assert_eq!(CityKey::new("MUMBAI").as_str(), "mumbai");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityKey(String);

impl CityKey {
    /// Normalize a name into a key.
    pub fn new(name: &str) -> Self {
        CityKey(name.trim().to_lowercase())
    }

    /// Returns the normalized name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named point with geographic coordinates.
///
/// Identity is name-based and case-insensitive: equality and hashing go
/// through [`CityKey`], while [`City::name`] keeps the original casing for
/// display. Any `City` value is valid by construction.
///
/// # Examples
///
/// ```
/// use route_server::domain::City;
///
/// let delhi = City::new("  New Delhi ", 28.6139, 77.2090).unwrap();
/// assert_eq!(delhi.name(), "New Delhi");
/// assert_eq!(delhi, City::new("new delhi", 0.0, 0.0).unwrap());
///
/// assert!(City::new("", 0.0, 0.0).is_err());
/// assert!(City::new("Nowhere", 91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct City {
    name: String,
    key: CityKey,
    latitude: f64,
    longitude: f64,
}

impl City {
    /// Create a city, validating its name and coordinates.
    ///
    /// The name is trimmed and must not be empty. Latitude must lie in
    /// [-90, 90] and longitude in [-180, 180].
    pub fn new(name: &str, latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidCity("name must not be empty"));
        }
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::InvalidCity(
                "latitude must be between -90 and 90",
            ));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCity(
                "longitude must be between -180 and 180",
            ));
        }

        Ok(City {
            name: name.to_string(),
            key: CityKey::new(name),
            latitude,
            longitude,
        })
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the normalized identity key.
    pub fn key(&self) -> &CityKey {
        &self.key
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another city in kilometres (haversine),
    /// rounded to 2 decimal places.
    pub fn distance_to(&self, other: &City) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = lat2 - lat1;
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        round2(EARTH_RADIUS_KM * c)
    }
}

impl PartialEq for City {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for City {}

impl Hash for City {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.latitude, self.longitude)
    }
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Case and surrounding whitespace never change identity
        #[test]
        fn key_ignores_case_and_padding(name in "[A-Za-z][A-Za-z ]{0,20}[A-Za-z]", pad in " {0,3}") {
            let padded = format!("{pad}{name}{pad}");
            let upper = City::new(&padded.to_uppercase(), 0.0, 0.0).unwrap();
            let lower = City::new(&name.to_lowercase(), 0.0, 0.0).unwrap();
            prop_assert_eq!(upper.key(), lower.key());
            prop_assert_eq!(upper, lower);
        }

        /// Any in-range coordinate pair is accepted
        #[test]
        fn valid_coordinates_accepted(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            prop_assert!(City::new("X", lat, lon).is_ok());
        }
    }
}
