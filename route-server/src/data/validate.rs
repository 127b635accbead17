//! Pre-flight checks on graph records.
//!
//! Unlike [`GraphData::to_graph`], which stops at the first problem,
//! validation collects every problem it finds so a data file can be fixed
//! in one pass.

use std::collections::{BTreeSet, HashSet};

use super::records::GraphData;
use crate::domain::CityKey;

/// Outcome of [`validate_data`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Check records for common problems.
///
/// Reports empty city or route lists, duplicate city names (trimmed,
/// case-insensitive) and routes naming undeclared cities.
pub fn validate_data(data: &GraphData) -> ValidationReport {
    let mut errors = Vec::new();

    if data.cities.is_empty() {
        errors.push("no cities found in data".to_string());
    }
    if data.routes.is_empty() {
        errors.push("no routes found in data".to_string());
    }

    let mut declared = HashSet::new();
    let mut duplicates = BTreeSet::new();
    for city in &data.cities {
        let key = CityKey::new(&city.name);
        if !declared.insert(key.clone()) {
            duplicates.insert(key);
        }
    }
    if !duplicates.is_empty() {
        let names: Vec<&str> = duplicates.iter().map(CityKey::as_str).collect();
        errors.push(format!("duplicate cities found: {}", names.join(", ")));
    }

    for route in &data.routes {
        if !declared.contains(&CityKey::new(&route.origin)) {
            errors.push(format!(
                "route references unknown origin city: {}",
                route.origin
            ));
        }
        if !declared.contains(&CityKey::new(&route.destination)) {
            errors.push(format!(
                "route references unknown destination city: {}",
                route.destination
            ));
        }
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}
