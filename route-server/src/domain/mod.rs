//! Domain types for the route optimizer.
//!
//! This module contains the core value types: cities, the routes between
//! them, and the trips produced by a path search. All types enforce their
//! invariants at construction time, so code that receives these types can
//! trust their validity.

mod city;
mod error;
mod route;
mod trip;

pub use city::{City, CityKey, round2};
pub use error::DomainError;
pub use route::Route;
pub use trip::{Criterion, Trip, TripComparison, TripSegment, TripSummary};
