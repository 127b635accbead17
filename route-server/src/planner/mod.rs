//! Path planner using Dijkstra search.
//!
//! This module answers: "what is the shortest (or cheapest) way from this
//! city to that one?" Searches run over a read-only [`Graph`](crate::graph::Graph)
//! under a single criterion at a time.

mod frontier;
mod search;


pub use search::{PathFinder, SearchError, TripsByCriterion};
