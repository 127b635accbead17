//! Graph data records and JSON file storage.
//!
//! Converts between the on-disk record format and [`Graph`](crate::graph::Graph),
//! and validates record sets before they are loaded.

mod loader;
mod records;
mod validate;

pub use loader::{LoadError, load_graph_from_files, read_graph_data, save_graph_to_files};
pub use records::{CityRecord, GraphData, RouteRecord};
pub use validate::{ValidationReport, validate_data};
